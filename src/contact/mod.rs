//! Contact form module
//!
//! - `form` - Form fields, validation, and submission state
//! - `mailer` - Delivery seam and the simulated mailer used today

pub mod form;
pub mod mailer;

pub use form::{BudgetRange, ContactForm, ContactInquiry, FormField, FormState, ProjectType};
pub use mailer::{DeliveryReceipt, Mailer, SimulatedMailer};
