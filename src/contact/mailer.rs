//! Contact inquiry delivery

use crate::contact::form::ContactInquiry;
use crate::Result;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;

/// Proof that an inquiry was accepted for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// When the mailer accepted the inquiry
    pub accepted_at: DateTime<Utc>,
    /// Who the reply will go to
    pub from_name: String,
}

/// Something that can deliver a contact inquiry
///
/// This is where a real mail backend plugs in; the form only ever talks to
/// this trait.
pub trait Mailer {
    /// Deliver one inquiry
    fn deliver(
        &self,
        inquiry: &ContactInquiry,
    ) -> impl Future<Output = Result<DeliveryReceipt>> + Send;
}

/// Stand-in mailer: waits a fixed delay and always succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedMailer {
    delay: Duration,
}

impl SimulatedMailer {
    /// Create a mailer with the given delivery delay
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delivery delay
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1200))
    }
}

impl Mailer for SimulatedMailer {
    fn deliver(
        &self,
        inquiry: &ContactInquiry,
    ) -> impl Future<Output = Result<DeliveryReceipt>> + Send {
        let delay = self.delay;
        let from_name = inquiry.name.clone();
        let project = inquiry.project_type.label().to_string();
        async move {
            tokio::time::sleep(delay).await;
            tracing::info!("Simulated delivery of inquiry from {} ({})", from_name, project);
            Ok::<_, crate::Error>(DeliveryReceipt {
                accepted_at: Utc::now(),
                from_name,
            })
        }
    }
}
