//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability.
//! The chat widget floats over whichever screen is showing.

pub mod types;
pub mod screens;
pub mod app;
pub mod keys;
pub mod ui;

// Re-export main types for convenience
pub use types::Screen;
pub use screens::*;
pub use app::App;
pub use keys::handle_key;
