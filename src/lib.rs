//! Portfolio Chat - the offline assistant widget from the portfolio site
//!
//! This library provides the conversational widget (canned keyword replies with
//! simulated typing latency), the contact form state machine, and the terminal
//! front end that drives both.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod contact;
pub mod settings;
pub mod tui;

/// Result type alias for Portfolio Chat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Portfolio Chat operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings file could not be used
    #[error("Settings error: {0}")]
    Settings(String),

    /// Contact form input rejected
    #[error("Validation error: {0}")]
    Validation(String),

    /// Contact inquiry could not be delivered
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging to an append-only file
///
/// The terminal UI owns stdout, so log lines go to `path` without ANSI colors.
pub fn init_to_file<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Settings(format!("Failed to install logger: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests;
