//! Application settings and configuration

use crate::chat::ReplyLatency;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings
///
/// Tuning for the chat widget and the contact form. Settings are stored in
/// JSON format; missing keys fall back to their defaults.
///
/// # Example
/// ```rust,no_run
/// use portfolio_chat::settings::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// // Slow the assistant down and save
/// settings.reply_min_delay_ms = 2000;
/// settings.reply_max_delay_ms = 3500;
/// settings.save("settings.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shortest simulated reply delay in milliseconds (inclusive)
    pub reply_min_delay_ms: u64,
    /// Longest simulated reply delay in milliseconds (exclusive)
    pub reply_max_delay_ms: u64,
    /// Delay between opening the panel and focusing the input, in milliseconds
    pub focus_delay_ms: u64,
    /// Terminals narrower than this many columns use the full-screen panel
    pub compact_width: u16,
    /// Drop pending replies when the panel closes instead of letting them land
    pub cancel_pending_on_close: bool,
    /// Simulated contact form delivery time in milliseconds
    pub contact_submit_delay_ms: u64,
    /// Optional log file; the terminal UI owns stdout
    pub log_file: Option<String>,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    /// The loaded settings, or default settings if file doesn't exist
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("Failed to read settings: {}", e)))?;

        // Handle empty file (return defaults)
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Settings(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Save settings to a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to save the settings file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::Settings(format!("Failed to create settings directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .map_err(|e| Error::Settings(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Check that the values can be used together
    pub fn validate(&self) -> Result<()> {
        if self.reply_min_delay_ms >= self.reply_max_delay_ms {
            return Err(Error::Settings(format!(
                "reply_min_delay_ms ({}) must be below reply_max_delay_ms ({})",
                self.reply_min_delay_ms, self.reply_max_delay_ms
            )));
        }
        if self.compact_width == 0 {
            return Err(Error::Settings("compact_width must be positive".to_string()));
        }
        Ok(())
    }

    /// Reply delay range for the widget
    pub fn reply_latency(&self) -> ReplyLatency {
        ReplyLatency::from_millis(self.reply_min_delay_ms, self.reply_max_delay_ms)
    }

    /// Focus delay as a duration
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    /// Contact delivery delay as a duration
    pub fn contact_submit_delay(&self) -> Duration {
        Duration::from_millis(self.contact_submit_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reply_min_delay_ms: 1200,
            reply_max_delay_ms: 2000,
            focus_delay_ms: 300,
            compact_width: 80,
            cancel_pending_on_close: false,
            contact_submit_delay_ms: 1200,
            log_file: None,
        }
    }
}
