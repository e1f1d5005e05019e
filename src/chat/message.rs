//! Message structures and id generation

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Id of the seed message every conversation starts with
pub const WELCOME_ID: &str = "welcome";

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The simulated assistant
    Assistant,
    /// The visitor typing into the widget
    User,
}

impl Role {
    /// Label shown in front of the message in the transcript
    pub fn label(&self) -> &str {
        match self {
            Self::Assistant => "Assistant",
            Self::User => "You",
        }
    }
}

/// One exchanged utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique id, see [`MessageIdGenerator`]
    pub id: String,
    /// Author of the message
    pub role: Role,
    /// Display text
    pub content: String,
    /// Creation time (Unix milliseconds)
    pub timestamp: i64,
}

impl Message {
    /// Create a new message
    pub fn new(id: String, role: Role, content: String, timestamp: i64) -> Self {
        Self {
            id,
            role,
            content,
            timestamp,
        }
    }

    /// Whether the assistant wrote this message
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Produces timestamp-derived message ids
///
/// Ids look like `1718000000000-3`. The trailing sequence number keeps ids
/// distinct when several messages are created within the same millisecond.
#[derive(Debug, Default)]
pub struct MessageIdGenerator {
    sequence: u64,
}

impl MessageIdGenerator {
    /// Create a generator starting at sequence 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for a message created at `timestamp`
    pub fn next_id(&mut self, timestamp: i64) -> String {
        self.sequence += 1;
        format!("{}-{}", timestamp, self.sequence)
    }

    /// Build a message stamped with the current wall-clock time
    pub fn create(&mut self, role: Role, content: impl Into<String>) -> Message {
        let timestamp = Utc::now().timestamp_millis();
        let id = self.next_id(timestamp);
        Message::new(id, role, content.into(), timestamp)
    }
}
