//! Conversation transcript

use crate::chat::message::{Message, Role, WELCOME_ID};
use chrono::Utc;

/// Greeting the assistant opens every conversation with
pub const WELCOME_MESSAGE: &str = "Hi there! I'm Scotch's AI assistant. Ask me about his GIS projects, spatial consulting services, or how we might collaborate.";

/// Ordered, append-only list of messages, oldest first
///
/// A conversation is never empty: it is created holding the assistant's
/// welcome message and messages are only ever appended.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create a conversation seeded with the welcome message
    pub fn new() -> Self {
        let welcome = Message::new(
            WELCOME_ID.to_string(),
            Role::Assistant,
            WELCOME_MESSAGE.to_string(),
            Utc::now().timestamp_millis(),
        );
        Self {
            messages: vec![welcome],
        }
    }

    /// Append a message to the end of the transcript
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message
    pub fn last(&self) -> &Message {
        // Seeded on construction and never drained
        &self.messages[self.messages.len() - 1]
    }

    /// Number of messages, including the welcome message
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while only the welcome message is present
    pub fn is_seed_only(&self) -> bool {
        self.messages.len() == 1
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
