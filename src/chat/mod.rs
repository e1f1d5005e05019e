//! Chat widget module
//!
//! This module holds the assistant widget and everything it owns:
//! - `message` - Message structures and id generation
//! - `conversation` - The never-empty, append-only transcript
//! - `responder` - Ordered keyword rules and their canned replies
//! - `scheduler` - Simulated reply latency, serialized per widget
//! - `widget` - The controller tying visibility, input, and replies together

// Submodules
pub mod conversation;
pub mod message;
pub mod responder;
pub mod scheduler;
pub mod widget;

// Re-export commonly used types
pub use conversation::Conversation;
pub use message::{Message, MessageIdGenerator, Role};
pub use responder::{classify, classify_and_reply, Intent, ReplyRule, REPLY_RULES};
pub use scheduler::{PendingReply, ReplyLatency, ReplyScheduler};
pub use widget::{ChatWidget, Viewport, QUICK_ACTIONS};
