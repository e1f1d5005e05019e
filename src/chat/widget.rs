//! Chat widget controller
//!
//! Owns the open/closed state, the input buffer, the conversation, and the
//! pending simulated replies. All time-dependent behavior takes an explicit
//! `now` and advances from [`ChatWidget::tick`], which the event loop calls on
//! every iteration.

use crate::chat::conversation::Conversation;
use crate::chat::message::{Message, MessageIdGenerator, Role};
use crate::chat::responder::classify_and_reply;
use crate::chat::scheduler::ReplyScheduler;
use crate::settings::Settings;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Suggested prompts offered on a fresh conversation
pub const QUICK_ACTIONS: [&str; 3] = [
    "What services do you offer?",
    "Tell me about your GIS work",
    "How can we collaborate?",
];

/// Size of the area the widget is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether the viewport is narrower than `compact_width`
    pub fn is_compact(&self, compact_width: u16) -> bool {
        self.width < compact_width
    }
}

/// The floating assistant widget
#[derive(Debug)]
pub struct ChatWidget {
    conversation: Conversation,
    ids: MessageIdGenerator,
    scheduler: ReplyScheduler,
    open: bool,
    input: String,
    input_focused: bool,
    focus_due_at: Option<Instant>,
    focus_delay: Duration,
    compact_width: u16,
    background_scroll_locked: bool,
    cancel_pending_on_close: bool,
    scroll_back: usize,
}

impl ChatWidget {
    /// Create a closed widget holding only the welcome message
    pub fn new(settings: &Settings) -> Self {
        Self::with_scheduler(settings, ReplyScheduler::new(settings.reply_latency()))
    }

    /// Create a widget whose reply delays come from a fixed seed
    pub fn with_seed(settings: &Settings, seed: u64) -> Self {
        Self::with_scheduler(
            settings,
            ReplyScheduler::with_seed(settings.reply_latency(), seed),
        )
    }

    fn with_scheduler(settings: &Settings, scheduler: ReplyScheduler) -> Self {
        Self {
            conversation: Conversation::new(),
            ids: MessageIdGenerator::new(),
            scheduler,
            open: false,
            input: String::new(),
            input_focused: false,
            focus_due_at: None,
            focus_delay: settings.focus_delay(),
            compact_width: settings.compact_width,
            background_scroll_locked: false,
            cancel_pending_on_close: settings.cancel_pending_on_close,
            scroll_back: 0,
        }
    }

    /// Whether the panel is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the assistant is "typing" a reply
    pub fn is_typing(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Replies scheduled but not yet delivered
    pub fn pending_replies(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// The transcript
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Transcript messages, oldest first
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// Current contents of the input field
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the input field has received focus since opening
    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Whether page scrolling behind the panel is suspended
    pub fn background_scroll_locked(&self) -> bool {
        self.background_scroll_locked
    }

    /// Whether the quick-action shortcuts should be offered
    pub fn quick_actions_visible(&self) -> bool {
        self.conversation.is_seed_only() && !self.is_typing()
    }

    /// Whether the send control is enabled
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_typing()
    }

    /// Lines scrolled back from the newest entry (0 = pinned to the bottom)
    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// Flip the panel between open and closed
    pub fn toggle(&mut self, now: Instant, viewport: Viewport) {
        if self.open {
            self.close();
        } else {
            self.open(now, viewport);
        }
    }

    /// Open the panel
    ///
    /// Focus moves to the input after the configured delay. On a compact
    /// viewport the page behind the panel stops scrolling until it closes.
    pub fn open(&mut self, now: Instant, viewport: Viewport) {
        if self.open {
            return;
        }
        self.open = true;
        self.focus_due_at = Some(now + self.focus_delay);
        self.background_scroll_locked = viewport.is_compact(self.compact_width);
        self.scroll_back = 0;
        info!(
            "Chat opened (compact: {}, pending replies: {})",
            self.background_scroll_locked,
            self.scheduler.pending_count()
        );
    }

    /// Re-evaluate the scroll lock after a resize
    ///
    /// While open, a compact viewport keeps the page behind the panel still.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !self.open {
            return;
        }
        let locked = viewport.is_compact(self.compact_width);
        if locked != self.background_scroll_locked {
            debug!("Background scroll lock now {} at {} columns", locked, viewport.width);
            self.background_scroll_locked = locked;
        }
    }

    /// Close the panel (close button, backdrop)
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.input_focused = false;
        self.focus_due_at = None;
        self.background_scroll_locked = false;
        if self.cancel_pending_on_close {
            let cancelled = self.scheduler.cancel_all();
            if cancelled > 0 {
                info!("Cancelled {} pending replies on close", cancelled);
            }
        }
        info!("Chat closed");
    }

    /// Type a character into the input field
    ///
    /// Ignored until the input has focus. Returns whether the character was taken.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.open || !self.input_focused || c.is_control() {
            return false;
        }
        self.input.push(c);
        true
    }

    /// Delete the last character of the input
    pub fn backspace(&mut self) {
        if self.open && self.input_focused {
            self.input.pop();
        }
    }

    /// Empty the input field
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Send whatever is in the input field
    pub fn submit_input(&mut self, now: Instant) -> bool {
        let text = std::mem::take(&mut self.input);
        let accepted = self.send_message(&text, now);
        if !accepted {
            // Whitespace-only input stays as typed
            self.input = text;
        }
        accepted
    }

    /// Append a user message and schedule the assistant's reply
    ///
    /// Empty or whitespace-only text is ignored. Returns whether the message
    /// was accepted.
    pub fn send_message(&mut self, text: &str, now: Instant) -> bool {
        let content = text.trim();
        if content.is_empty() {
            return false;
        }

        let message = self.ids.create(Role::User, content);
        debug!("User message {} appended", message.id);
        self.conversation.push(message);
        self.input.clear();

        let due_at = self.scheduler.schedule(content.to_string(), now);
        debug!(
            "Reply scheduled in {:?} ({} pending)",
            due_at.saturating_duration_since(now),
            self.scheduler.pending_count()
        );
        self.scroll_back = 0;
        true
    }

    /// Send the quick action at `index`, when quick actions are on offer
    pub fn select_quick_action(&mut self, index: usize, now: Instant) -> bool {
        if !self.quick_actions_visible() {
            return false;
        }
        match QUICK_ACTIONS.get(index) {
            Some(action) => self.send_message(action, now),
            None => false,
        }
    }

    /// Advance timers: fire a due focus request and deliver due replies
    ///
    /// Returns the assistant messages appended by this call.
    pub fn tick(&mut self, now: Instant) -> Vec<Message> {
        if let Some(due_at) = self.focus_due_at {
            if now >= due_at {
                self.focus_due_at = None;
                self.input_focused = true;
            }
        }

        let due = self.scheduler.take_due(now);
        let mut delivered = Vec::with_capacity(due.len());
        for reply in due {
            let message = self.ids.create(Role::Assistant, classify_and_reply(&reply.prompt));
            debug!("Assistant reply {} appended", message.id);
            self.conversation.push(message.clone());
            delivered.push(message);
        }
        if !delivered.is_empty() {
            self.scroll_back = 0;
        }
        delivered
    }

    /// Scroll the transcript back towards older messages
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_add(lines);
    }

    /// Scroll the transcript forward towards the newest message
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Clamp the scroll-back distance to what the transcript can show
    pub fn clamp_scroll_back(&mut self, max: usize) {
        self.scroll_back = self.scroll_back.min(max);
    }

    /// Tear the widget down: cancel timers and release the scroll lock
    pub fn unmount(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        if cancelled > 0 {
            info!("Cancelled {} pending replies on unmount", cancelled);
        }
        self.open = false;
        self.input_focused = false;
        self.focus_due_at = None;
        self.background_scroll_locked = false;
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}
