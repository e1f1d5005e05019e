//! Main TUI application state and logic

use crate::chat::{ChatWidget, Viewport};
use crate::contact::{DeliveryReceipt, Mailer, SimulatedMailer};
use crate::settings::Settings;
use crate::tui::screens::ContactFormScreen;
use crate::tui::types::Screen;
use std::thread::JoinHandle;
use std::time::Instant;

/// Application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Loaded settings
    pub settings: Settings,
    /// The floating assistant widget
    pub chat: ChatWidget,
    /// Contact screen (kept so a half-filled form survives navigation)
    pub contact_screen: ContactFormScreen,
    /// Scroll offset of the page behind the widget
    pub page_scroll: u16,
    /// Last known terminal size
    pub viewport: Viewport,
    /// Should quit
    pub should_quit: bool,
    /// Background contact delivery handle
    pub submission_handle: Option<JoinHandle<crate::Result<DeliveryReceipt>>>,
    mailer: SimulatedMailer,
}

impl App {
    /// Create new application
    pub fn new(settings: Settings) -> Self {
        let chat = ChatWidget::new(&settings);
        Self::with_chat(settings, chat)
    }

    /// Create an application whose reply delays come from a fixed seed
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        let chat = ChatWidget::with_seed(&settings, seed);
        Self::with_chat(settings, chat)
    }

    fn with_chat(settings: Settings, chat: ChatWidget) -> Self {
        let mailer = SimulatedMailer::new(settings.contact_submit_delay());
        Self {
            current_screen: Screen::Home,
            settings,
            chat,
            contact_screen: ContactFormScreen::new(),
            page_scroll: 0,
            viewport: Viewport::new(120, 40),
            should_quit: false,
            submission_handle: None,
            mailer,
        }
    }

    /// Record the terminal size
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.chat.set_viewport(self.viewport);
    }

    /// Advance all timers. Called once per event loop iteration.
    pub fn tick(&mut self, now: Instant) {
        let delivered = self.chat.tick(now);
        if !delivered.is_empty() {
            tracing::debug!("Delivered {} assistant replies", delivered.len());
        }
        self.poll_contact_submission();
    }

    /// Open or close the chat panel
    pub fn toggle_chat(&mut self, now: Instant) {
        self.chat.toggle(now, self.viewport);
    }

    /// Scroll the page up, unless the chat panel has it locked
    pub fn scroll_page_up(&mut self) {
        if !self.chat.background_scroll_locked() {
            self.page_scroll = self.page_scroll.saturating_sub(1);
        }
    }

    /// Scroll the page down, unless the chat panel has it locked
    pub fn scroll_page_down(&mut self, max_offset: u16) {
        if !self.chat.background_scroll_locked() && self.page_scroll < max_offset {
            self.page_scroll += 1;
        }
    }

    /// Show contact screen
    ///
    /// Navigating away closes the chat panel.
    pub fn show_contact_screen(&mut self) {
        self.chat.close();
        self.current_screen = Screen::Contact;
        self.page_scroll = 0;
    }

    /// Return to the landing page
    pub fn back_to_home(&mut self) {
        self.chat.close();
        if self.contact_screen.is_sent() {
            self.contact_screen.reset();
        }
        self.current_screen = Screen::Home;
        self.page_scroll = 0;
    }

    /// Validate the contact form and start background delivery
    pub fn submit_contact_form(&mut self) {
        if self.submission_handle.is_some() {
            return;
        }

        let inquiry = match self.contact_screen.form.begin_submit() {
            Ok(inquiry) => inquiry,
            Err(e) => {
                self.contact_screen.set_status(e.to_string(), true);
                return;
            }
        };
        self.contact_screen.set_status("Sending...", false);
        tracing::info!("Submitting contact inquiry from {}", inquiry.name);

        let mailer = self.mailer;
        let handle = std::thread::spawn(move || -> crate::Result<DeliveryReceipt> {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async move { mailer.deliver(&inquiry).await })
        });

        self.submission_handle = Some(handle);
    }

    /// Poll for contact delivery completion
    ///
    /// Returns true if delivery completed this call.
    pub fn poll_contact_submission(&mut self) -> bool {
        if let Some(handle) = self.submission_handle.take() {
            if handle.is_finished() {
                let outcome = match handle.join() {
                    Ok(result) => result,
                    Err(_) => Err(crate::Error::Delivery(
                        "Delivery thread panicked".to_string(),
                    )),
                };
                match outcome {
                    Ok(receipt) => {
                        tracing::info!(
                            "Inquiry from {} accepted at {}",
                            receipt.from_name,
                            receipt.accepted_at
                        );
                        self.contact_screen.form.finish_submit(Ok(()));
                        self.contact_screen.set_status("Message sent", false);
                    }
                    Err(e) => {
                        tracing::warn!("Contact delivery failed: {}", e);
                        self.contact_screen.set_status(format!("Failed to send: {}", e), true);
                        self.contact_screen.form.finish_submit(Err(e));
                    }
                }
                return true;
            } else {
                // Thread still running, put it back
                self.submission_handle = Some(handle);
            }
        }
        false
    }

    /// Quit: tear the widget down so no timer outlives the UI
    pub fn quit(&mut self) {
        self.chat.unmount();
        self.should_quit = true;
    }
}
