//! UI rendering module - screen-specific rendering functions
//!
//! Each screen has its own file. The chat widget is drawn last so it floats
//! over whichever screen is showing.

mod home;
mod contact_form;
mod chat_panel;
mod helpers;

use ratatui::Frame;
use crate::tui::types::Screen;
use crate::tui::app::App;

// Re-export render functions
pub use home::{render_home, max_page_scroll, HOME_TEXT};
pub use contact_form::render_contact_form;
pub use chat_panel::{render_chat_bubble, render_chat_panel, max_scroll_back, transcript_lines};

// Re-export helper functions
pub use helpers::{bubble_area, format_timestamp, panel_area, visible_range, wrap_text};

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Home => render_home(f, app),
        Screen::Contact => render_contact_form(f, app),
    }

    if app.chat.is_open() {
        render_chat_panel(f, app);
    } else {
        render_chat_bubble(f, app);
    }
}
