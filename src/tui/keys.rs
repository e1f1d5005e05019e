//! Key routing for the terminal front end

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::tui::app::App;
use crate::tui::types::Screen;
use crate::tui::ui;

/// Plain or shifted keys only; Ctrl/Alt chords never type text
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

/// Route one key press
///
/// `page_height` is the terminal height, used to bound page scrolling.
pub fn handle_key(app: &mut App, key: KeyEvent, page_height: u16) {
    let now = Instant::now();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    if key.code == KeyCode::Char('o') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.toggle_chat(now);
        return;
    }

    if app.chat.is_open() {
        handle_chat_key(app, key, page_height, now);
        return;
    }

    match app.current_screen {
        Screen::Home => handle_home_key(app, key, page_height, now),
        Screen::Contact => handle_contact_key(app, key),
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent, page_height: u16, now: Instant) {
    match key.code {
        KeyCode::Esc => app.chat.close(),
        KeyCode::Enter if key.modifiers.is_empty() => {
            app.chat.submit_input(now);
        }
        KeyCode::F(n @ 1..=3) => {
            app.chat.select_quick_action(usize::from(n - 1), now);
        }
        KeyCode::Backspace => app.chat.backspace(),
        KeyCode::PageUp => {
            let max = ui::max_scroll_back(app);
            app.chat.scroll_up(1);
            app.chat.clamp_scroll_back(max);
        }
        KeyCode::PageDown => app.chat.scroll_down(1),
        // The page behind the panel; ignored while the lock is held
        KeyCode::Up => app.scroll_page_up(),
        KeyCode::Down => app.scroll_page_down(ui::max_page_scroll(page_height)),
        KeyCode::Char(c) if is_text_input(&key) => {
            app.chat.insert_char(c);
        }
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent, page_height: u16, now: Instant) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Up => app.scroll_page_up(),
        KeyCode::Down => app.scroll_page_down(ui::max_page_scroll(page_height)),
        KeyCode::Char(c) if is_text_input(&key) => match c {
            'q' => app.quit(),
            'o' => app.toggle_chat(now),
            'c' => app.show_contact_screen(),
            'k' => app.scroll_page_up(),
            'j' => app.scroll_page_down(ui::max_page_scroll(page_height)),
            _ => {}
        },
        _ => {}
    }
}

fn handle_contact_key(app: &mut App, key: KeyEvent) {
    if app.contact_screen.is_sent() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.back_to_home();
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.back_to_home(),
        KeyCode::Tab => app.contact_screen.next_field(),
        KeyCode::BackTab => app.contact_screen.previous_field(),
        KeyCode::Left => app.contact_screen.cycle_option(false),
        KeyCode::Right => app.contact_screen.cycle_option(true),
        KeyCode::Enter => app.submit_contact_form(),
        KeyCode::Backspace => app.contact_screen.backspace(),
        KeyCode::Char(c) if is_text_input(&key) => app.contact_screen.add_char(c),
        _ => {}
    }
}
