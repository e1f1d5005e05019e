// App business logic tests

use crate::contact::{FormState, ProjectType};
use crate::settings::Settings;
use crate::tui::{App, Screen};
use std::time::{Duration, Instant};

/// App with fast contact delivery and reproducible reply delays
fn create_test_app() -> App {
    let settings = Settings {
        contact_submit_delay_ms: 10,
        ..Settings::default()
    };
    App::with_seed(settings, 23)
}

fn fill_contact_form(app: &mut App) {
    let form = &mut app.contact_screen.form;
    form.name = "Grace".to_string();
    form.organization = "Harbor Survey".to_string();
    form.project_type = Some(ProjectType::SpatialConsulting);
    form.message = "Parcel data cleanup".to_string();
}

/// Poll the background delivery until it finishes or two seconds pass
fn wait_for_submission(app: &mut App) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if app.poll_contact_submission() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn test_app_creation() {
    let app = create_test_app();

    assert_eq!(app.current_screen, Screen::Home);
    assert!(!app.should_quit);
    assert!(!app.chat.is_open());
    assert_eq!(app.chat.messages().len(), 1);
    assert_eq!(app.page_scroll, 0);
    assert!(app.submission_handle.is_none());
}

#[test]
fn test_toggle_chat_uses_viewport() {
    let mut app = create_test_app();
    let now = Instant::now();

    app.set_viewport(60, 30);
    app.toggle_chat(now);
    assert!(app.chat.is_open());
    assert!(app.chat.background_scroll_locked(), "60 columns is compact");

    app.toggle_chat(now);
    assert!(!app.chat.is_open());
    assert!(!app.chat.background_scroll_locked());
}

#[test]
fn test_page_scroll_suspended_while_locked() {
    let mut app = create_test_app();

    app.scroll_page_down(5);
    app.scroll_page_down(5);
    assert_eq!(app.page_scroll, 2);

    app.set_viewport(60, 30);
    app.toggle_chat(Instant::now());
    app.scroll_page_down(5);
    app.scroll_page_up();
    assert_eq!(app.page_scroll, 2, "Background must not scroll under a compact panel");

    app.chat.close();
    app.scroll_page_up();
    assert_eq!(app.page_scroll, 1);
}

#[test]
fn test_narrowing_terminal_locks_page_under_open_panel() {
    let mut app = create_test_app();
    app.set_viewport(120, 40);
    app.toggle_chat(Instant::now());
    app.scroll_page_down(5);
    assert_eq!(app.page_scroll, 1, "Wide panel leaves the page scrollable");

    app.set_viewport(60, 30);
    assert!(app.chat.background_scroll_locked());
    app.scroll_page_down(5);
    assert_eq!(app.page_scroll, 1);

    app.set_viewport(120, 40);
    assert!(!app.chat.background_scroll_locked());
    app.scroll_page_down(5);
    assert_eq!(app.page_scroll, 2);
}

#[test]
fn test_page_scroll_bounds() {
    let mut app = create_test_app();
    app.scroll_page_up();
    assert_eq!(app.page_scroll, 0);

    for _ in 0..10 {
        app.scroll_page_down(3);
    }
    assert_eq!(app.page_scroll, 3);
}

#[test]
fn test_tick_delivers_replies() {
    let mut app = create_test_app();
    let t0 = Instant::now();
    app.chat.send_message("hello", t0);

    app.tick(t0 + Duration::from_millis(2000));
    assert_eq!(app.chat.messages().len(), 3);
    assert!(!app.chat.is_typing());
}

#[test]
fn test_navigating_away_closes_chat() {
    let mut app = create_test_app();
    app.toggle_chat(Instant::now());

    app.show_contact_screen();
    assert_eq!(app.current_screen, Screen::Contact);
    assert!(!app.chat.is_open());

    app.toggle_chat(Instant::now());
    app.back_to_home();
    assert_eq!(app.current_screen, Screen::Home);
    assert!(!app.chat.is_open());
}

#[test]
fn test_invalid_contact_form_not_submitted() {
    let mut app = create_test_app();
    app.show_contact_screen();

    app.submit_contact_form();

    assert!(app.submission_handle.is_none());
    assert!(app.contact_screen.is_error);
    assert_eq!(
        app.contact_screen.status_message.as_deref(),
        Some("Validation error: Name is required")
    );
    assert_eq!(*app.contact_screen.form.state(), FormState::Idle);
}

#[test]
fn test_contact_submission_succeeds() {
    let mut app = create_test_app();
    app.show_contact_screen();
    fill_contact_form(&mut app);

    app.submit_contact_form();
    assert!(app.submission_handle.is_some());
    assert_eq!(*app.contact_screen.form.state(), FormState::Submitting);

    assert!(wait_for_submission(&mut app), "Simulated delivery should finish");
    assert!(app.submission_handle.is_none());
    assert!(app.contact_screen.is_sent());
    assert!(!app.contact_screen.is_error);
}

#[test]
fn test_back_to_home_resets_sent_form() {
    let mut app = create_test_app();
    app.show_contact_screen();
    fill_contact_form(&mut app);
    app.submit_contact_form();
    assert!(wait_for_submission(&mut app));

    app.back_to_home();
    assert_eq!(*app.contact_screen.form.state(), FormState::Idle);
    assert!(app.contact_screen.form.name.is_empty());
}

#[test]
fn test_unsent_form_survives_navigation() {
    let mut app = create_test_app();
    app.show_contact_screen();
    app.contact_screen.form.name = "Draft".to_string();

    app.back_to_home();
    app.show_contact_screen();
    assert_eq!(app.contact_screen.form.name, "Draft");
}

#[test]
fn test_quit_unmounts_chat() {
    let mut app = create_test_app();
    let now = Instant::now();
    app.set_viewport(60, 30);
    app.toggle_chat(now);
    app.chat.send_message("hello", now);

    app.quit();

    assert!(app.should_quit);
    assert!(!app.chat.is_open());
    assert!(!app.chat.is_typing());
    assert!(!app.chat.background_scroll_locked());
}
