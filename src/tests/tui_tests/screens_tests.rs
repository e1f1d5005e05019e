// ContactFormScreen tests

use crate::contact::{BudgetRange, FormField, ProjectType};
use crate::tui::screens::ContactFormScreen;

#[test]
fn test_contact_screen_creation() {
    let screen = ContactFormScreen::new();

    assert_eq!(screen.focused_index, 0);
    assert_eq!(screen.focused_field(), FormField::Name);
    assert!(screen.status_message.is_none());
    assert!(!screen.is_error);
    assert!(!screen.is_sent());
    assert_eq!(screen.fields().len(), 5);
}

#[test]
fn test_field_navigation_wraps() {
    let mut screen = ContactFormScreen::new();

    screen.previous_field();
    assert_eq!(screen.focused_field(), FormField::Message);

    screen.next_field();
    assert_eq!(screen.focused_field(), FormField::Name);

    screen.next_field();
    screen.next_field();
    assert_eq!(screen.focused_field(), FormField::ProjectType);
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut screen = ContactFormScreen::new();

    screen.add_char('A');
    screen.add_char('l');
    screen.next_field();
    screen.add_char('X');
    screen.backspace();
    screen.add_char('Y');

    assert_eq!(screen.form.name, "Al");
    assert_eq!(screen.form.organization, "Y");
}

#[test]
fn test_typing_ignored_on_selectors() {
    let mut screen = ContactFormScreen::new();
    screen.next_field();
    screen.next_field();

    screen.add_char('z');
    screen.backspace();

    assert!(screen.form.project_type.is_none());
    assert!(screen.form.name.is_empty());
    assert!(screen.form.organization.is_empty());
}

#[test]
fn test_cycle_option_on_selectors_only() {
    let mut screen = ContactFormScreen::new();

    screen.cycle_option(true);
    assert!(screen.form.project_type.is_none(), "Name is not a selector");

    screen.focused_index = 2;
    screen.cycle_option(true);
    assert_eq!(screen.form.project_type, Some(ProjectType::GisSystem));

    screen.next_field();
    screen.cycle_option(false);
    assert_eq!(screen.form.budget, Some(BudgetRange::Over50k));
}

#[test]
fn test_field_value_placeholders() {
    let mut screen = ContactFormScreen::new();

    assert_eq!(screen.field_value(FormField::ProjectType), "< Select a category >");
    assert_eq!(screen.field_value(FormField::Budget), "< Prefer not to say >");

    screen.form.budget = Some(BudgetRange::Under5k);
    assert_eq!(screen.field_value(FormField::Budget), "Under $5,000");
}

#[test]
fn test_editing_locked_while_submitting() {
    let mut screen = ContactFormScreen::new();
    screen.form.name = "Ada".to_string();
    screen.form.organization = "Engines".to_string();
    screen.form.project_type = Some(ProjectType::Other);
    screen.form.message = "Hi".to_string();
    screen.form.begin_submit().expect("Form should be valid");

    screen.add_char('!');
    screen.focused_index = 2;
    screen.cycle_option(true);

    assert_eq!(screen.form.name, "Ada");
    assert_eq!(screen.form.project_type, Some(ProjectType::Other));
}

#[test]
fn test_reset() {
    let mut screen = ContactFormScreen::new();
    screen.add_char('A');
    screen.next_field();
    screen.set_status("oops", true);

    screen.reset();

    assert!(screen.form.name.is_empty());
    assert_eq!(screen.focused_index, 0);
    assert!(screen.status_message.is_none());
    assert!(!screen.is_error);
}
