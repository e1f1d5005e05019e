//! Screen state structures for TUI

use crate::contact::{ContactForm, FormField, FormState};

/// Contact screen state
#[derive(Debug)]
pub struct ContactFormScreen {
    /// The form being filled in
    pub form: ContactForm,
    /// Index into [`FormField::all`] of the focused field
    pub focused_index: usize,
    /// Status message (validation or delivery feedback)
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
    fields: Vec<FormField>,
}

impl ContactFormScreen {
    /// Create new contact screen with an empty form
    pub fn new() -> Self {
        Self {
            form: ContactForm::new(),
            focused_index: 0,
            status_message: None,
            is_error: false,
            fields: FormField::all(),
        }
    }

    /// Field that currently has focus
    pub fn focused_field(&self) -> FormField {
        self.fields[self.focused_index]
    }

    /// All fields in tab order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Move focus to next field
    pub fn next_field(&mut self) {
        self.focused_index = (self.focused_index + 1) % self.fields.len();
    }

    /// Move focus to previous field
    pub fn previous_field(&mut self) {
        if self.focused_index > 0 {
            self.focused_index -= 1;
        } else {
            self.focused_index = self.fields.len() - 1;
        }
    }

    /// Add character to the focused text field
    pub fn add_char(&mut self, c: char) {
        if !self.form.is_editable() || c.is_control() {
            return;
        }
        let field = self.focused_field();
        if let Some(text) = self.form.text_field_mut(field) {
            text.push(c);
        }
    }

    /// Remove last character from the focused text field
    pub fn backspace(&mut self) {
        if !self.form.is_editable() {
            return;
        }
        let field = self.focused_field();
        if let Some(text) = self.form.text_field_mut(field) {
            text.pop();
        }
    }

    /// Step the focused selector
    pub fn cycle_option(&mut self, forward: bool) {
        if !self.form.is_editable() {
            return;
        }
        match self.focused_field() {
            FormField::ProjectType => self.form.cycle_project_type(forward),
            FormField::Budget => self.form.cycle_budget(forward),
            _ => {}
        }
    }

    /// Display value of a field
    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.form.name.clone(),
            FormField::Organization => self.form.organization.clone(),
            FormField::Message => self.form.message.clone(),
            FormField::ProjectType => self
                .form
                .project_type
                .map(|p| p.label().to_string())
                .unwrap_or_else(|| "< Select a category >".to_string()),
            FormField::Budget => self
                .form
                .budget
                .map(|b| b.label().to_string())
                .unwrap_or_else(|| "< Prefer not to say >".to_string()),
        }
    }

    /// Show a status line
    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = Some(message.into());
        self.is_error = is_error;
    }

    /// Whether the success panel is showing
    pub fn is_sent(&self) -> bool {
        *self.form.state() == FormState::Success
    }

    /// Clear the form for another inquiry
    pub fn reset(&mut self) {
        self.form.reset();
        self.focused_index = 0;
        self.status_message = None;
        self.is_error = false;
    }
}

impl Default for ContactFormScreen {
    fn default() -> Self {
        Self::new()
    }
}
