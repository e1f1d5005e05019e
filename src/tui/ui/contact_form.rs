//! Contact form screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::contact::{FormField, FormState};
use crate::tui::app::App;

/// Renders the screen
pub fn render_contact_form(f: &mut Frame, app: &App) {
    let size = f.size();
    let screen = &app.contact_screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Form or confirmation
            Constraint::Length(3), // Status/Help
        ])
        .split(size);

    let title = Paragraph::new(app.current_screen.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    if screen.is_sent() {
        let lines = vec![
            Line::from(Span::styled(
                "MESSAGE SENT",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "I'll be in touch.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(
                "Thank you for reaching out. I'll review your inquiry and respond within 48 hours.",
            ),
        ];
        let confirmation = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(confirmation, chunks[1]);
    } else {
        let constraints: Vec<Constraint> = screen
            .fields()
            .iter()
            .map(|field| match field {
                FormField::Message => Constraint::Min(3),
                _ => Constraint::Length(3),
            })
            .collect();
        let field_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(chunks[1]);

        let submitting = *screen.form.state() == FormState::Submitting;
        for (i, field) in screen.fields().iter().enumerate() {
            let focused = i == screen.focused_index && !submitting;
            let label = if field.is_required() {
                format!("{} *", field.label())
            } else {
                field.label().to_string()
            };
            let border_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let value_style = if field.is_select() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            let widget = Paragraph::new(screen.field_value(*field))
                .style(value_style)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style)
                        .title(label),
                );
            f.render_widget(widget, field_chunks[i]);
        }
    }

    let (help_text, help_color) = match &screen.status_message {
        Some(status) if screen.is_error => (status.clone(), Color::Red),
        Some(status) if !screen.is_sent() => (status.clone(), Color::Green),
        _ if screen.is_sent() => ("Enter/Esc: Back to Home".to_string(), Color::DarkGray),
        _ => (app.current_screen.help().to_string(), Color::DarkGray),
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(help_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
