//! Chat panel and bubble rendering

use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use crate::chat::{ChatWidget, Role, QUICK_ACTIONS};
use crate::tui::app::App;
use super::helpers::{bubble_area, format_timestamp, panel_area, visible_range, wrap_text};

const INPUT_PLACEHOLDER: &str = "Ask me anything...";

fn panel_chunks(panel: Rect, show_quick_actions: bool) -> Rc<[Rect]> {
    let quick_actions_height = if show_quick_actions {
        QUICK_ACTIONS.len() as u16 + 2
    } else {
        0
    };
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(3),                       // Transcript
            Constraint::Length(quick_actions_height), // Quick actions
            Constraint::Length(3),                    // Input
            Constraint::Length(1),                    // Help
        ])
        .split(panel)
}

fn chat_panel_rect(app: &App) -> Rect {
    let area = Rect::new(0, 0, app.viewport.width, app.viewport.height);
    panel_area(area, app.viewport.is_compact(app.settings.compact_width))
}

/// Build the transcript as display lines wrapped to `width`
///
/// Includes the typing indicator as the final line while a reply is pending.
pub fn transcript_lines(chat: &ChatWidget, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let content_width = width.saturating_sub(2).max(1);

    for (i, msg) in chat.messages().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let label_color = match msg.role {
            Role::User => Color::Green,
            Role::Assistant => Color::Magenta,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", format_timestamp(msg.timestamp)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{}:", msg.role.label()),
                Style::default().fg(label_color).add_modifier(Modifier::BOLD),
            ),
        ]));

        let text_color = if msg.is_assistant() { Color::Gray } else { Color::White };
        for wrapped in wrap_text(&msg.content, content_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default().fg(text_color),
            )));
        }
    }

    if chat.is_typing() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Assistant is typing...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

/// How far the transcript can be scrolled back at the current terminal size
pub fn max_scroll_back(app: &App) -> usize {
    let chunks = panel_chunks(chat_panel_rect(app), app.chat.quick_actions_visible());
    let transcript = chunks[1];
    let width = transcript.width.saturating_sub(2) as usize;
    let height = transcript.height.saturating_sub(2) as usize;
    transcript_lines(&app.chat, width).len().saturating_sub(height)
}

/// Renders the open chat panel
pub fn render_chat_panel(f: &mut Frame, app: &App) {
    let chat = &app.chat;
    let compact = app.viewport.is_compact(app.settings.compact_width);
    let panel = panel_area(f.size(), compact);

    // Compact terminals get a full-screen backdrop
    if compact {
        f.render_widget(Clear, f.size());
    } else {
        f.render_widget(Clear, panel);
    }

    let chunks = panel_chunks(panel, chat.quick_actions_visible());

    // Header
    let status = if chat.is_typing() {
        Span::styled("typing...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("online (demo mode)", Style::default().fg(Color::Green))
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Scotch's Assistant  ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        status,
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Transcript, pinned to the newest line unless scrolled back
    let transcript_area = chunks[1];
    let width = transcript_area.width.saturating_sub(2) as usize;
    let height = transcript_area.height.saturating_sub(2) as usize;
    let lines = transcript_lines(chat, width);
    let total = lines.len();
    let (start, end) = visible_range(total, height, chat.scroll_back());
    let visible: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
    let title = if end < total {
        format!("Messages ({} more below)", total - end)
    } else {
        "Messages".to_string()
    };
    let transcript = Paragraph::new(visible)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(transcript, transcript_area);

    // Quick actions
    if chat.quick_actions_visible() {
        let actions: Vec<Line> = QUICK_ACTIONS
            .iter()
            .enumerate()
            .map(|(i, action)| {
                Line::from(vec![
                    Span::styled(format!("F{} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::raw(*action),
                ])
            })
            .collect();
        let quick_actions = Paragraph::new(actions)
            .block(Block::default().borders(Borders::ALL).title("Suggestions"));
        f.render_widget(quick_actions, chunks[2]);
    }

    // Input
    let input_area = chunks[3];
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let border_style = if chat.input_focused() {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Message");
    let input_widget = if chat.input().is_empty() {
        Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        // Keep the end of long input in view
        let chars: Vec<char> = chat.input().chars().collect();
        let skip = chars.len().saturating_sub(inner_width.saturating_sub(1));
        let shown: String = chars[skip..].iter().collect();
        Paragraph::new(shown).style(Style::default().fg(Color::Yellow))
    };
    f.render_widget(input_widget.block(input_block), input_area);

    if chat.input_focused() {
        let typed = chat.input().chars().count().min(inner_width.saturating_sub(1));
        f.set_cursor(input_area.x + 1 + typed as u16, input_area.y + 1);
    }

    // Help
    let help_text = if chat.can_send() || chat.input().is_empty() {
        "Enter: Send | F1-F3: Quick | PgUp/Dn: Scroll | Esc: Close"
    } else {
        "Waiting for reply... | Esc: Close"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}

/// Renders the closed bubble in the bottom-right corner
pub fn render_chat_bubble(f: &mut Frame, app: &App) {
    let area = bubble_area(f.size());
    let label = if app.chat.is_typing() { "Chat (o) *" } else { "Chat (o)" };
    let bubble = Paragraph::new(label)
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(Clear, area);
    f.render_widget(bubble, area);
}
