//! Landing page rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::tui::app::App;

/// Body copy of the landing page
pub const HOME_TEXT: &[&str] = &[
    "Spatial systems that governments and financial institutions rely on.",
    "",
    "GIS System Architecture",
    "  Enterprise GIS platforms designed around PostGIS and GeoDjango.",
    "",
    "Drone Data & GIS Integration",
    "  Automated survey pipelines, orthomosaic processing, aerial data into existing GIS.",
    "",
    "Spatial Data Consulting",
    "  Turning messy location data into decisions.",
    "",
    "AI + GIS Research",
    "  Spatial pattern recognition and feature extraction from satellite and drone imagery.",
    "",
    "Have a spatial problem? Press 'c' to get in touch, or 'o' to ask the assistant.",
];

/// Largest page scroll offset on a terminal `height` rows tall
pub fn max_page_scroll(height: u16) -> u16 {
    // Margin, title, help, and the body's own borders
    let inner = height.saturating_sub(10) as usize;
    HOME_TEXT.len().saturating_sub(inner) as u16
}

/// Renders the landing page
pub fn render_home(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Page body
            Constraint::Length(3), // Help
        ])
        .split(size);

    let title = Paragraph::new(app.current_screen.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let lines: Vec<Line> = HOME_TEXT.iter().map(|text| Line::from(*text)).collect();
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.page_scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, chunks[1]);

    let help_text = if app.chat.background_scroll_locked() {
        "Chat open | Esc: Close chat"
    } else {
        app.current_screen.help()
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
