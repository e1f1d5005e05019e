//! UI helper functions

use chrono::DateTime;
use ratatui::layout::Rect;

/// Width of the floating chat panel on roomy terminals
pub const PANEL_WIDTH: u16 = 60;
/// Height of the floating chat panel on roomy terminals
pub const PANEL_HEIGHT: u16 = 26;

/// Format a Unix-millisecond timestamp as wall-clock time
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "??:??:??".to_string())
}

/// Greedy word wrap on character counts
///
/// Words longer than `width` are split. An empty input yields one empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Hard-split words that can never fit on one line
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Slice of a transcript to show, as `(start, end)` line indices
///
/// `scroll_back` counts lines up from the newest one and is clamped, so a
/// zero scroll-back always ends the window at the last line.
pub fn visible_range(
    total_lines: usize,
    visible_height: usize,
    scroll_back: usize,
) -> (usize, usize) {
    let max_back = total_lines.saturating_sub(visible_height);
    let end = total_lines - scroll_back.min(max_back);
    let start = end.saturating_sub(visible_height);
    (start, end)
}

/// Where the chat panel goes: full screen when compact, bottom-right otherwise
pub fn panel_area(area: Rect, compact: bool) -> Rect {
    if compact {
        return area;
    }
    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height.saturating_sub(3));
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height.saturating_sub(height + 3),
        width,
        height,
    }
}

/// Where the closed bubble goes: bottom-right corner
pub fn bubble_area(area: Rect) -> Rect {
    let width = 14.min(area.width);
    let height = 3.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}
