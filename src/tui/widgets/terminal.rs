//! # Widget: System Log Window
//!
//! ## Responsibility
//! Renders the fake `system_log.exe` terminal: a title bar with three window
//! dots, the visible log lines and a blinking cursor.
//!
//! ## Guarantees
//! - Newest line at the bottom, directly above the cursor
//! - Long lines truncated with `…` rather than wrapping
//! - Handles an empty log gracefully

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::screen::ScreenSnapshot;

/// Window title.
pub const WINDOW_TITLE: &str = "system_log.exe";

/// Frames the cursor stays in each blink phase.
const CURSOR_BLINK_FRAMES: u64 = 5;

/// Returns the display color for a log line, keyed on its severity prefix.
pub fn line_color(line: &str) -> Color {
    let body = line.trim_start_matches("> ");
    if body.starts_with("FATAL") || body.starts_with("ERROR") {
        Color::Red
    } else if body.starts_with("WARNING") {
        Color::Yellow
    } else if body.starts_with("STATUS") {
        Color::Cyan
    } else {
        Color::Green
    }
}

/// Truncates a string to a maximum width, adding `…` if truncated.
///
/// # Returns
/// The string unchanged if it fits, or truncated with trailing `…`.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_width - 1).collect();
    out.push('\u{2026}');
    out
}

/// Whether the cursor is drawn on `frame`.
pub fn cursor_visible(frame: u64) -> bool {
    (frame / CURSOR_BLINK_FRAMES) % 2 == 0
}

/// Renders the log window.
pub fn render(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot, frame: u64) {
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled("\u{25cf}", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled("\u{25cf}", Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled("\u{25cf}", Style::default().fg(Color::Green)),
        Span::styled(
            format!("  {WINDOW_TITLE} "),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let max_width = inner.width as usize;
    let mut lines: Vec<Line> = snapshot
        .log_lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                truncate_with_ellipsis(line, max_width),
                Style::default().fg(line_color(line)),
            ))
        })
        .collect();

    let cursor = if cursor_visible(frame) { "_" } else { " " };
    lines.push(Line::from(Span::styled(
        cursor,
        Style::default().fg(Color::Green),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
