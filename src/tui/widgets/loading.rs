//! # Widget: Recovery Bar
//!
//! ## Responsibility
//! Renders the fake `ATTEMPTING RECOVERY...` progress bar with its
//! integer percentage.
//!
//! ## Guarantees
//! - Fill bars render correctly at 0%, 50% and 100%, and beyond 100%
//! - The percentage is the floor of the underlying value

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::screen::ScreenSnapshot;

/// Label above the bar.
pub const LOADING_LABEL: &str = "ATTEMPTING RECOVERY...";

/// Widest the bar gets, in cells.
const MAX_BAR_WIDTH: usize = 40;

/// Builds a fill bar string using Unicode block characters.
///
/// # Arguments
/// * `ratio` - Fill ratio; clamped to `[0, 1]`.
/// * `width` - Total bar width in characters.
///
/// # Returns
/// String with `\u{2588}` (filled) and `\u{2591}` (empty) characters.
pub fn fill_bar(ratio: f64, width: usize) -> String {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(empty))
}

/// Percentage text under the bar.
pub fn percent_label(percent: u32) -> String {
    format!("{percent}%")
}

/// Renders the recovery bar widget.
pub fn render(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot) {
    f.render_widget(Clear, area);

    let bar_width = (area.width as usize).saturating_sub(4).min(MAX_BAR_WIDTH);
    let lines = vec![
        Line::from(Span::styled(
            LOADING_LABEL,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            fill_bar(snapshot.progress_ratio, bar_width),
            Style::default().fg(Color::Red),
        )),
        Line::from(Span::styled(
            percent_label(snapshot.progress_percent),
            Style::default().fg(Color::White),
        )),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
