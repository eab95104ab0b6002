//! # Widget: Error Icon
//!
//! A circled X drawn with box-drawing characters.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

/// Icon rows, top to bottom.
pub const ICON: [&str; 5] = [
    "\u{256d}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256e}",
    "\u{2502} \u{2572} \u{2571} \u{2502}",
    "\u{2502}  \u{2573}  \u{2502}",
    "\u{2502} \u{2571} \u{2572} \u{2502}",
    "\u{2570}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256f}",
];

/// Renders the icon centered in `area`.
pub fn render(f: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = ICON.iter().map(|row| Line::styled(*row, style)).collect();
    let icon_area = crate::tui::ui::centered_width(area, 7);
    f.render_widget(Clear, icon_area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), icon_area);
}
