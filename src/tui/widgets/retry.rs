//! # Widget: Retry Button
//!
//! Bordered button showing the retry counter's label. Hovering inverts it
//! and lights the border.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::screen::ScreenSnapshot;

/// Label and border styles for the button.
pub fn button_styles(hovered: bool) -> (Style, Style) {
    if hovered {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::DarkGray),
        )
    }
}

/// Renders the retry button.
pub fn render(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot, hovered: bool) {
    let (label_style, border_style) = button_styles(hovered);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let para = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", snapshot.retry_label),
        label_style,
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
