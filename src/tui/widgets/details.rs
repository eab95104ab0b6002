//! # Widget: Message and Error Details
//!
//! ## Responsibility
//! Renders the apology message and the `<error code> | <timestamp>` row.
//!
//! ## Guarantees
//! - The code shown is always the snapshot's current code
//! - The timestamp is the mount time and never changes while mounted

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::screen::ScreenSnapshot;

/// Primary apology line.
pub const MESSAGE: &str = "Sorry, I couldn't build that app right now.";

/// Secondary line under the message.
pub const SUBMESSAGE: &str = "Please try again later.";

/// Builds the details row.
pub fn details_line(snapshot: &ScreenSnapshot) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            snapshot.error_code.as_str(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            snapshot.timestamp.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Renders the apology message.
pub fn render_message(f: &mut Frame, area: Rect) {
    let para = Paragraph::new(vec![
        Line::from(Span::styled(MESSAGE, Style::default().fg(Color::White))),
        Line::from(Span::styled(SUBMESSAGE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}

/// Renders the error code and timestamp row.
pub fn render(f: &mut Frame, area: Rect, snapshot: &ScreenSnapshot) {
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(details_line(snapshot)).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ErrorCode;

    fn snapshot(code: ErrorCode) -> ScreenSnapshot {
        ScreenSnapshot {
            error_code: code,
            progress: 0.0,
            progress_percent: 0,
            progress_ratio: 0.0,
            log_lines: Vec::new(),
            retry_count: 0,
            retry_label: "TRY AGAIN".into(),
            timestamp: "2026-10-19T08:15:02.123Z".into(),
        }
    }

    #[test]
    fn test_details_line_text() {
        let line = details_line(&snapshot(ErrorCode::ErrDead));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "ERR_0xDEAD | 2026-10-19T08:15:02.123Z");
    }
}
