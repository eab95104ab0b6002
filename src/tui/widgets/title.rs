//! # Widget: Glitch Title
//!
//! ## Responsibility
//! Renders `SYSTEM FAILURE` with a periodic glitch: for a few frames of every
//! cycle the text jumps sideways and splits into colour channels, and a torn
//! slice of it flickers on the row below.
//!
//! ## Guarantees
//! - Glitch state is a pure function of the frame counter
//! - Text never leaves `area`

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Clear;
use ratatui::Frame;

/// First title part.
pub const TITLE_MAIN: &str = "SYSTEM";

/// Second title part, drawn in the accent colour.
pub const TITLE_ACCENT: &str = "FAILURE";

/// Frames per glitch cycle (2.5s at 10 fps).
pub const GLITCH_PERIOD_FRAMES: u64 = 25;

/// Horizontal jump of the title at `frame`; zero outside the glitch burst.
pub fn glitch_shift(frame: u64) -> i16 {
    match frame % GLITCH_PERIOD_FRAMES {
        0 => -2,
        1 => 1,
        2 => -1,
        _ => 0,
    }
}

/// Whether `frame` falls inside the glitch burst.
pub fn is_glitching(frame: u64) -> bool {
    glitch_shift(frame) != 0
}

/// Full title text.
pub fn title_text() -> String {
    format!("{TITLE_MAIN} {TITLE_ACCENT}")
}

/// Renders the title into `area`.
pub fn render(f: &mut Frame, area: Rect, frame: u64) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    f.render_widget(Clear, area);

    let glitching = is_glitching(frame);
    let (main_color, accent_color) = if glitching {
        (Color::Cyan, Color::Magenta)
    } else {
        (Color::White, Color::Red)
    };
    let bold = Modifier::BOLD;
    let line = Line::from(vec![
        Span::styled(TITLE_MAIN, Style::default().fg(main_color).add_modifier(bold)),
        Span::raw(" "),
        Span::styled(
            TITLE_ACCENT,
            Style::default().fg(accent_color).add_modifier(bold),
        ),
    ]);

    let x = title_x(area, glitch_shift(frame));
    let buf = f.buffer_mut();
    buf.set_line(x, area.y, &line, area.right().saturating_sub(x));

    if glitching && area.height > 1 {
        render_tear(buf, area, x, frame);
    }
}

/// Left edge of the title, centered then shifted, clamped inside `area`.
pub fn title_x(area: Rect, shift: i16) -> u16 {
    let text_width = title_text().chars().count() as u16;
    let centered = area.x + area.width.saturating_sub(text_width) / 2;
    let max_x = area.right().saturating_sub(1);
    centered.saturating_add_signed(shift).clamp(area.x, max_x)
}

/// A torn slice of the title, one row down.
fn render_tear(buf: &mut Buffer, area: Rect, x: u16, frame: u64) {
    let text = title_text();
    let skip = (frame % 3) as usize * 2;
    let slice: String = text.chars().skip(skip).take(6).collect();
    let tear_x = (x + skip as u16 + 1).min(area.right().saturating_sub(1));
    buf.set_stringn(
        tear_x,
        area.y + 1,
        slice,
        area.right().saturating_sub(tear_x) as usize,
        Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
    );
}
