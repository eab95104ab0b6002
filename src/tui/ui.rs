//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Divides the terminal into the screen's regions and delegates to the
//! individual widget renderers. Handles the minimum size guard, the help
//! overlay and the footer.
//!
//! ## Guarantees
//! - Background effects are drawn first, content on top
//! - Minimum size guard displays a centered message if terminal is too small
//! - No panics during rendering regardless of terminal dimensions
//! - `layout()` is pure, so mouse hit-testing agrees with what is drawn

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, MIN_COLS, MIN_ROWS};
use super::widgets;

/// Width of the retry button, borders included.
pub const BUTTON_WIDTH: u16 = 24;

/// Height of the terminal window widget: borders, five lines and the cursor.
pub const TERMINAL_HEIGHT: u16 = 8;

/// Footer credits.
const FOOTER_REQUESTED: &str = "Requested by @aiob_me";
const FOOTER_BUILT: &str = "Built by @clonkbot";

/// Regions of the screen for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Circled X icon.
    pub icon: Rect,
    /// `SYSTEM FAILURE` title.
    pub title: Rect,
    /// Apology message.
    pub message: Rect,
    /// Error code and timestamp row.
    pub details: Rect,
    /// Recovery bar.
    pub loading: Rect,
    /// Retry button.
    pub button: Rect,
    /// Fake system log window.
    pub terminal: Rect,
    /// Credits row.
    pub footer: Rect,
}

/// Computes the screen regions for `area`.
pub fn layout(area: Rect) -> ScreenLayout {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Percentage(55), // Error container
            Constraint::Percentage(45), // Terminal
        ])
        .split(outer[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding
            Constraint::Length(5), // Icon
            Constraint::Length(2), // Title
            Constraint::Length(2), // Message
            Constraint::Length(1), // Details
            Constraint::Length(1),
            Constraint::Length(3), // Loading
            Constraint::Length(1),
            Constraint::Length(3), // Button
            Constraint::Min(0),    // Bottom padding
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(TERMINAL_HEIGHT),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    ScreenLayout {
        icon: left[1],
        title: left[2],
        message: left[3],
        details: left[4],
        loading: left[6],
        button: centered_width(left[8], BUTTON_WIDTH),
        terminal: right[1],
        footer: outer[1],
    }
}

/// Where the retry button is drawn for a terminal of size `area`, if drawn at all.
pub fn retry_button_area(area: Rect) -> Option<Rect> {
    if is_too_small(area) {
        return None;
    }
    Some(layout(area).button)
}

/// Whether `area` is below the minimum renderable size.
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_COLS || area.height < MIN_ROWS
}

/// Horizontally centers a `width`-wide slice of `area`.
pub fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Renders the complete screen into the given frame.
///
/// # Arguments
/// * `f` - The Ratatui frame to render into.
/// * `app` - The application state to display.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // Minimum size guard
    if is_too_small(size) {
        draw_too_small(f, size);
        return;
    }

    widgets::effects::render(f.buffer_mut(), size, app);

    // Before the first frame only the background shows (fade-in).
    if !app.mounted {
        return;
    }

    let regions = layout(size);
    let snapshot = app.screen.snapshot();

    widgets::icon::render(f, regions.icon);
    widgets::title::render(f, regions.title, app.frame_count);
    widgets::details::render_message(f, regions.message);
    widgets::details::render(f, regions.details, &snapshot);
    widgets::loading::render(f, regions.loading, &snapshot);
    widgets::retry::render(f, regions.button, &snapshot, app.hovered);
    widgets::terminal::render(f, regions.terminal, &snapshot, app.frame_count);
    draw_footer(f, regions.footer);

    if app.show_help {
        draw_help_overlay(f, size);
    }
}

/// Renders the credits row.
fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(FOOTER_REQUESTED, Style::default().fg(Color::DarkGray)),
        Span::styled(" \u{00b7} ", Style::default().fg(Color::Red)),
        Span::styled(FOOTER_BUILT, Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(footer, area);
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: resize to at least {}x{}",
        MIN_COLS, MIN_ROWS
    );
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_width = 44.min(area.width.saturating_sub(4));
    let popup_height = 12.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let key = |text: &'static str| Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  glitch-screen",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("    [Enter] [Space] [r]  Retry"),
        key("    [click]              Retry"),
        key("    [h] [?]              Toggle this help"),
        key("    [q] [Esc]            Quit"),
        key("    [Ctrl+C]             Force quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press h to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(help_text).block(block);
    f.render_widget(para, popup_area);
}
