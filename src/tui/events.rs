//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard and mouse input into app
//! state mutations: quit, help overlay, retry clicks and button hover.
//!
//! ## Guarantees
//! - Non-blocking draining; the render loop never waits on input
//! - No panics on any key or mouse combination
//! - Ctrl+C always triggers quit

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::app::App;
use super::ui;

/// Upper bound on events handled between two frames.
const MAX_EVENTS_PER_FRAME: usize = 32;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed quit (q, Esc or Ctrl+C).
    Quit,
    /// User pressed the retry button from the keyboard.
    Retry,
    /// User toggled the help overlay.
    Help,
    /// Left mouse button pressed at (column, row).
    Click(u16, u16),
    /// Pointer moved to (column, row).
    Hover(u16, u16),
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Returns `InputEvent::None` when nothing arrived or on any crossterm error.
pub fn poll_event(timeout: Duration) -> InputEvent {
    match event::poll(timeout) {
        Ok(true) => read_event(),
        _ => InputEvent::None,
    }
}

/// Applies pending events to the app without blocking.
///
/// Stops at the first non-actionable event; anything left is picked up on
/// the next frame.
pub fn drain_events(app: &mut App) {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let event = poll_event(Duration::ZERO);
        if event == InputEvent::None {
            break;
        }
        apply_event(app, event);
    }
}

/// Reads one ready event.
fn read_event() -> InputEvent {
    match event::read() {
        Ok(Event::Key(key)) => translate_key(key),
        Ok(Event::Mouse(mouse)) => translate_mouse(mouse),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
pub fn apply_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::Help => app.show_help = !app.show_help,
        InputEvent::Retry => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.retry();
            }
        }
        InputEvent::Click(column, row) => {
            if !app.show_help && over_button(app.viewport, column, row) {
                app.retry();
            }
        }
        InputEvent::Hover(column, row) => {
            app.hovered = !app.show_help && over_button(app.viewport, column, row);
        }
        InputEvent::Resize(w, h) => {
            app.viewport = Rect::new(0, 0, w, h);
            app.hovered = false;
        }
        InputEvent::None => {}
    }
}

/// Whether (column, row) falls on the retry button for a terminal of `viewport` size.
fn over_button(viewport: Rect, column: u16, row: u16) -> bool {
    ui::retry_button_area(viewport).is_some_and(|button| button.contains(Position::new(column, row)))
}

/// Translates a crossterm key event to an `InputEvent`.
fn translate_key(key: KeyEvent) -> InputEvent {
    // Windows reports releases too; only presses count.
    if key.kind == KeyEventKind::Release {
        return InputEvent::None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => InputEvent::Help,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
            InputEvent::Retry
        }
        _ => InputEvent::None,
    }
}

/// Translates a crossterm mouse event to an `InputEvent`.
fn translate_mouse(mouse: MouseEvent) -> InputEvent {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputEvent::Click(mouse.column, mouse.row),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            InputEvent::Hover(mouse.column, mouse.row)
        }
        _ => InputEvent::None,
    }
}
