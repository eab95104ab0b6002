//! # Module: TUI App State
//!
//! ## Responsibility
//! Owns the mounted screen plus the shell state around it (quit flag, help
//! overlay, button hover, frame counter). Widget data lives in the screen;
//! the app only adds what the terminal shell needs.
//!
//! ## Guarantees
//! - `on_frame()` and `retry()` never panic
//! - The frame counter is the only clock the render path reads

use std::time::Duration;

use ratatui::layout::Rect;

use crate::screen::AnimatedErrorScreen;

/// Minimum terminal width for the screen to render.
pub const MIN_COLS: u16 = 80;

/// Minimum terminal height for the screen to render.
pub const MIN_ROWS: u16 = 24;

/// Primary application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the pointer is over the retry button.
    pub hovered: bool,
    /// False until the first frame has been drawn (drives the fade-in).
    pub mounted: bool,
    /// Frames drawn since start.
    pub frame_count: u64,
    /// Render period.
    pub frame_rate: Duration,
    /// Last known terminal area, used for mouse hit-testing.
    pub viewport: Rect,
    /// The screen being displayed.
    pub screen: AnimatedErrorScreen,
}

impl App {
    /// Wraps a mounted screen.
    pub fn new(screen: AnimatedErrorScreen, frame_rate: Duration) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            hovered: false,
            mounted: false,
            frame_count: 0,
            frame_rate,
            viewport: Rect::default(),
            screen,
        }
    }

    /// Advances the frame clock after a draw.
    pub fn on_frame(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.mounted = true;
    }

    /// Seconds of animation time elapsed, derived from the frame counter.
    pub fn elapsed_secs(&self) -> f64 {
        self.frame_count as f64 * self.frame_rate.as_secs_f64()
    }

    /// Presses the retry button.
    pub fn retry(&mut self) -> u64 {
        self.screen.click_retry()
    }
}
