//! # RetryCounter
//!
//! Cosmetic retry button state. Nothing is actually retried.

/// Label shown before the first click.
pub const INVITATION_LABEL: &str = "TRY AGAIN";

/// Click counter behind the retry button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryCounter {
    count: u64,
}

impl RetryCounter {
    /// Fresh counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one click and return the new count.
    pub fn click(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Clicks so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// `TRY AGAIN` before any click, `RETRY (N)` after.
    pub fn label(&self) -> String {
        if self.count == 0 {
            INVITATION_LABEL.to_string()
        } else {
            format!("RETRY ({})", self.count)
        }
    }
}
