//! # ProgressSimulator
//!
//! The fake "ATTEMPTING RECOVERY..." bar. Each tick either resets a value that
//! reached the threshold, or adds a random increment. The value may overshoot
//! the threshold until the following tick resets it.

use rand::Rng;

/// Value at which the next tick resets the bar.
pub const RESET_THRESHOLD: f64 = 87.0;

/// Exclusive upper bound of one increment.
pub const MAX_INCREMENT: f64 = 15.0;

/// Bounded random walk in percent.
#[derive(Debug)]
pub struct ProgressSimulator<R> {
    value: f64,
    reset_threshold: f64,
    max_increment: f64,
    rng: R,
}

impl<R: Rng> ProgressSimulator<R> {
    /// Starts at 0 with the default threshold and increment.
    pub fn new(rng: R) -> Self {
        Self::with_bounds(rng, RESET_THRESHOLD, MAX_INCREMENT)
    }

    /// Starts at 0 with custom bounds. A non-positive `max_increment` freezes
    /// the bar at 0.
    pub fn with_bounds(rng: R, reset_threshold: f64, max_increment: f64) -> Self {
        Self {
            value: 0.0,
            reset_threshold,
            max_increment: max_increment.max(0.0),
            rng,
        }
    }

    /// Apply one tick and return the new value.
    pub fn tick(&mut self) -> f64 {
        if self.value >= self.reset_threshold {
            self.value = 0.0;
            tracing::trace!("progress reset");
        } else {
            self.value += self.rng.gen::<f64>() * self.max_increment;
        }
        self.value
    }

    /// Underlying value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Displayed integer percent (floor of the value).
    pub fn percent(&self) -> u32 {
        self.value.floor() as u32
    }

    /// Bar fill in `[0, 1]`; overshoot past 100 draws a full bar.
    pub fn fill_ratio(&self) -> f64 {
        (self.value / 100.0).clamp(0.0, 1.0)
    }
}
