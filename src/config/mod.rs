//! # Module: Screen Configuration
//!
//! ## Responsibility
//! Parse and validate the optional TOML file that tunes the screen's timers,
//! progress bounds, log window, pixel count and random seed:
//! ```text
//! glitch-screen --config screen.toml
//! ```
//!
//! ## Guarantees
//! - Every field has a default; an empty file yields [`ScreenConfig::default`]
//! - Validated: semantic constraints are checked before a config is accepted
//! - Deterministic: same TOML input always produces the same `ScreenConfig`
//!
//! ## NOT Responsible For
//! - Driving the timers (that belongs to `screen`)
//! - Hot-reloading (the screen is configured once per mount)

pub mod loader;
pub mod validation;

use std::time::Duration;

use serde::{Deserialize, Serialize};

// ── Default value functions ──────────────────────────────────────────────

/// Default error code rotation period: 3000ms.
fn default_error_code_ms() -> u64 {
    3000
}

/// Default progress tick period: 500ms.
fn default_progress_ms() -> u64 {
    500
}

/// Default log append period: 2000ms.
fn default_log_ms() -> u64 {
    2000
}

/// Default render period: 100ms (10 fps).
fn default_frame_ms() -> u64 {
    100
}

/// Default progress reset threshold (percent).
fn default_reset_threshold() -> f64 {
    87.0
}

/// Default exclusive upper bound of a progress increment (percent).
fn default_max_increment() -> f64 {
    15.0
}

/// Default number of visible log lines.
fn default_log_window() -> usize {
    5
}

/// Default number of floating glitch blocks.
fn default_pixel_count() -> usize {
    12
}

// ── Top-level config ─────────────────────────────────────────────────────

/// Root configuration for one mounted screen.
///
/// # Example
///
/// ```toml
/// [timing]
/// error_code_ms = 3000
/// progress_ms = 500
/// log_ms = 2000
/// frame_ms = 100
///
/// [progress]
/// reset_threshold = 87.0
/// max_increment = 15.0
///
/// [log]
/// window = 5
///
/// [pixels]
/// count = 12
///
/// [random]
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreenConfig {
    /// Timer periods.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Fake recovery bar bounds.
    #[serde(default)]
    pub progress: ProgressConfig,
    /// Fake system log window.
    #[serde(default)]
    pub log: LogConfig,
    /// Floating glitch blocks.
    #[serde(default)]
    pub pixels: PixelConfig,
    /// Random source seeding.
    #[serde(default)]
    pub random: RandomConfig,
}

/// Periods of the screen's timers, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingConfig {
    /// Error code rotation period.
    #[serde(default = "default_error_code_ms")]
    pub error_code_ms: u64,
    /// Progress tick period.
    #[serde(default = "default_progress_ms")]
    pub progress_ms: u64,
    /// Log append period.
    #[serde(default = "default_log_ms")]
    pub log_ms: u64,
    /// Render period.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            error_code_ms: default_error_code_ms(),
            progress_ms: default_progress_ms(),
            log_ms: default_log_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl TimingConfig {
    /// Error code rotation period as a [`Duration`].
    pub fn error_code_interval(&self) -> Duration {
        Duration::from_millis(self.error_code_ms)
    }

    /// Progress tick period as a [`Duration`].
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_ms)
    }

    /// Log append period as a [`Duration`].
    pub fn log_interval(&self) -> Duration {
        Duration::from_millis(self.log_ms)
    }

    /// Render period as a [`Duration`].
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Bounds of the fake recovery bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressConfig {
    /// Once the value reaches this, the next tick resets it to zero.
    #[serde(default = "default_reset_threshold")]
    pub reset_threshold: f64,
    /// Exclusive upper bound of the random increment added per tick.
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            reset_threshold: default_reset_threshold(),
            max_increment: default_max_increment(),
        }
    }
}

/// Size of the visible log window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Maximum number of visible lines.
    #[serde(default = "default_log_window")]
    pub window: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            window: default_log_window(),
        }
    }
}

/// Floating glitch block generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PixelConfig {
    /// Number of blocks generated at mount.
    #[serde(default = "default_pixel_count")]
    pub count: usize,
}

impl Default for PixelConfig {
    fn default() -> Self {
        Self {
            count: default_pixel_count(),
        }
    }
}

/// Seeding of the screen's random sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomConfig {
    /// Fixed seed for reproducible animations; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}
