//! # glitch-screen
//!
//! A decorative "system failure" screen for the terminal: glitching title,
//! scanlines, noise, floating glitch blocks, a fake recovery bar, a fake
//! system log, a rotating error code and a cosmetic retry button.
//!
//! ## Architecture
//!
//! Every moving part is an independent leaf widget driven by its own
//! periodic timer on a single-threaded tokio runtime:
//! ```text
//! ErrorCodeRotator (3000ms)   ProgressSimulator (500ms)   LogScroller (2000ms)
//!          \                          |                         /
//!           +------- AnimatedErrorScreen::snapshot() ----------+
//!                                     |
//!                           tui::ui::draw (10 fps)
//! ```

// ── Lint policy ───────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(missing_docs)]

use std::fs::OpenOptions;
use std::path::Path;

use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod screen;
pub mod tui;

// Re-exports for convenience
pub use config::{validation::ConfigError, ScreenConfig};
pub use screen::{AnimatedErrorScreen, ScreenSnapshot};

/// Initialise the global tracing subscriber.
///
/// The terminal belongs to the screen while it runs, so log output is
/// written to `log_file` when one is given and discarded otherwise.
///
/// Reads the `LOG_FORMAT` environment variable to choose output format:
/// - `"json"` - structured JSON lines
/// - anything else (including unset) - human-readable pretty output
///
/// Filter level is controlled by `RUST_LOG` (e.g. `RUST_LOG=debug`).
///
/// # Errors
///
/// Returns [`ScreenError::Tracing`] if the log file cannot be opened or the
/// global subscriber has already been set.
///
/// # Panics
///
/// This function never panics.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), ScreenError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let writer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ScreenError::Tracing(format!("cannot open {}: {e}", path.display()))
                })?;
            BoxMakeWriter::new(std::sync::Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::sink),
    };

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(writer)
            .with_current_span(true)
            .with_span_list(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_ansi(false)
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(writer)
            .try_init(),
    };

    result.map_err(|e| ScreenError::Tracing(format!("tracing init failed: {e}")))
}

/// Top-level errors.
///
/// The screen itself cannot fail; every variant comes from the shell around
/// it (configuration, terminal I/O, runtime and logging setup).
#[derive(Error, Debug)]
pub enum ScreenError {
    /// The configuration file could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal setup, drawing or event polling failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("{0}")]
    Tracing(String),

    /// Timers were requested outside of a tokio runtime.
    #[error("runtime error: {0}")]
    Runtime(String),
}
