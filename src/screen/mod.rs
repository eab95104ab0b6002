//! # Module: Animated Error Screen
//!
//! ## Responsibility
//! Owns the five independent widgets of the "system failure" screen and the
//! timers that animate them:
//!
//! | Widget              | Driver             | State            |
//! |---------------------|--------------------|------------------|
//! | `RandomPixelField`  | none (mount only)  | `Vec<PixelSpec>` |
//! | `ErrorCodeRotator`  | timer, 3000ms      | `ErrorCode`      |
//! | `ProgressSimulator` | timer, 500ms       | `f64` percent    |
//! | `LogScroller`       | timer, 2000ms      | 5-line window    |
//! | `RetryCounter`      | user click         | `u64`            |
//!
//! ## Guarantees
//! - No widget reads another widget's state
//! - One timer per animated widget, acquired at mount, released at unmount
//! - After unmount no widget state changes
//! - With a fixed seed, every random sequence is reproducible
//!
//! ## NOT Responsible For
//! - Drawing (see: `tui::widgets`)
//! - Input handling (see: `tui::events`)

pub mod error_code;
pub mod log;
pub mod pixels;
pub mod progress;
pub mod retry;
pub mod task;

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;

use crate::config::ScreenConfig;
use crate::ScreenError;

pub use error_code::{ErrorCode, ErrorCodeRotator};
pub use log::{LogScroller, LOG_SCRIPT, LOG_WINDOW};
pub use pixels::{PixelSpec, RandomPixelField, PIXEL_COUNT};
pub use progress::ProgressSimulator;
pub use retry::RetryCounter;
pub use task::PeriodicTask;

/// Independent random streams, one per widget.
const STREAM_PIXELS: u64 = 1;
const STREAM_ERROR_CODE: u64 = 2;
const STREAM_PROGRESS: u64 = 3;

/// Builds the random source for one widget.
///
/// With a seed, each stream gets a distinct derived seed so widgets never
/// share a sequence; without one, each is seeded from OS entropy.
pub fn widget_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => {
            StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        }
        None => StdRng::from_entropy(),
    }
}

/// Point-in-time copy of everything the screen displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSnapshot {
    /// Current error code.
    pub error_code: ErrorCode,
    /// Underlying progress value.
    pub progress: f64,
    /// Displayed progress percent.
    pub progress_percent: u32,
    /// Bar fill in `[0, 1]`.
    pub progress_ratio: f64,
    /// Visible log lines, oldest first.
    pub log_lines: Vec<&'static str>,
    /// Retry clicks so far.
    pub retry_count: u64,
    /// Retry button label.
    pub retry_label: String,
    /// Mount time, ISO-8601 with milliseconds.
    pub timestamp: String,
}

/// The mounted screen: widget state plus the timers driving it.
///
/// # Example
///
/// ```rust,no_run
/// use glitch_screen::{AnimatedErrorScreen, ScreenConfig};
///
/// # async fn example() -> Result<(), glitch_screen::ScreenError> {
/// let mut screen = AnimatedErrorScreen::mount(&ScreenConfig::default())?;
/// tokio::time::sleep(std::time::Duration::from_secs(2)).await;
/// println!("{:?}", screen.snapshot().log_lines);
/// screen.unmount();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AnimatedErrorScreen {
    pixels: RandomPixelField,
    error_code: Arc<Mutex<ErrorCodeRotator<StdRng>>>,
    progress: Arc<Mutex<ProgressSimulator<StdRng>>>,
    log: Arc<Mutex<LogScroller>>,
    retry: RetryCounter,
    mounted_at: DateTime<Utc>,
    tasks: Vec<PeriodicTask>,
}

impl AnimatedErrorScreen {
    /// Create the widgets and start their timers on the current runtime.
    ///
    /// Expects a current-thread runtime. On a multi-thread runtime a tick
    /// already running on another worker can still land after
    /// [`unmount`](Self::unmount) returns.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::Runtime`] when called outside a tokio runtime.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn mount(config: &ScreenConfig) -> Result<Self, ScreenError> {
        let runtime = Handle::try_current().map_err(|e| ScreenError::Runtime(e.to_string()))?;
        let seed = config.random.seed;

        let pixels = RandomPixelField::generate(
            &mut widget_rng(seed, STREAM_PIXELS),
            config.pixels.count,
        );
        let error_code = Arc::new(Mutex::new(ErrorCodeRotator::new(widget_rng(
            seed,
            STREAM_ERROR_CODE,
        ))));
        let progress = Arc::new(Mutex::new(ProgressSimulator::with_bounds(
            widget_rng(seed, STREAM_PROGRESS),
            config.progress.reset_threshold,
            config.progress.max_increment,
        )));
        let log = Arc::new(Mutex::new(LogScroller::new(config.log.window)));

        let tasks = vec![
            PeriodicTask::spawn(
                &runtime,
                "error_code",
                config.timing.error_code_interval(),
                Arc::clone(&error_code),
                |rotator| {
                    rotator.tick();
                },
            ),
            PeriodicTask::spawn(
                &runtime,
                "progress",
                config.timing.progress_interval(),
                Arc::clone(&progress),
                |sim| {
                    sim.tick();
                },
            ),
            PeriodicTask::spawn(
                &runtime,
                "log",
                config.timing.log_interval(),
                Arc::clone(&log),
                |log| {
                    log.tick();
                },
            ),
        ];

        tracing::info!(
            pixels = pixels.len(),
            seeded = seed.is_some(),
            "screen mounted"
        );

        Ok(Self {
            pixels,
            error_code,
            progress,
            log,
            retry: RetryCounter::new(),
            mounted_at: Utc::now(),
            tasks,
        })
    }

    /// Stop every timer. State is frozen afterwards but stays readable.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn unmount(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        for task in &mut self.tasks {
            task.cancel();
        }
        self.tasks.clear();
        let code_rotations = self.error_code.lock().ticks();
        let log_lines = self.log.lock().emitted();
        tracing::info!(
            retries = self.retry.count(),
            code_rotations,
            log_lines,
            "screen unmounted"
        );
    }

    /// Whether the timers are running.
    pub fn is_mounted(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Register a retry click and return the new count.
    pub fn click_retry(&mut self) -> u64 {
        let count = self.retry.click();
        tracing::info!(count, "retry clicked");
        count
    }

    /// The static glitch blocks.
    pub fn pixels(&self) -> &[PixelSpec] {
        self.pixels.pixels()
    }

    /// Retry button state.
    pub fn retry(&self) -> &RetryCounter {
        &self.retry
    }

    /// Mount time formatted like `2026-10-19T08:15:02.123Z`.
    pub fn timestamp(&self) -> String {
        self.mounted_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Copy out the current state of every widget.
    ///
    /// Each widget lock is taken and released in turn; no two are held at once.
    pub fn snapshot(&self) -> ScreenSnapshot {
        let error_code = self.error_code.lock().current();
        let (progress, progress_percent, progress_ratio) = {
            let sim = self.progress.lock();
            (sim.value(), sim.percent(), sim.fill_ratio())
        };
        let log_lines = self.log.lock().lines().collect();

        ScreenSnapshot {
            error_code,
            progress,
            progress_percent,
            progress_ratio,
            log_lines,
            retry_count: self.retry.count(),
            retry_label: self.retry.label(),
            timestamp: self.timestamp(),
        }
    }
}

impl Drop for AnimatedErrorScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}
