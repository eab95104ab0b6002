//! # PeriodicTask: one cancellable repeating timer
//!
//! ## Responsibility
//! Run a synchronous state-update callback on a fixed period in a background
//! tokio task, and stop it exactly once when the owner unmounts.
//!
//! ## Guarantees
//! - The first tick fires one full period after `spawn` returns, never
//!   immediately, however late the task is first polled
//! - Late ticks are delayed, not burst (a stalled frame does not replay ticks)
//! - `cancel()` is idempotent; dropping the task cancels it
//! - No lock is held across an await point

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Shortest accepted period; a zero period would make `interval_at` panic.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a background timer mutating shared widget state.
///
/// # Panics
///
/// No methods on this type panic.
#[derive(Debug)]
pub struct PeriodicTask {
    /// Label used in log output.
    name: &'static str,
    /// Tick period.
    period: Duration,
    /// Background task; `None` once cancelled.
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    /// Spawn a timer on `runtime` that calls `on_tick` with the locked
    /// `state` every `period`.
    ///
    /// # Arguments
    ///
    /// * `runtime` - Runtime to spawn the timer on
    /// * `name` - Label for log output
    /// * `period` - Tick period (clamped to at least 1ms)
    /// * `state` - Widget state shared with the renderer
    /// * `on_tick` - Synchronous state transition
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn spawn<T, F>(
        runtime: &Handle,
        name: &'static str,
        period: Duration,
        state: Arc<Mutex<T>>,
        mut on_tick: F,
    ) -> Self
    where
        T: Send + 'static,
        F: FnMut(&mut T) + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let start = Instant::now() + period;

        let handle = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let mut guard = state.lock();
                on_tick(&mut guard);
            }
        });

        tracing::debug!(task = name, period_ms = period.as_millis() as u64, "timer started");

        Self {
            name,
            period,
            handle: Some(handle),
        }
    }

    /// Stop the timer. Later calls are no-ops.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(task = self.name, "timer cancelled");
        }
    }

    /// Whether the timer is still scheduled.
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Label given at spawn.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Effective tick period.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
