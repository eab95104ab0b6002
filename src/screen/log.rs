//! # LogScroller
//!
//! The fake `system_log.exe` window. Each tick appends the next line of a
//! fixed script to a bounded window, evicting the oldest line when full.
//!
//! ## Guarantees
//! - The window never holds more than its capacity
//! - Lines are in arrival order, oldest first
//! - The window is always a contiguous suffix of everything emitted so far

use std::collections::VecDeque;

/// Default number of visible lines.
pub const LOG_WINDOW: usize = 5;

/// The script, replayed cyclically.
pub const LOG_SCRIPT: [&str; 8] = [
    "> Initializing recovery protocol...",
    "> ERROR: Memory address 0x7FFF corrupted",
    "> Attempting to rebuild index...",
    "> FATAL: Cannot locate main process",
    "> Retrying connection...",
    "> STATUS: All systems offline",
    "> WARNING: Data integrity compromised",
    "> Scanning for alternatives...",
];

/// Bounded window over the cyclic script.
#[derive(Debug, Clone)]
pub struct LogScroller {
    /// Count of lines emitted; only ever used modulo the script length.
    index: u64,
    window: VecDeque<&'static str>,
    capacity: usize,
}

impl Default for LogScroller {
    fn default() -> Self {
        Self::new(LOG_WINDOW)
    }
}

impl LogScroller {
    /// Empty window holding at most `capacity` lines (at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            index: 0,
            window: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Script line emitted at position `n` of the stream.
    pub fn script_line(n: u64) -> &'static str {
        LOG_SCRIPT[(n % LOG_SCRIPT.len() as u64) as usize]
    }

    /// Append the next script line and return it.
    pub fn tick(&mut self) -> &'static str {
        let line = Self::script_line(self.index);
        self.window.push_back(line);
        self.index = self.index.wrapping_add(1);
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }
        tracing::trace!(line, emitted = self.index, "log line appended");
        line
    }

    /// Visible lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.window.iter().copied()
    }

    /// Number of visible lines.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Total lines emitted since mount.
    pub fn emitted(&self) -> u64 {
        self.index
    }

    /// Maximum visible lines.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
