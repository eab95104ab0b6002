//! # ErrorCodeRotator
//!
//! Cycles the displayed error code through a fixed set. Each tick picks a
//! code uniformly at random; the next code may equal the current one.

use std::fmt;

use rand::Rng;

/// One of the themed error codes shown next to the timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `ERR_0x4F2B`, shown at mount.
    #[default]
    Err4F2B,
    /// `ERR_0xDEAD`
    ErrDead,
    /// `ERR_0xBEEF`
    ErrBeef,
    /// `ERR_0x1337`
    Err1337,
    /// `ERR_0xCAFE`
    ErrCafe,
}

impl ErrorCode {
    /// Every code, in display order.
    pub const ALL: [ErrorCode; 5] = [
        Self::Err4F2B,
        Self::ErrDead,
        Self::ErrBeef,
        Self::Err1337,
        Self::ErrCafe,
    ];

    /// Displayed text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Err4F2B => "ERR_0x4F2B",
            Self::ErrDead => "ERR_0xDEAD",
            Self::ErrBeef => "ERR_0xBEEF",
            Self::Err1337 => "ERR_0x1337",
            Self::ErrCafe => "ERR_0xCAFE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Random walk over [`ErrorCode::ALL`].
#[derive(Debug)]
pub struct ErrorCodeRotator<R> {
    current: ErrorCode,
    ticks: u64,
    rng: R,
}

impl<R: Rng> ErrorCodeRotator<R> {
    /// Starts at [`ErrorCode::Err4F2B`].
    pub fn new(rng: R) -> Self {
        Self {
            current: ErrorCode::default(),
            ticks: 0,
            rng,
        }
    }

    /// Advance to a uniformly chosen code and return it.
    pub fn tick(&mut self) -> ErrorCode {
        let index = self.rng.gen_range(0..ErrorCode::ALL.len());
        self.current = ErrorCode::ALL[index];
        self.ticks = self.ticks.wrapping_add(1);
        tracing::trace!(code = self.current.as_str(), "error code rotated");
        self.current
    }

    /// Code currently displayed.
    pub fn current(&self) -> ErrorCode {
        self.current
    }

    /// Number of ticks since mount.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
