//! # RandomPixelField
//!
//! Floating glitch blocks, generated once at mount and static afterwards.

use rand::Rng;

/// Number of blocks on a default screen.
pub const PIXEL_COUNT: usize = 12;

/// Length of one pulse of a block's animation, in seconds.
pub const PULSE_CYCLE_SECS: f64 = 4.0;

/// Smallest block width in pixels (inclusive).
pub const MIN_SIZE_PX: f64 = 20.0;

/// Span of random block widths; widths fall in `[20, 120)`.
pub const SIZE_SPAN_PX: f64 = 100.0;

/// One floating glitch block.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSpec {
    /// Stable index within the field.
    pub id: usize,
    /// Animation phase offset in `[0, 4)` seconds.
    pub delay_seconds: f64,
    /// Block width in `[20, 120)` pixels.
    pub size_pixels: f64,
    /// Horizontal position in `[0, 100)` percent of the container.
    pub left: f64,
    /// Vertical position in `[0, 100)` percent of the container.
    pub top: f64,
}

impl PixelSpec {
    /// Block height; blocks are three times wider than tall.
    pub fn height_pixels(&self) -> f64 {
        self.size_pixels / 3.0
    }

    /// Horizontal position as a CSS-style percentage, e.g. `"42.5%"`.
    pub fn left_percent(&self) -> String {
        format!("{}%", self.left)
    }

    /// Vertical position as a CSS-style percentage.
    pub fn top_percent(&self) -> String {
        format!("{}%", self.top)
    }

    /// Whether the block is lit at `elapsed_secs` since mount.
    ///
    /// Each block is visible for the first quarter of its pulse cycle,
    /// shifted by its own delay.
    pub fn is_lit(&self, elapsed_secs: f64) -> bool {
        let phase = (elapsed_secs + self.delay_seconds).rem_euclid(PULSE_CYCLE_SECS);
        phase < PULSE_CYCLE_SECS / 4.0
    }
}

/// Fixed set of randomly placed glitch blocks.
#[derive(Debug, Clone, Default)]
pub struct RandomPixelField {
    pixels: Vec<PixelSpec>,
}

impl RandomPixelField {
    /// Generate `count` blocks from `rng`.
    ///
    /// # Panics
    ///
    /// This function never panics.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let pixels = (0..count)
            .map(|id| PixelSpec {
                id,
                delay_seconds: rng.gen::<f64>() * PULSE_CYCLE_SECS,
                size_pixels: rng.gen::<f64>() * SIZE_SPAN_PX + MIN_SIZE_PX,
                left: rng.gen::<f64>() * 100.0,
                top: rng.gen::<f64>() * 100.0,
            })
            .collect();
        Self { pixels }
    }

    /// All blocks, in id order.
    pub fn pixels(&self) -> &[PixelSpec] {
        &self.pixels
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the field holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
