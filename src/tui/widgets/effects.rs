//! # Widget: Background Effects
//!
//! ## Responsibility
//! Paints the layers behind the content: scanlines, per-frame noise and the
//! floating glitch blocks of the pixel field.
//!
//! ## Guarantees
//! - Writes only inside `area`
//! - Noise is a pure function of the frame counter
//! - Never panics on any terminal size or pixel spec

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::screen::PixelSpec;
use crate::tui::app::App;

/// Approximate pixel width of one terminal cell.
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Approximate pixel height of one terminal cell.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// One in this many cells gets a noise glyph each frame.
const NOISE_DENSITY: u32 = 40;

const SCANLINE_BG: Color = Color::Rgb(14, 10, 16);
const NOISE_GLYPHS: [&str; 3] = ["\u{2591}", "\u{2592}", "\u{00b7}"];

/// Renders all background layers.
pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
    render_scanlines(buf, area);
    render_noise(buf, area, app.frame_count);
    render_pixels(buf, area, app.screen.pixels(), app.elapsed_secs());
}

/// Whether row `y` carries a scanline.
pub fn is_scanline(y: u16) -> bool {
    y % 2 == 1
}

/// Darkens every other row.
fn render_scanlines(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        if !is_scanline(y) {
            continue;
        }
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(SCANLINE_BG);
            }
        }
    }
}

/// Sprinkles faint glyphs, reseeded every frame so the static crawls.
fn render_noise(buf: &mut Buffer, area: Rect, frame: u64) {
    let mut rng = StdRng::seed_from_u64(frame);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if rng.gen_range(0..NOISE_DENSITY) != 0 {
                continue;
            }
            let glyph = NOISE_GLYPHS[rng.gen_range(0..NOISE_GLYPHS.len())];
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(glyph).set_fg(Color::Rgb(48, 48, 56));
            }
        }
    }
}

/// Maps a block onto terminal cells, clipped to `area`.
///
/// Blocks are at least one cell in each direction.
pub fn pixel_rect(pixel: &PixelSpec, area: Rect) -> Rect {
    let x = area.x + (pixel.left / 100.0 * f64::from(area.width)) as u16;
    let y = area.y + (pixel.top / 100.0 * f64::from(area.height)) as u16;
    let width = ((pixel.size_pixels / CELL_WIDTH_PX).round() as u16).max(1);
    let height = ((pixel.height_pixels() / CELL_HEIGHT_PX).round() as u16).max(1);
    Rect::new(x, y, width, height).intersection(area)
}

/// Colour of a block; alternates between the two glitch channels.
pub fn pixel_color(pixel: &PixelSpec) -> Color {
    if pixel.id % 2 == 0 {
        Color::Magenta
    } else {
        Color::Cyan
    }
}

/// Draws the blocks that are lit at `elapsed_secs`.
fn render_pixels(buf: &mut Buffer, area: Rect, pixels: &[PixelSpec], elapsed_secs: f64) {
    for pixel in pixels.iter().filter(|p| p.is_lit(elapsed_secs)) {
        let rect = pixel_rect(pixel, area);
        let color = pixel_color(pixel);
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol("\u{2580}").set_fg(color);
                }
            }
        }
    }
}
