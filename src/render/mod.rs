//! Rasterization algorithms operating on a [`PixelBuffer`].
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer error accumulation, one pixel per major step
//! - **Midpoint Circle**: integer decision variable, 8-way symmetry
//! - **Coverage Circle**: two-pixel split of the exact boundary per column
//! - **Scanline Flood Fill**: explicit seed stack, 4-connected
//!
//! Every function takes the buffer explicitly and never fails: pixels outside
//! the buffer are skipped, and precondition violations draw nothing.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

use crate::color::Rgba;
use crate::framebuffer::PixelBuffer;

mod circle;
mod fill;
mod line;

pub use circle::{aa_coverage, draw_aa_circle, draw_circle, Coverage};
pub use fill::flood_fill;
pub use line::draw_line;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a buffer.
    fn draw(&self, buf: &mut PixelBuffer, color: Rgba);

    /// Draw this primitive with anti-aliasing if supported.
    fn draw_aa(&self, buf: &mut PixelBuffer, color: Rgba) {
        // Default to non-AA drawing
        self.draw(buf, color);
    }
}
