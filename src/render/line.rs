//! Integer Bresenham line rasterization.

use crate::color::Rgba;
use crate::framebuffer::PixelBuffer;
use crate::geometry::Line;
use crate::render::Drawable;

/// Draw a line from `(x0, y0)` to `(x1, y1)` using Bresenham's error accumulator.
///
/// One pixel is plotted per unit step in `x`, so exactly `x1 - x0 + 1` pixels are
/// written. The column coordinate `y` advances by at most one per step, which
/// makes the result exact for slopes in `[0, 1]`.
///
/// The error term is kept in `i64`, so any pair of `i32` endpoints is accepted;
/// pixels that fall outside the buffer are skipped.
///
/// # Precondition
///
/// `x1 >= x0`. Calls with `x1 < x0` draw nothing and log a warning. Use
/// [`Line::ordered`] to normalize endpoints beforehand.
///
/// # Arguments
///
/// * `buf` - Target buffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(buf: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    if x1 < x0 {
        log::warn!("draw_line: x1 ({x1}) < x0 ({x0}), nothing drawn");
        return;
    }

    let dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);
    let mut e = -dx;
    let mut y = y0;

    for x in x0..=x1 {
        buf.set(x, y, color);
        e += 2 * dy;
        if e >= 0 {
            y = y.saturating_add(1);
            e -= 2 * dx;
        }
    }
}

impl Drawable for Line {
    fn draw(&self, buf: &mut PixelBuffer, color: Rgba) {
        draw_line(buf, self.start.x, self.start.y, self.end.x, self.end.y, color);
    }
}
