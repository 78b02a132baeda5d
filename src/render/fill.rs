//! Scanline flood fill with an explicit seed stack.

use crate::color::Rgba;
use crate::framebuffer::PixelBuffer;
use crate::geometry::Point;

/// Recolor the 4-connected region of `old`-colored pixels containing `(x, y)`.
///
/// Each popped seed is expanded along its scanline (the first coordinate), then
/// the neighbouring scanlines `y + 1` and `y - 1` are scanned across the filled
/// span and one seed is pushed per contiguous run of `old` pixels, at the run's
/// last column. The stack holds one seed per pending run rather than one per
/// pixel, and there is no recursion.
///
/// Bounds are checked explicitly, so the out-of-bounds sentinel can never be
/// mistaken for `old`.
///
/// Returns the number of pixels recolored. Nothing happens when `old == new`,
/// when the seed is outside the buffer, or when the seed is not `old`.
pub fn flood_fill(buf: &mut PixelBuffer, x: i32, y: i32, old: Rgba, new: Rgba) -> usize {
    if old == new || buf.get_pixel(x, y) != Some(old) {
        return 0;
    }

    let matches = |buf: &PixelBuffer, x: i32, y: i32| buf.get_pixel(x, y) == Some(old);

    let mut filled = 0;
    let mut stack = vec![Point::new(x, y)];

    while let Some(seed) = stack.pop() {
        let y = seed.y;

        let mut x = seed.x;
        while matches(buf, x, y) {
            buf.set(x, y, new);
            filled += 1;
            x += 1;
        }
        let xr = x - 1;

        x = seed.x - 1;
        while matches(buf, x, y) {
            buf.set(x, y, new);
            filled += 1;
            x -= 1;
        }
        let xl = x + 1;

        // A seed popped after its run was already filled by another seed.
        if xl > xr {
            continue;
        }

        for ny in [y + 1, y - 1] {
            push_spans(buf, &mut stack, xl, xr, ny, old);
        }
    }

    log::debug!("flood_fill: recolored {filled} pixels from ({x}, {y})");
    filled
}

/// Push one seed per run of `old` pixels in line `y` that starts within `[xl, xr]`.
fn push_spans(buf: &PixelBuffer, stack: &mut Vec<Point>, xl: i32, xr: i32, y: i32, old: Rgba) {
    let mut x = xl;
    while x <= xr {
        let mut in_span = false;
        while buf.get_pixel(x, y) == Some(old) {
            in_span = true;
            x += 1;
        }
        if in_span {
            stack.push(Point::new(x - 1, y));
        }
        while x <= xr && buf.get_pixel(x, y) != Some(old) {
            x += 1;
        }
    }
}
