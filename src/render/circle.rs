//! Circle rasterization: exact midpoint circle and two-pixel coverage anti-aliasing.
//!
//! Both algorithms walk a single octant and mirror every step into the other
//! seven, so the output is symmetric about the center by construction.

use crate::color::Rgba;
use crate::framebuffer::PixelBuffer;
use crate::geometry::Circle;
use crate::render::Drawable;

/// Draw a circle outline with the integer midpoint algorithm.
///
/// Starts at `(0, r)` with decision `d = 3 - 2r` and stops once `x > y`. No
/// floating point is involved, so output is identical on every platform.
/// `r == 0` plots the center. Negative radii draw nothing and log a warning.
///
/// The decision variable is kept in `i64` and mirrored coordinates saturate,
/// so centers anywhere in the `i32` range are accepted.
pub fn draw_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: Rgba) {
    if r < 0 {
        log::warn!("draw_circle: negative radius {r}, nothing drawn");
        return;
    }

    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * i64::from(r);

    while x <= y {
        plot_octants(buf, cx, cy, x, y, color);
        if d < 0 {
            d += 4 * i64::from(x) + 6;
        } else {
            d += 4 * (i64::from(x) - i64::from(y)) + 10;
            y -= 1;
        }
        x += 1;
    }
}

/// Blend weights for one column of the anti-aliased circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    /// Integer part of `sqrt(r² - x²)`.
    pub y_floor: i32,
    /// Weight applied at `y_floor`.
    pub inner: f64,
    /// Weight applied at `y_floor + 1`.
    pub outer: f64,
}

/// Coverage split for column `x` of a circle of radius `r`.
///
/// Returns `None` when `x` is outside `[0, r]`.
#[must_use]
pub fn aa_coverage(r: i32, x: i32) -> Option<Coverage> {
    if r < 0 || x < 0 || x > r {
        return None;
    }

    let (r, x) = (i64::from(r), i64::from(x));
    let exact = ((r * r - x * x) as f64).sqrt();
    let y_floor = exact.floor();
    let frac = exact - y_floor;

    Some(Coverage {
        y_floor: y_floor as i32,
        inner: 1.0 - frac,
        outer: frac,
    })
}

/// Draw an anti-aliased circle outline.
///
/// The on-axis point `(0, r)` is plotted at full color. For every further column
/// in the octant the true boundary height is split between the two nearest rows,
/// each receiving `color` scaled by its share of coverage. Scaling darkens toward
/// zero and pixels are overwritten, so the result is only correct over a black
/// background. Alpha is copied from `color` unchanged.
pub fn draw_aa_circle(buf: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: Rgba) {
    if r < 0 {
        log::warn!("draw_aa_circle: negative radius {r}, nothing drawn");
        return;
    }

    plot_octants(buf, cx, cy, 0, r, color);

    // Bounded by the previous column's height, as in the octant walk above.
    let mut y = r;
    let mut x = 1;
    while x <= y {
        let Some(cov) = aa_coverage(r, x) else {
            break;
        };
        y = cov.y_floor;
        plot_octants(buf, cx, cy, x, y, color.scale_rgb(cov.inner));
        plot_octants(buf, cx, cy, x, y + 1, color.scale_rgb(cov.outer));
        x += 1;
    }
}

/// Plot `(x, y)` mirrored into all eight octants around `(cx, cy)`.
#[inline]
fn plot_octants(buf: &mut PixelBuffer, cx: i32, cy: i32, x: i32, y: i32, color: Rgba) {
    let (px, nx) = (cx.saturating_add(x), cx.saturating_sub(x));
    let (py, ny) = (cy.saturating_add(y), cy.saturating_sub(y));
    let (pyx, nyx) = (cx.saturating_add(y), cx.saturating_sub(y));
    let (pxy, nxy) = (cy.saturating_add(x), cy.saturating_sub(x));

    buf.set(px, py, color);
    buf.set(pyx, pxy, color);
    buf.set(nx, py, color);
    buf.set(pyx, nxy, color);
    buf.set(px, ny, color);
    buf.set(nyx, pxy, color);
    buf.set(nx, ny, color);
    buf.set(nyx, nxy, color);
}

impl Drawable for Circle {
    fn draw(&self, buf: &mut PixelBuffer, color: Rgba) {
        draw_circle(buf, self.center.x, self.center.y, self.radius, color);
    }

    fn draw_aa(&self, buf: &mut PixelBuffer, color: Rgba) {
        draw_aa_circle(buf, self.center.x, self.center.y, self.radius, color);
    }
}
