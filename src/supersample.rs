//! Supersampling anti-aliasing (SSAA).
//!
//! Rasterizers need no changes to run at a higher resolution: coordinates and
//! radii are multiplied by the factor, the scene is drawn into an enlarged
//! buffer, and every `factor × factor` block is averaged back into one pixel.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;

/// Renders at `factor`× linear resolution and box-filters back down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supersampler {
    factor: u32,
}

impl Default for Supersampler {
    fn default() -> Self {
        Self { factor: 2 }
    }
}

impl Supersampler {
    /// Create a supersampler.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` is zero.
    pub fn new(factor: u32) -> Result<Self> {
        if factor == 0 {
            return Err(Error::InvalidScale(factor));
        }
        Ok(Self { factor })
    }

    /// Linear scale factor.
    #[must_use]
    pub const fn factor(&self) -> u32 {
        self.factor
    }

    /// Draw a `height × width` scene at the enlarged resolution and downsample it.
    ///
    /// `draw` receives the enlarged buffer and the factor to scale its
    /// coordinates by.
    ///
    /// # Errors
    ///
    /// Returns an error if the enlarged dimensions are invalid or overflow.
    pub fn render<F>(&self, height: u32, width: u32, draw: F) -> Result<PixelBuffer>
    where
        F: FnOnce(&mut PixelBuffer, i32),
    {
        let big_height = height
            .checked_mul(self.factor)
            .ok_or(Error::InvalidDimensions { height, width })?;
        let big_width = width
            .checked_mul(self.factor)
            .ok_or(Error::InvalidDimensions { height, width })?;

        let mut big = PixelBuffer::new(big_height, big_width)?;
        draw(&mut big, self.factor as i32);

        log::debug!(
            "supersample: {big_height}x{big_width} -> {height}x{width} (factor {})",
            self.factor
        );
        downsample(&big, self.factor)
    }
}

/// Average every `factor × factor` block of `src` into one pixel, all four channels.
///
/// Averages are rounded to nearest.
///
/// # Errors
///
/// Returns an error if `factor` is zero or does not divide both dimensions.
pub fn downsample(src: &PixelBuffer, factor: u32) -> Result<PixelBuffer> {
    if factor == 0 || src.height() % factor != 0 || src.width() % factor != 0 {
        return Err(Error::InvalidScale(factor));
    }
    if factor == 1 {
        return Ok(src.clone());
    }

    let height = src.height() / factor;
    let width = src.width() / factor;
    let mut dst = PixelBuffer::new(height, width)?;

    let f = factor as i32;
    let n = factor * factor;
    for x in 0..height as i32 {
        for y in 0..width as i32 {
            let mut sum = [0u32; 4];
            for bx in 0..f {
                for by in 0..f {
                    let c = src.get(x * f + bx, y * f + by).to_array();
                    for (s, v) in sum.iter_mut().zip(c) {
                        *s += u32::from(v);
                    }
                }
            }
            let avg = sum.map(|s| ((s + n / 2) / n) as u8);
            dst.set(x, y, Rgba::from_array(avg));
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::draw_circle;

    #[test]
    fn test_zero_factor_rejected() {
        assert!(Supersampler::new(0).is_err());
        assert_eq!(Supersampler::new(3).unwrap().factor(), 3);
        assert_eq!(Supersampler::default().factor(), 2);
    }

    #[test]
    fn test_downsample_averages_block() {
        let mut src = PixelBuffer::new(2, 2).unwrap();
        src.set(0, 0, Rgba::WHITE);
        src.set(1, 1, Rgba::WHITE);

        let dst = downsample(&src, 2).unwrap();

        assert_eq!(dst.height(), 1);
        assert_eq!(dst.width(), 1);
        // (255 + 255 + 0 + 0 + 2) / 4 = 128
        assert_eq!(dst.get(0, 0), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_downsample_keeps_layout() {
        let mut src = PixelBuffer::new(4, 6).unwrap();
        for bx in 0..2 {
            for by in 0..2 {
                src.set(2 + bx, 4 + by, Rgba::RED);
            }
        }

        let dst = downsample(&src, 2).unwrap();

        assert_eq!((dst.height(), dst.width()), (2, 3));
        assert_eq!(dst.get(1, 2), Rgba::RED);
        assert_eq!(dst.count_color(Rgba::BLACK), 5);
    }

    #[test]
    fn test_downsample_rejects_indivisible() {
        let src = PixelBuffer::new(5, 4).unwrap();
        assert!(downsample(&src, 2).is_err());
        assert!(downsample(&src, 0).is_err());
        assert_eq!(downsample(&src, 1).unwrap(), src);
    }

    #[test]
    fn test_render_passes_factor() {
        let ss = Supersampler::new(2).unwrap();
        let mut seen = None;

        let out = ss
            .render(10, 20, |big, f| {
                seen = Some((big.height(), big.width(), f));
            })
            .unwrap();

        assert_eq!(seen, Some((20, 40, 2)));
        assert_eq!((out.height(), out.width()), (10, 20));
    }

    #[test]
    fn test_render_circle_produces_intermediate_shades() {
        let ss = Supersampler::new(2).unwrap();
        let out = ss
            .render(60, 60, |big, f| draw_circle(big, 30 * f, 30 * f, 20 * f, Rgba::WHITE))
            .unwrap();

        let gray = out.iter().filter(|(_, c)| c.r > 0 && c.r < 255).count();
        assert!(gray > 0, "downsampling should produce partial coverage");
    }
}
