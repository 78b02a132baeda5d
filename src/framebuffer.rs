//! Core pixel buffer for rasterization.
//!
//! The buffer stores tightly packed RGBA bytes. Coordinates are `(x, y)` where
//! `x` is the row in `[0, height)` and `y` is the column in `[0, width)`, so the
//! byte offset of a pixel is `4 * width * x + 4 * y`. That is plain row-major
//! order, which is what the PNG encoder expects.
//!
//! Reads outside the buffer return [`Rgba::SENTINEL`] and writes outside it are
//! ignored, so rasterizers never have to clip.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Vector;

/// Owned RGBA pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Number of rows.
    height: u32,
    /// Number of columns.
    width: u32,
    /// RGBA pixels, row-major, 4 bytes each.
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to opaque black.
    ///
    /// # Errors
    ///
    /// Returns an error if height or width is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use circle_raster::color::Rgba;
    /// use circle_raster::framebuffer::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(600, 800).unwrap();
    /// assert_eq!(buf.height(), 600);
    /// assert_eq!(buf.width(), 800);
    /// assert_eq!(buf.get(0, 0), Rgba::BLACK);
    /// ```
    pub fn new(height: u32, width: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { height, width });
        }

        let size = (width as usize) * (height as usize) * 4;
        let mut buf = Self {
            height,
            width,
            pixels: vec![0; size],
        };
        buf.clear(Rgba::BLACK);
        Ok(buf)
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw RGBA bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether `(x, y)` lies inside the buffer.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.height && (y as u32) < self.width
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Color at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if !self.contains(x, y) {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Color at `(x, y)`, or [`Rgba::SENTINEL`] when out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Rgba {
        self.get_pixel(x, y).unwrap_or(Rgba::SENTINEL)
    }

    /// Write `color` at `(x, y)`. Does nothing if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if !self.contains(x, y) {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Number of pixels exactly equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels.chunks_exact(4).filter(|c| *c == rgba).count()
    }

    /// Iterate over `((x, y), color)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), Rgba)> + '_ {
        let width = self.width as usize;
        self.pixels.chunks_exact(4).enumerate().map(move |(i, c)| {
            let x = (i / width) as i32;
            let y = (i % width) as i32;
            ((x, y), Rgba::new(c[0], c[1], c[2], c[3]))
        })
    }

    /// Luminance statistics as `(min, max, mean)` using SIMD reduction.
    #[must_use]
    pub fn luminance_stats(&self) -> (f32, f32, f32) {
        let luminances: Vec<f32> = self
            .pixels
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]).luminance())
            .collect();

        let vec = Vector::from_vec(luminances);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(255.0);
        let mean = vec.mean().unwrap_or(0.0);

        (min, max, mean)
    }

    /// Mean absolute per-channel RGB difference against another buffer.
    ///
    /// Alpha is ignored. The result is in `[0, 255]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffers differ in size.
    pub fn mean_abs_diff(&self, other: &PixelBuffer) -> Result<f32> {
        if self.height != other.height || self.width != other.width {
            return Err(Error::DimensionMismatch {
                expected_height: self.height,
                expected_width: self.width,
                height: other.height,
                width: other.width,
            });
        }

        let diffs: Vec<f32> = self
            .pixels
            .chunks_exact(4)
            .zip(other.pixels.chunks_exact(4))
            .flat_map(|(a, b)| (0..3).map(move |i| f32::from(a[i].abs_diff(b[i]))))
            .collect();

        Ok(Vector::from_vec(diffs).mean().unwrap_or(0.0))
    }

    /// Byte index for an in-bounds coordinate.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> usize {
        4 * (self.width as usize) * (x as usize) + 4 * (y as usize)
    }
}
