//! # circle-raster
//!
//! Deterministic rasterization of lines and circles into an RGBA pixel buffer.
//!
//! All geometry is integer: lines use Bresenham's error accumulator, aliased
//! circles the midpoint decision variable, and regions are recolored with a
//! scanline flood fill driven by an explicit stack. The anti-aliased circle is
//! the one place that reads a square root, to split each boundary column
//! between its two nearest pixels.
//!
//! ## Coordinates
//!
//! A point `(x, y)` addresses row `x` and column `y`. Buffers are created as
//! `PixelBuffer::new(height, width)` and stored row-major, 4 bytes per pixel.
//!
//! ## Quick Start
//!
//! ```rust
//! use circle_raster::prelude::*;
//!
//! let mut buf = PixelBuffer::new(500, 500)?;
//! draw_circle(&mut buf, 250, 250, 150, Rgba::WHITE);
//! flood_fill(&mut buf, 250, 250, Rgba::BLACK, Rgba::GREEN);
//!
//! let png = PngEncoder::to_bytes(&buf)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), circle_raster::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and palette constants.
pub mod color;

/// Pixel buffer with bounds-checked access.
pub mod framebuffer;

/// Integer points, lines and circles.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, circle and flood-fill rasterization.
pub mod render;

/// Supersampling anti-aliasing.
pub mod supersample;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Demo
// ============================================================================

/// Demo configuration.
pub mod config;

/// The five-image demo sequence.
pub mod demo;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for circle-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use circle_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::PixelBuffer;
    pub use crate::geometry::{Circle, Line, Point};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{
        aa_coverage, draw_aa_circle, draw_circle, draw_line, flood_fill, Drawable,
    };
    pub use crate::supersample::{downsample, Supersampler};
}
