//! Error types for circle-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in circle-raster operations.
///
/// Out-of-bounds pixel access and degenerate geometry are deliberately absent:
/// those are handled as silent or logged no-ops by the rasterizers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a pixel buffer.
    #[error("Invalid dimensions: {height}x{width} (height x width)")]
    InvalidDimensions {
        /// Height value (rows).
        height: u32,
        /// Width value (columns).
        width: u32,
    },

    /// Two buffers that must match in size do not.
    #[error(
        "Dimension mismatch: expected {expected_height}x{expected_width}, got {height}x{width}"
    )]
    DimensionMismatch {
        /// Expected height.
        expected_height: u32,
        /// Expected width.
        expected_width: u32,
        /// Actual height.
        height: u32,
        /// Actual width.
        width: u32,
    },

    /// Supersampling factor is zero or does not divide the buffer.
    #[error("Invalid scale factor: {0}")]
    InvalidScale(u32),

    /// Configuration file could not be read.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number of the failure (0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid config value for {field}: {reason}")]
    InvalidConfig {
        /// Offending field.
        field: &'static str,
        /// Why the value is rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            height: 0,
            width: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("0x100"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::DimensionMismatch {
            expected_height: 10,
            expected_width: 20,
            height: 30,
            width: 40,
        };
        let msg = err.to_string();
        assert!(msg.contains("10x20"));
        assert!(msg.contains("30x40"));
    }

    #[test]
    fn test_config_parse_includes_line() {
        let err = Error::ConfigParse {
            line: 7,
            message: "bad".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
