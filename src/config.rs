//! Demo configuration.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for the five-image demo sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Circle center, row coordinate.
    #[serde(default = "default_center")]
    pub center_x: i32,

    /// Circle center, column coordinate.
    #[serde(default = "default_center")]
    pub center_y: i32,

    /// Circle radius in pixels.
    #[serde(default = "default_radius")]
    pub radius: i32,

    /// Side length of the square buffers for images 1-4.
    #[serde(default = "default_size")]
    pub size: u32,

    /// Side length of the multi-color palette image.
    #[serde(default = "default_palette_size")]
    pub palette_size: u32,

    /// Linear factor for the supersampled image.
    #[serde(default = "default_supersample")]
    pub supersample: u32,

    /// Directory the PNG files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_center() -> i32 {
    250
}
fn default_radius() -> i32 {
    150
}
fn default_size() -> u32 {
    500
}
fn default_palette_size() -> u32 {
    600
}
fn default_supersample() -> u32 {
    2
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            radius: default_radius(),
            size: default_size(),
            palette_size: default_palette_size(),
            supersample: default_supersample(),
            output_dir: default_output_dir(),
        }
    }
}

impl DemoConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Override the circle with command-line values.
    #[must_use]
    pub fn with_circle(mut self, center_x: i32, center_y: i32, radius: i32) -> Self {
        self.center_x = center_x;
        self.center_y = center_y;
        self.radius = radius;
        self
    }

    /// Override the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Reject values no demo image could be produced with.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first unusable field.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig {
                field: "size",
                reason: "must be positive".to_string(),
            });
        }
        if self.palette_size == 0 {
            return Err(Error::InvalidConfig {
                field: "palette_size",
                reason: "must be positive".to_string(),
            });
        }
        if self.supersample == 0 {
            return Err(Error::InvalidConfig {
                field: "supersample",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
