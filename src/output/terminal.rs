//! Terminal preview encoder.
//!
//! Nearest-neighbour samples a pixel buffer into a character grid, either as a
//! grayscale ASCII ramp or as ANSI 24-bit background colors.

use crate::color::Rgba;
use crate::framebuffer::PixelBuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    #[default]
    Ascii,
    /// Space characters with ANSI 24-bit background color
    AnsiTrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    columns: u32,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Terminal cells are roughly twice as tall as they are wide.
    const CELL_ASPECT: f32 = 2.0;

    /// Create an ASCII encoder 80 columns wide.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), columns: 80 }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output width in characters. Clamped to at least one.
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Render a buffer to a string, one line per output row.
    #[must_use]
    pub fn render(&self, buf: &PixelBuffer) -> String {
        let cols = self.columns.min(buf.width());
        let rows = ((buf.height() as f32 * cols as f32 / buf.width() as f32 / Self::CELL_ASPECT)
            .round() as u32)
            .max(1);

        let step_x = buf.height() as f32 / rows as f32;
        let step_y = buf.width() as f32 / cols as f32;

        let mut output = String::with_capacity(((cols + 1) * rows) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let pixel = buf.get((row as f32 * step_x) as i32, (col as f32 * step_y) as i32);
                self.push_cell(&mut output, pixel);
            }
            if self.mode == TerminalMode::AnsiTrueColor {
                output.push_str("\x1b[0m");
            }
            output.push('\n');
        }
        output
    }

    fn push_cell(&self, out: &mut String, pixel: Rgba) {
        match self.mode {
            TerminalMode::Ascii => {
                let levels = Self::ASCII_RAMP.len() - 1;
                let idx = ((pixel.luminance() / 255.0) * levels as f32).round() as usize;
                out.push(Self::ASCII_RAMP[idx.min(levels)]);
            }
            TerminalMode::AnsiTrueColor => {
                let _ = write!(out, "\x1b[48;2;{};{};{}m ", pixel.r, pixel.g, pixel.b);
            }
        }
    }

    /// Write output directly to stdout.
    pub fn print(&self, buf: &PixelBuffer) {
        print!("{}", self.render(buf));
    }
}
