//! Output encoders (PNG, terminal).
//!
//! Both adapters consume the same [`PixelBuffer`](crate::framebuffer::PixelBuffer)
//! and never modify it.

mod png_encoder;
mod terminal;

pub use png_encoder::PngEncoder;
pub use terminal::{TerminalEncoder, TerminalMode};
