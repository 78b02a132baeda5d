//! The five-image demo sequence.
//!
//! | File           | Content                                           |
//! |----------------|---------------------------------------------------|
//! | `circle_1.png` | aliased midpoint circle                           |
//! | `circle_2.png` | aliased circle, interior flood-filled green       |
//! | `circle_3.png` | coverage anti-aliased circle                      |
//! | `circle_4.png` | aliased circle supersampled and downsampled       |
//! | `circle_5.png` | six colored anti-aliased circles plus a white one |
//!
//! A failing image is logged and reported; the remaining images are still
//! attempted.

use crate::color::Rgba;
use crate::config::DemoConfig;
use crate::error::{Error, Result};
use crate::framebuffer::PixelBuffer;
use crate::geometry::Circle;
use crate::output::PngEncoder;
use crate::render::{draw_aa_circle, draw_circle, flood_fill, Drawable};
use crate::supersample::Supersampler;
use std::path::PathBuf;

/// Builds one demo image from the configuration.
pub type SceneFn = fn(&DemoConfig) -> Result<PixelBuffer>;

/// Output file names paired with their builders, in render order.
pub const SCENES: [(&str, SceneFn); 5] = [
    ("circle_1.png", aliased_circle),
    ("circle_2.png", filled_circle),
    ("circle_3.png", aa_circle),
    ("circle_4.png", supersampled_circle),
    ("circle_5.png", palette),
];

/// Outcome of a demo run.
#[derive(Debug, Default)]
pub struct DemoReport {
    /// Files written successfully.
    pub written: Vec<PathBuf>,
    /// Files that failed, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
}

impl DemoReport {
    /// Whether every image was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render and write every scene into `config.output_dir`.
///
/// # Errors
///
/// Returns an error only if the configuration is invalid. Per-image failures
/// are collected in the report.
pub fn run(config: &DemoConfig) -> Result<DemoReport> {
    run_with(config, |_, _| {})
}

/// Like [`run`], calling `on_render` with each scene's name and buffer once it
/// has been rendered and before it is written.
///
/// # Errors
///
/// Returns an error only if the configuration is invalid.
pub fn run_with<F>(config: &DemoConfig, mut on_render: F) -> Result<DemoReport>
where
    F: FnMut(&str, &PixelBuffer),
{
    config.validate()?;
    log::info!(
        "center = ({}, {}), r = {}",
        config.center_x,
        config.center_y,
        config.radius
    );

    let mut report = DemoReport::default();
    for (name, scene) in SCENES {
        let path = config.output_dir.join(name);
        let written = scene(config).and_then(|buf| {
            on_render(name, &buf);
            PngEncoder::write_to_file(&buf, &path)
        });
        match written {
            Ok(()) => {
                log::info!("wrote {}", path.display());
                report.written.push(path);
            }
            Err(e) => {
                log::error!("failed to write {}: {e}", path.display());
                report.failed.push((path, e));
            }
        }
    }
    Ok(report)
}

/// Plain midpoint circle in white.
///
/// # Errors
///
/// Returns an error if the configured size is invalid.
pub fn aliased_circle(config: &DemoConfig) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(config.size, config.size)?;
    draw_circle(&mut buf, config.center_x, config.center_y, config.radius, Rgba::WHITE);
    Ok(buf)
}

/// White circle with its black interior filled green from the center.
///
/// # Errors
///
/// Returns an error if the configured size is invalid.
pub fn filled_circle(config: &DemoConfig) -> Result<PixelBuffer> {
    let mut buf = aliased_circle(config)?;
    flood_fill(&mut buf, config.center_x, config.center_y, Rgba::BLACK, Rgba::GREEN);
    Ok(buf)
}

/// Coverage anti-aliased circle in white.
///
/// # Errors
///
/// Returns an error if the configured size is invalid.
pub fn aa_circle(config: &DemoConfig) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(config.size, config.size)?;
    draw_aa_circle(&mut buf, config.center_x, config.center_y, config.radius, Rgba::WHITE);
    Ok(buf)
}

/// Aliased circle drawn at `supersample`× and box-filtered back down.
///
/// # Errors
///
/// Returns an error if the size or factor is invalid.
pub fn supersampled_circle(config: &DemoConfig) -> Result<PixelBuffer> {
    let ss = Supersampler::new(config.supersample)?;
    let circle = Circle::from_coords(config.center_x, config.center_y, config.radius);
    ss.render(config.size, config.size, |big, f| {
        circle.scaled(f).draw(big, Rgba::WHITE);
    })
}

/// Six colored circles on a 3×2 grid with a larger white circle on top.
///
/// # Errors
///
/// Returns an error if the configured palette size is invalid.
pub fn palette(config: &DemoConfig) -> Result<PixelBuffer> {
    let side = config.palette_size;
    let mut buf = PixelBuffer::new(side, side)?;

    let s = side as i32;
    let (quarter, half, three_quarters) = (s / 4, s / 2, 3 * s / 4);
    let small = s / 6;

    let circles = [
        (quarter, quarter, Rgba::RED),
        (quarter, half, Rgba::GREEN),
        (quarter, three_quarters, Rgba::BLUE),
        (three_quarters, quarter, Rgba::YELLOW),
        (three_quarters, half, Rgba::MAGENTA),
        (three_quarters, three_quarters, Rgba::CYAN),
    ];
    for (cx, cy, color) in circles {
        draw_aa_circle(&mut buf, cx, cy, small, color);
    }
    draw_aa_circle(&mut buf, half, half, quarter, Rgba::WHITE);

    Ok(buf)
}
