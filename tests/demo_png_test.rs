//! Pixel verification of the PNG files the demo writes.
//!
//! Each image is decoded back and inspected at known coordinates.
//!
//! Run: cargo test --test demo_png_test

#![allow(clippy::unwrap_used)]

use circle_raster::config::DemoConfig;
use circle_raster::demo;
use circle_raster::prelude::*;
use std::fs::File;
use std::path::Path;

/// Decode an RGBA8 PNG into (height, width, bytes).
fn decode(path: &Path) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).unwrap();

    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    data.truncate(info.buffer_size());
    (info.height, info.width, data)
}

fn pixel_at(data: &[u8], width: u32, x: u32, y: u32) -> Rgba {
    let i = (4 * (x * width + y)) as usize;
    Rgba::new(data[i], data[i + 1], data[i + 2], data[i + 3])
}

fn render_default() -> (tempfile::TempDir, demo::DemoReport) {
    let dir = tempfile::tempdir().unwrap();
    let config = DemoConfig::default().with_output_dir(dir.path());
    let report = demo::run(&config).unwrap();
    (dir, report)
}

// ============================================================================
// Sequence
// ============================================================================

#[test]
fn pixel_demo_writes_five_pngs() {
    let (dir, report) = render_default();

    assert!(report.is_success());
    let names: Vec<_> = report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["circle_1.png", "circle_2.png", "circle_3.png", "circle_4.png", "circle_5.png"]
    );
    for name in &names {
        let bytes = std::fs::read(dir.path().join(name)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}

#[test]
fn pixel_demo_dimensions() {
    let (dir, _) = render_default();

    for name in ["circle_1.png", "circle_2.png", "circle_3.png", "circle_4.png"] {
        let (h, w, _) = decode(&dir.path().join(name));
        assert_eq!((h, w), (500, 500), "{name}");
    }
    let (h, w, _) = decode(&dir.path().join("circle_5.png"));
    assert_eq!((h, w), (600, 600));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn pixel_aliased_circle_on_axis() {
    let (dir, _) = render_default();
    let (_, w, data) = decode(&dir.path().join("circle_1.png"));

    // (250, 250) r = 150: the four axis extremes are plotted.
    for (x, y) in [(100, 250), (400, 250), (250, 100), (250, 400)] {
        assert_eq!(pixel_at(&data, w, x, y), Rgba::WHITE, "({x},{y})");
    }
    assert_eq!(pixel_at(&data, w, 250, 250), Rgba::BLACK);
    assert_eq!(pixel_at(&data, w, 0, 0), Rgba::BLACK);
}

#[test]
fn pixel_filled_circle_interior_green() {
    let (dir, _) = render_default();
    let (_, w, data) = decode(&dir.path().join("circle_2.png"));

    assert_eq!(pixel_at(&data, w, 250, 250), Rgba::GREEN);
    assert_eq!(pixel_at(&data, w, 250, 399), Rgba::GREEN);
    assert_eq!(pixel_at(&data, w, 250, 400), Rgba::WHITE);
    assert_eq!(pixel_at(&data, w, 250, 401), Rgba::BLACK);
    assert_eq!(pixel_at(&data, w, 10, 10), Rgba::BLACK);
}

#[test]
fn pixel_aa_circle_has_partial_intensities() {
    let (dir, _) = render_default();
    let (h, w, data) = decode(&dir.path().join("circle_3.png"));

    let mut partial = 0;
    for x in 0..h {
        for y in 0..w {
            let p = pixel_at(&data, w, x, y);
            assert_eq!(p.a, 255);
            if p.r > 0 && p.r < 255 {
                partial += 1;
            }
        }
    }
    assert!(partial > 100, "only {partial} blended pixels");
}

#[test]
fn pixel_supersampled_circle_is_softened() {
    let (dir, _) = render_default();
    let (h, w, data) = decode(&dir.path().join("circle_4.png"));

    let intensities: Vec<u8> = (0..h)
        .flat_map(|x| (0..w).map(move |y| (x, y)))
        .map(|(x, y)| pixel_at(&data, w, x, y).r)
        .filter(|&r| r > 0)
        .collect();

    assert!(!intensities.is_empty());
    assert!(intensities.iter().any(|&r| r < 255));
}

#[test]
fn pixel_palette_circles_colored() {
    let (dir, _) = render_default();
    let (_, w, data) = decode(&dir.path().join("circle_5.png"));

    // On-axis tops of each small circle (r = 100) keep their full color.
    let expected = [
        (50, 150, Rgba::RED),
        (50, 300, Rgba::GREEN),
        (50, 450, Rgba::BLUE),
        (350, 150, Rgba::YELLOW),
        (550, 300, Rgba::MAGENTA),
        (550, 450, Rgba::CYAN),
    ];
    for (x, y, color) in expected {
        assert_eq!(pixel_at(&data, w, x, y), color, "({x},{y})");
    }
    // White circle at (300, 300) r = 150.
    assert_eq!(pixel_at(&data, w, 150, 300), Rgba::WHITE);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn pixel_config_file_drives_output() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = format!(
        "center_x: 40\ncenter_y: 60\nradius: 20\nsize: 100\npalette_size: 120\noutput_dir: {}\n",
        dir.path().display()
    );
    let config_path = dir.path().join("demo.yaml");
    std::fs::write(&config_path, yaml).unwrap();

    let config = DemoConfig::load(&config_path).unwrap();
    let report = demo::run(&config).unwrap();
    assert!(report.is_success());

    let (h, w, data) = decode(&dir.path().join("circle_1.png"));
    assert_eq!((h, w), (100, 100));
    assert_eq!(pixel_at(&data, w, 40, 80), Rgba::WHITE);
    assert_eq!(pixel_at(&data, w, 20, 60), Rgba::WHITE);
}
