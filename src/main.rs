//! circle-raster: render the circle demo images.
//!
//! Run: `circle-raster [CX CY R] [--output-dir DIR] [--config demo.yaml] [--preview ascii]`
//!
//! Exactly three positional integers override the circle; any other count
//! keeps the defaults (250, 250, 150). Set `RUST_LOG=debug` for per-step logs.

use anyhow::{Context, Result};
use circle_raster::config::DemoConfig;
use circle_raster::demo;
use circle_raster::output::{TerminalEncoder, TerminalMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Rasterize aliased, anti-aliased, filled and supersampled circles to PNG
#[derive(Parser, Debug)]
#[command(name = "circle-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize circles with integer algorithms and write PNG files", long_about = None)]
struct Cli {
    /// Circle center row, center column and radius
    #[arg(value_name = "CX CY R", allow_negative_numbers = true)]
    circle: Vec<i32>,

    /// Directory to write the PNG files to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a terminal preview of each image
    #[arg(long, value_enum)]
    preview: Option<Preview>,

    /// Preview width in characters
    #[arg(long, default_value = "80")]
    preview_columns: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preview {
    Ascii,
    Color,
}

impl From<Preview> for TerminalMode {
    fn from(p: Preview) -> Self {
        match p {
            Preview::Ascii => TerminalMode::Ascii,
            Preview::Color => TerminalMode::AnsiTrueColor,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DemoConfig::default(),
    };

    if let [cx, cy, r] = cli.circle[..] {
        config = config.with_circle(cx, cy, r);
    } else if !cli.circle.is_empty() {
        log::warn!(
            "expected 3 circle arguments, got {}; using ({}, {}, {})",
            cli.circle.len(),
            config.center_x,
            config.center_y,
            config.radius
        );
    }
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let preview = cli
        .preview
        .map(|mode| TerminalEncoder::new().mode(mode.into()).columns(cli.preview_columns));
    let report = demo::run_with(&config, |name, buf| {
        if let Some(encoder) = &preview {
            println!("{name}:");
            encoder.print(buf);
        }
    })
    .context("invalid demo configuration")?;

    if !report.is_success() {
        for (path, e) in &report.failed {
            eprintln!("encoder error for {}: {e}", path.display());
        }
        std::process::exit(1);
    }

    Ok(())
}
