//! Info command implementation.
//!
//! Decodes images and reports source dimensions plus the grid they
//! would render to under the effective settings. Plain lines by
//! default, JSON on request; either way the report goes to stdout.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::config::RenderSettings;
use crate::error::{Result, ShadeError};
use crate::pipeline::{load_luma, target_rows};

/// Inspect images and the grid they would render to
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Image files to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output width in glyph columns
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Vertical compensation factor for tall glyph cells
    #[arg(long)]
    pub aspect: Option<f64>,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

/// Per-file dimension report.
#[derive(Debug, Serialize)]
struct ImageReport {
    path: String,
    source_width: u32,
    source_height: u32,
    grid_width: u32,
    grid_height: u32,
}

fn build_reports(files: &[PathBuf], width: u32, aspect: f64) -> Result<Vec<ImageReport>> {
    let mut reports = Vec::with_capacity(files.len());

    for file in files {
        let grid = load_luma(file)?;
        reports.push(ImageReport {
            path: file.display().to_string(),
            source_width: grid.width(),
            source_height: grid.height(),
            grid_width: width,
            grid_height: target_rows(grid.width(), grid.height(), width, aspect),
        });
    }

    Ok(reports)
}

pub fn run(args: InfoArgs) -> Result<()> {
    let base = RenderSettings::load_or_default(Path::new("."))?;
    let width = args.width.unwrap_or(base.width);
    let aspect = args.aspect.unwrap_or(base.aspect);

    let reports = build_reports(&args.files, width, aspect)?;

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(|e| ShadeError::Config {
            message: format!("Failed to encode report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for report in &reports {
            println!(
                "{}: {}x{} -> {}x{}",
                report.path,
                report.source_width,
                report.source_height,
                report.grid_width,
                report.grid_height
            );
        }
    }

    Ok(())
}
