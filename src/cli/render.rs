//! Render command implementation.
//!
//! Runs the image → text pipeline for each input file and emits the
//! art to stdout, or to `.txt` files when an output directory is given.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::RenderSettings;
use crate::error::{Result, ShadeError};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::render_image;

/// Render images to text art
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input image files to render
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output width in glyph columns
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Vertical compensation factor for tall glyph cells
    #[arg(long)]
    pub aspect: Option<f64>,

    /// Ordered glyph ramp, darkest first
    #[arg(long)]
    pub ramp: Option<String>,

    /// Reverse the ramp (light-on-dark terminals)
    #[arg(long)]
    pub invert: bool,

    /// Equalize contrast and darken detected edges
    #[arg(long, short)]
    pub enhance: bool,

    /// Low gradient threshold for edge detection
    #[arg(long)]
    pub edge_low: Option<f32>,

    /// High gradient threshold for edge detection
    #[arg(long)]
    pub edge_high: Option<f32>,

    /// Write <name>.txt files to this directory instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Apply flag overrides on top of base settings.
    fn settings(&self, base: RenderSettings) -> RenderSettings {
        let mut settings = base;

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(aspect) = self.aspect {
            settings.aspect = aspect;
        }
        if let Some(ramp) = &self.ramp {
            settings.ramp = ramp.clone();
        }
        if let Some(edge_low) = self.edge_low {
            settings.edge_low = edge_low;
        }
        if let Some(edge_high) = self.edge_high {
            settings.edge_high = edge_high;
        }
        if self.invert {
            settings.invert = true;
        }
        if self.enhance {
            settings.enhance = true;
        }

        settings
    }
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let base = RenderSettings::load_or_default(Path::new("."))?;
    let settings = args.settings(base);

    if let Some(dir) = &args.output {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    for file in &args.files {
        let art = render_image(file, &settings)?;

        printer.status(
            "Rendering",
            &format!("{} ({}x{})", display_path(file), art.width(), art.height()),
        );

        match &args.output {
            Some(dir) => {
                let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("art");
                let out_path = dir.join(format!("{}.txt", stem));
                fs::write(&out_path, format!("{}\n", art)).map_err(|e| ShadeError::Io {
                    path: out_path.clone(),
                    message: format!("Failed to write text art: {}", e),
                })?;
            }
            None => println!("{}", art),
        }
    }

    if let Some(dir) = &args.output {
        printer.success(
            "Rendered",
            &format!(
                "{} to {}",
                plural(args.files.len(), "image", "images"),
                display_path(dir)
            ),
        );
    }

    Ok(())
}
