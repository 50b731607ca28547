//! The image → text pipeline.
//!
//! Stages run strictly in order: load, resize, optional enhance, map.
//! The whole run is one pure function from a path and settings to text
//! art or an error; nothing is shared across invocations and any stage
//! failure aborts the run before output is produced.

mod enhance;
mod loader;
mod resize;

pub use enhance::enhance;
pub use loader::load_luma;
pub use resize::{resize_to_columns, target_rows};

use std::path::Path;

use crate::config::RenderSettings;
use crate::error::Result;
use crate::render::{render_text, TextArt};

/// Run the full pipeline for one image file.
pub fn render_image(path: &Path, settings: &RenderSettings) -> Result<TextArt> {
    let ramp = settings.glyph_ramp()?;

    let grid = load_luma(path)?;
    let grid = resize_to_columns(&grid, settings.width, settings.aspect)?;
    let grid = if settings.enhance {
        enhance(&grid, settings.edge_low, settings.edge_high)?
    } else {
        grid
    };

    Ok(render_text(&grid, &ramp))
}
