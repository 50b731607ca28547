//! Image loading and luminance conversion.

use std::path::Path;

use image::GrayImage;

use crate::error::{Result, ShadeError};

/// Decode an image file and convert it to an 8-bit luminance grid.
///
/// Any decode failure (missing file, unreadable file, unsupported
/// format) is fatal for the invocation; no later stage runs.
pub fn load_luma(path: &Path) -> Result<GrayImage> {
    let decoded = image::open(path).map_err(|e| ShadeError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
        help: Some("expected a readable raster image (PNG, JPEG, GIF, BMP, ...)".to_string()),
    })?;

    Ok(decoded.to_luma8())
}
