//! Contrast equalization and edge emphasis.
//!
//! The small glyph ramp clips low-contrast images into one or two
//! buckets; equalizing the histogram first spreads the usable range.
//! Detected edges are then forced to minimum luminance so outlines
//! render as the darkest glyph on top of the tonal shading.

use image::GrayImage;
use imageproc::contrast::equalize_histogram;
use imageproc::edges::canny;

use crate::error::{Result, ShadeError};

/// Equalize the grid's histogram, then darken its edges.
///
/// The edge mask comes from a Canny detector run on the equalized grid
/// with two gradient thresholds; every masked position is forced to 0.
/// Equalization is not idempotent, so callers apply this exactly once
/// per grid.
pub fn enhance(grid: &GrayImage, edge_low: f32, edge_high: f32) -> Result<GrayImage> {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return Err(ShadeError::InvalidDimension {
            message: format!("cannot enhance an empty grid ({}x{})", width, height),
            help: None,
        });
    }

    let mut equalized = equalize_histogram(grid);
    let edges = canny(&equalized, edge_low, edge_high);

    for (pixel, edge) in equalized.pixels_mut().zip(edges.pixels()) {
        if edge.0[0] > 0 {
            pixel.0[0] = 0;
        }
    }

    Ok(equalized)
}
