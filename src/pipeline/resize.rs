//! Aspect-corrected downsampling.
//!
//! Terminal glyph cells are taller than they are wide, so a straight
//! resize to `columns` would render vertically stretched. The aspect
//! factor scales the row count down to compensate.

use image::imageops::{self, FilterType};
use image::GrayImage;

use crate::error::{Result, ShadeError};

/// Compute the target row count for `columns` output columns.
///
/// `rows = trunc(columns * (src_height / src_width) * aspect)`, clamped
/// to at least 1 so a very wide source still renders one line.
pub fn target_rows(src_width: u32, src_height: u32, columns: u32, aspect: f64) -> u32 {
    let rows = (columns as f64 * (src_height as f64 / src_width as f64) * aspect) as u32;
    rows.max(1)
}

/// Resample a luminance grid to `columns` output columns.
///
/// Downsampling uses a smooth Catmull-Rom filter to avoid aliasing on
/// the small target grid. When the target dimensions already equal the
/// source, the grid passes through untouched.
pub fn resize_to_columns(grid: &GrayImage, columns: u32, aspect: f64) -> Result<GrayImage> {
    if columns == 0 {
        return Err(ShadeError::InvalidDimension {
            message: "output width must be positive".to_string(),
            help: Some("pass a width of 1 or more".to_string()),
        });
    }

    if !(aspect > 0.0) {
        return Err(ShadeError::InvalidDimension {
            message: format!("aspect factor must be positive, got {}", aspect),
            help: Some("typical terminal fonts need a factor around 0.45".to_string()),
        });
    }

    let (src_width, src_height) = grid.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(ShadeError::InvalidDimension {
            message: format!("source grid is empty ({}x{})", src_width, src_height),
            help: None,
        });
    }

    let rows = target_rows(src_width, src_height, columns, aspect);
    if src_width == columns && src_height == rows {
        return Ok(grid.clone());
    }

    Ok(imageops::resize(grid, columns, rows, FilterType::CatmullRom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn test_target_rows_square_source() {
        // 70 * (100/100) * 0.45 = 31.5, truncated
        assert_eq!(target_rows(100, 100, 70, 0.45), 31);
    }

    #[test]
    fn test_target_rows_clamped_to_one() {
        // Very wide source: 10 * (1/100) * 0.45 rounds down to 0
        assert_eq!(target_rows(100, 1, 10, 0.45), 1);
    }

    #[test]
    fn test_resize_output_has_requested_columns() {
        for (w, h) in [(100, 100), (640, 480), (3, 200)] {
            let resized = resize_to_columns(&uniform(w, h, 90), 70, 0.45).unwrap();
            assert_eq!(resized.width(), 70);
            assert!(resized.height() >= 1);
        }
    }

    #[test]
    fn test_resize_identity_when_dimensions_match() {
        let mut grid = uniform(2, 2, 0);
        grid.put_pixel(1, 0, Luma([255]));
        grid.put_pixel(0, 1, Luma([255]));

        let resized = resize_to_columns(&grid, 2, 1.0).unwrap();
        assert_eq!(resized, grid);
    }

    #[test]
    fn test_resize_zero_width_rejected() {
        let err = resize_to_columns(&uniform(10, 10, 0), 0, 0.45).unwrap_err();
        assert!(matches!(err, ShadeError::InvalidDimension { .. }));
    }

    #[test]
    fn test_resize_nonpositive_aspect_rejected() {
        let err = resize_to_columns(&uniform(10, 10, 0), 10, 0.0).unwrap_err();
        assert!(matches!(err, ShadeError::InvalidDimension { .. }));
    }

    #[test]
    fn test_resize_empty_source_rejected() {
        let err = resize_to_columns(&GrayImage::new(0, 0), 10, 0.45).unwrap_err();
        assert!(matches!(err, ShadeError::InvalidDimension { .. }));
    }

    #[test]
    fn test_resize_preserves_uniform_value() {
        let resized = resize_to_columns(&uniform(100, 100, 128), 70, 0.45).unwrap();
        assert_eq!(resized.dimensions(), (70, 31));
        // Normalized filter weights keep a flat field flat, up to rounding
        assert!(resized.pixels().all(|p| (127..=129).contains(&p.0[0])));
    }
}
