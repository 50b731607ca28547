//! Glyph mapping and text-art assembly.

use std::fmt;

use image::GrayImage;

use crate::types::GlyphRamp;

/// Rendered text art - one fixed-width row string per grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArt {
    rows: Vec<String>,
    width: usize,
}

impl TextArt {
    /// The rendered rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Width in glyphs.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for TextArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Map every luminance sample onto the ramp, one row string per grid row.
///
/// Single forward pass; each row string is built with its final capacity
/// reserved up front.
pub fn render_text(grid: &GrayImage, ramp: &GlyphRamp) -> TextArt {
    let width = grid.width() as usize;
    let mut rows = Vec::with_capacity(grid.height() as usize);

    for y in 0..grid.height() {
        let mut line = String::with_capacity(width);
        for x in 0..grid.width() {
            line.push(ramp.glyph(grid.get_pixel(x, y).0[0]));
        }
        rows.push(line);
    }

    TextArt { rows, width }
}
