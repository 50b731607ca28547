//! Glyph ramp type and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShadeError};

/// Default ramp: ten glyphs, darkest-appearing first, blank last.
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// An ordered, immutable sequence of glyphs, darkest-appearing first.
///
/// The ramp defines the quantization buckets for luminance samples:
/// index = `v * (buckets - 1) / 255` in integer arithmetic, so 0 always
/// maps to the first glyph and 255 to the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from an ordered glyph string.
    ///
    /// Fails with `InvalidRamp` when fewer than two glyphs are given;
    /// a single bucket cannot express any tonal range.
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(ShadeError::InvalidRamp {
                message: format!("ramp has {} glyph(s), need at least 2", glyphs.len()),
                help: Some(format!("the default ramp is \"{}\"", DEFAULT_RAMP)),
            });
        }
        Ok(Self { glyphs })
    }

    /// Number of quantization buckets.
    pub fn buckets(&self) -> usize {
        self.glyphs.len()
    }

    /// Map a luminance sample to its glyph.
    ///
    /// Non-decreasing in `luma`: brighter samples never map to an
    /// earlier (darker) glyph.
    pub fn glyph(&self, luma: u8) -> char {
        let index = luma as usize * (self.glyphs.len() - 1) / 255;
        self.glyphs[index]
    }

    /// A reversed copy of this ramp, for light-on-dark terminals.
    pub fn inverted(&self) -> Self {
        Self {
            glyphs: self.glyphs.iter().rev().copied().collect(),
        }
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl FromStr for GlyphRamp {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_mapping() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.buckets(), 10);
        assert_eq!(ramp.glyph(0), '@');
        assert_eq!(ramp.glyph(255), ' ');
        // 128 * 9 / 255 = 4
        assert_eq!(ramp.glyph(128), '+');
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let ramp = GlyphRamp::default();
        let index_of = |c: char| DEFAULT_RAMP.chars().position(|g| g == c).unwrap();

        let mut previous = index_of(ramp.glyph(0));
        for v in 1..=255u8 {
            let current = index_of(ramp.glyph(v));
            assert!(
                current >= previous,
                "glyph index decreased between {} and {}",
                v - 1,
                v
            );
            previous = current;
        }
    }

    #[test]
    fn test_two_glyph_ramp() {
        let ramp = GlyphRamp::new("# ").unwrap();
        assert_eq!(ramp.glyph(0), '#');
        assert_eq!(ramp.glyph(254), '#');
        assert_eq!(ramp.glyph(255), ' ');
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(GlyphRamp::new("").is_err());
    }

    #[test]
    fn test_single_glyph_ramp_rejected() {
        let err = GlyphRamp::new("@").unwrap_err();
        assert!(matches!(err, ShadeError::InvalidRamp { .. }));
    }

    #[test]
    fn test_inverted_reverses_order() {
        let ramp = GlyphRamp::default().inverted();
        assert_eq!(ramp.glyph(0), ' ');
        assert_eq!(ramp.glyph(255), '@');
    }

    #[test]
    fn test_from_str_and_display_round_trip() {
        let ramp: GlyphRamp = "@%#*+=-:. ".parse().unwrap();
        assert_eq!(ramp.to_string(), DEFAULT_RAMP);
    }
}
