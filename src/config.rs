//! Render settings and txtshade.yaml configuration.
//!
//! Settings resolve in three layers: built-in defaults, then a
//! `txtshade.yaml` in the working directory when present, then CLI
//! flags on top.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShadeError};
use crate::types::{GlyphRamp, DEFAULT_RAMP};

/// Settings file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "txtshade.yaml";

/// Pipeline settings for one render run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in glyph columns.
    pub width: u32,

    /// Vertical compensation for tall terminal glyph cells.
    pub aspect: f64,

    /// Ordered glyph ramp, darkest first.
    pub ramp: String,

    /// Reverse the ramp, for light-on-dark terminals.
    pub invert: bool,

    /// Equalize contrast and darken detected edges before mapping.
    pub enhance: bool,

    /// Low gradient threshold for edge detection.
    pub edge_low: f32,

    /// High gradient threshold for edge detection.
    pub edge_high: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 80,
            aspect: 0.45,
            ramp: DEFAULT_RAMP.to_string(),
            invert: false,
            enhance: false,
            edge_low: 80.0,
            edge_high: 160.0,
        }
    }
}

impl RenderSettings {
    /// Load settings from a txtshade.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ShadeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ShadeError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load settings from `dir/txtshade.yaml`, falling back to defaults
    /// when no file exists.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the effective glyph ramp, applying inversion.
    pub fn glyph_ramp(&self) -> Result<GlyphRamp> {
        let ramp = GlyphRamp::new(&self.ramp)?;
        if self.invert {
            Ok(ramp.inverted())
        } else {
            Ok(ramp)
        }
    }
}
