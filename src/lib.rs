//! txtshade - raster images as shaded text art
//!
//! A library and CLI for rendering raster images as lines of glyphs:
//! decode to luminance, downsample with character-aspect correction,
//! optionally equalize contrast and darken detected edges, then map
//! each sample onto an ordered glyph ramp.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use config::{RenderSettings, CONFIG_FILENAME};
pub use error::{Result, ShadeError};
pub use pipeline::{enhance, load_luma, render_image, resize_to_columns, target_rows};
pub use render::{render_text, TextArt};
pub use types::{GlyphRamp, DEFAULT_RAMP};
