//! Text rendering - maps luminance grids onto glyph ramps.

mod text;

pub use text::{render_text, TextArt};
