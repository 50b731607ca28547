//! Core value types for txtshade.

mod ramp;

pub use ramp::{GlyphRamp, DEFAULT_RAMP};
