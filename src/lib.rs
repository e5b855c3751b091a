//! Floorsign: renders styled floor-sign images and exports them one at a
//! time or as a zipped batch over the fixed symbol set.
//!
//! This crate is a thin facade over the workspace members; most users want
//! the re-exports below or the `sign-cli` binary.

pub use sign_config::{FloorsignConfig, PresetStore};
pub use sign_core::{
    Color, FontStyle, FontWeight, GradientAxis, StyleSettings, gradient_endpoints, symbol_set,
};
pub use sign_export::{BatchExporter, ExportArtifact, ExportError, RasterFormat, archive};
pub use sign_render::{RenderTarget, SIGN_DIMENSION, render, render_vector};
pub use sign_text::{FontFace, FontStore, TextMeasurer, fit_font_size};
