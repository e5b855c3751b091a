//! sign-render: draws one sign at a time.
//!
//! A sign is a two-stop linear-gradient background with a single centered
//! text run on top. The raster path composites shaped glyph coverage masks
//! onto a reusable pixmap; the vector path emits an equivalent standalone
//! SVG document.

pub mod renderer;
pub mod target;
pub mod vector;

pub use renderer::render;
pub use target::{RenderTarget, SIGN_DIMENSION};
pub use vector::render_vector;
