//! sign-text: font resolution, shaping, measurement and size fitting.
//!
//! - face: loaded font faces and their metrics (swash)
//! - shaping: single-line shaping with advance widths (harfrust)
//! - fit: the descending-candidate font-size fit
//! - store: fontdb-backed resolution of (family, weight, style) requests
//!   with sans-serif fallback
//! - catalog: the curated family list offered to users

pub mod catalog;
pub mod face;
pub mod fit;
pub mod shaping;
pub mod store;

pub use catalog::CURATED_FAMILIES;
pub use face::{FontFace, FontMetrics, ScaledFontMetrics};
pub use fit::{FIT_CANDIDATES, MAX_TEXT_WIDTH, TextMeasurer, fit_font_size};
pub use shaping::{GlyphPlacement, ShapedRun, shape_line};
pub use store::FontStore;

use core::fmt;

/// Errors that can occur while loading fonts.
#[derive(Debug)]
pub enum FontError {
    Io(std::io::Error),
    InvalidFont,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io(err) => write!(f, "font I/O error: {err}"),
            FontError::InvalidFont => write!(f, "invalid font data"),
        }
    }
}

impl std::error::Error for FontError {}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err)
    }
}

/// Convenient result alias for font-related operations.
pub type Result<T> = std::result::Result<T, FontError>;
