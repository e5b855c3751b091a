//! sign-core: leaf value types for floorsign.
//!
//! Colors, gradient geometry, the style-settings value object and the fixed
//! export symbol set. No I/O lives here.

pub mod color;
pub mod geometry;
pub mod style;
pub mod symbols;

pub use color::{Color, ColorParseError};
pub use geometry::{GradientAxis, gradient_endpoints, vector_rotation};
pub use style::{FontStyle, FontWeight, StyleSettings};
pub use symbols::{MARKER_SYMBOLS, SYMBOL_COUNT, symbol_set};
