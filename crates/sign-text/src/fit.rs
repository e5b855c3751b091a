//! Font-size fitting: the largest candidate size whose rendered width stays
//! inside the canvas text area.

use crate::face::FontFace;
use crate::shaping::shape_line;

/// Candidate sizes tried in order. Deliberately short and coarse; presets
/// and downstream naming depend on these exact values.
pub const FIT_CANDIDATES: [f32; 3] = [2800.0, 2400.0, 2000.0];

/// Maximum rendered text width: 1920px canvas minus 120px total horizontal
/// padding.
pub const MAX_TEXT_WIDTH: f32 = 1800.0;

/// Width measurement seam. The production implementation shapes the line;
/// tests substitute deterministic measurers.
pub trait TextMeasurer {
    /// Advance width of `text` rendered at `size_px`, in pixels.
    fn text_width(&self, text: &str, size_px: f32) -> f32;
}

impl TextMeasurer for FontFace {
    fn text_width(&self, text: &str, size_px: f32) -> f32 {
        shape_line(text, self, size_px).width
    }
}

/// Pick the largest candidate size whose measured width fits `max_width`.
///
/// Greedy single-pass scan over a descending list, not a binary search. If
/// nothing fits, the smallest candidate is returned and the text is allowed
/// to overflow visually; this is never an error. Empty text measures zero
/// and trivially takes the largest candidate.
pub fn fit_font_size(
    measurer: &dyn TextMeasurer,
    text: &str,
    candidates: &[f32],
    max_width: f32,
) -> f32 {
    for &size in candidates {
        if measurer.text_width(text, size) <= max_width {
            return size;
        }
    }
    candidates.last().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Measures width as a fixed fraction of the font size per character.
    struct PerChar(f32);

    impl TextMeasurer for PerChar {
        fn text_width(&self, text: &str, size_px: f32) -> f32 {
            text.chars().count() as f32 * size_px * self.0
        }
    }

    #[test]
    fn largest_wins_when_it_fits() {
        // One character at 60% of em: 2800 * 0.6 = 1680 <= 1800.
        let size = fit_font_size(&PerChar(0.6), "W", &FIT_CANDIDATES, MAX_TEXT_WIDTH);
        assert_eq!(size, 2800.0);
    }

    #[test]
    fn scan_falls_through_to_a_fitting_size() {
        // Two characters at 35% of em: 2800 -> 1960 (too wide), 2400 -> 1680.
        let size = fit_font_size(&PerChar(0.35), "99", &FIT_CANDIDATES, MAX_TEXT_WIDTH);
        assert_eq!(size, 2400.0);
    }

    #[test]
    fn smallest_is_the_overflow_fallback() {
        let size = fit_font_size(&PerChar(0.9), "-99", &FIT_CANDIDATES, MAX_TEXT_WIDTH);
        assert_eq!(size, 2000.0);
    }

    #[test]
    fn empty_text_takes_the_largest_candidate() {
        let size = fit_font_size(&PerChar(0.9), "", &FIT_CANDIDATES, MAX_TEXT_WIDTH);
        assert_eq!(size, 2800.0);
    }

    #[test]
    fn result_is_always_a_member_of_the_candidate_list() {
        for frac in [0.01, 0.3, 0.5, 0.7, 1.5, 10.0] {
            let size = fit_font_size(&PerChar(frac), "42", &FIT_CANDIDATES, MAX_TEXT_WIDTH);
            assert!(FIT_CANDIDATES.contains(&size), "frac {frac}: got {size}");
        }
    }
}
