//! The style-settings value object shared by every render call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// CSS font style. Oblique is folded into italic; the sign renderer never
/// distinguishes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for FontStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "italic" | "oblique" => Ok(FontStyle::Italic),
            other => Err(format!("unknown font style {other:?}")),
        }
    }
}

/// CSS numeric font weight (100..=900 in the UI, full 1..=1000 accepted).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => return Ok(FontWeight::NORMAL),
            "bold" => return Ok(FontWeight::BOLD),
            _ => {}
        }
        let n: u16 = s.parse().map_err(|_| format!("invalid font weight {s:?}"))?;
        if (1..=1000).contains(&n) {
            Ok(FontWeight(n))
        } else {
            Err(format!("font weight {n} outside 1..=1000"))
        }
    }
}

/// Everything a single render needs, passed by value into the engine.
///
/// `font_size_px` is derived, not user-set: callers refit it (via the text
/// stack) whenever `text`, `font_family`, `font_weight` or `font_style`
/// change. The renderer trusts the value it is handed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub text: String,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub font_color: Color,
    pub bg_color_start: Color,
    pub bg_color_end: Color,
    /// Gradient angle in degrees, [0, 360).
    pub gradient_angle: f32,
    /// Derived: the fitted font size for the current text/font combination.
    pub font_size_px: f32,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            text: "99".to_string(),
            font_family: "Inter".to_string(),
            font_weight: FontWeight::MEDIUM,
            font_style: FontStyle::Normal,
            font_color: Color::rgba(255, 255, 255, 255),
            bg_color_start: Color::rgba(0x31, 0xA9, 0xFF, 255),
            bg_color_end: Color::rgba(0x00, 0x99, 0xFF, 255),
            gradient_angle: 180.0,
            font_size_px: 2800.0,
        }
    }
}

impl StyleSettings {
    /// Copy of these settings with only the text replaced. The batch path
    /// uses this so style fields (including the already-fitted font size)
    /// stay shared across all symbols.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_parses_css_forms() {
        assert_eq!("500".parse::<FontWeight>().unwrap(), FontWeight::MEDIUM);
        assert_eq!("bold".parse::<FontWeight>().unwrap(), FontWeight::BOLD);
        assert!("0".parse::<FontWeight>().is_err());
        assert!("1001".parse::<FontWeight>().is_err());
    }

    #[test]
    fn style_parses_css_forms() {
        assert_eq!("italic".parse::<FontStyle>().unwrap(), FontStyle::Italic);
        assert_eq!("NORMAL".parse::<FontStyle>().unwrap(), FontStyle::Normal);
        assert!("wavy".parse::<FontStyle>().is_err());
    }

    #[test]
    fn with_text_shares_style_fields() {
        let base = StyleSettings::default();
        let derived = base.with_text("P");
        assert_eq!(derived.text, "P");
        assert_eq!(derived.font_size_px, base.font_size_px);
        assert_eq!(derived.bg_color_start, base.bg_color_start);
        assert_eq!(derived.gradient_angle, base.gradient_angle);
    }

    #[test]
    fn settings_roundtrip_through_toml() {
        let base = StyleSettings::default();
        let s = toml::to_string(&base).unwrap();
        let back: StyleSettings = toml::from_str(&s).unwrap();
        assert_eq!(back, base);
    }
}
