use std::fmt;

use palette::{FromColor, LinSrgba, Srgba};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Canonical color value: premultiplied RGBA in linear space.
///
/// User input arrives as sRGB (hex strings, named colors, u8 channels) and is
/// converted on construction; [`Color::to_srgba_u8`] converts back for raster
/// output and hex formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Failure to interpret a color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Convenience alias matching the widely used rgba(...) constructor shape.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_srgba_u8([r, g, b, a])
    }

    /// Create from sRGB u8 RGBA channels (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// Convert back to sRGB u8 RGBA channels (unpremultiplied).
    #[inline]
    pub fn to_srgba_u8(&self) -> [u8; 4] {
        // Unpremultiply
        let (r, g, b) = if self.a > 0.0001 {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        } else {
            (0.0, 0.0, 0.0)
        };

        let lin = LinSrgba::new(r, g, b, self.a);
        let srgb: Srgba = Srgba::from_color(lin);

        [
            (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
            (srgb.alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Parse a CSS-style color: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, or a named
    /// color such as `white`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::from_hex_digits(hex)
                .ok_or_else(|| ColorParseError::InvalidHex(trimmed.to_string()));
        }
        match palette::named::from_str(&trimmed.to_ascii_lowercase()) {
            Some(c) => Ok(Self::from_srgba_u8([c.red, c.green, c.blue, 255])),
            None => Err(ColorParseError::UnknownName(trimmed.to_string())),
        }
    }

    fn from_hex_digits(hex: &str) -> Option<Self> {
        let nibble = |b: u8| char::from(b).to_digit(16).map(|d| d as u8);
        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB: each digit doubles
            3 => {
                let mut c = [0u8; 4];
                c[3] = 255;
                for (i, &b) in bytes.iter().enumerate() {
                    let d = nibble(b)?;
                    c[i] = d << 4 | d;
                }
                Some(Self::from_srgba_u8(c))
            }
            6 | 8 => {
                let mut c = [0u8; 4];
                c[3] = 255;
                for (i, pair) in bytes.chunks_exact(2).enumerate() {
                    c[i] = nibble(pair[0])? << 4 | nibble(pair[1])?;
                }
                Some(Self::from_srgba_u8(c))
            }
            _ => None,
        }
    }

    /// Hex representation: `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_srgba_u8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Presets persist colors in the same hex form users type them in.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        for hex in ["#31A9FF", "#0099FF", "#FFFFFF", "#000000", "#7F7F7F"] {
            let c = Color::parse(hex).unwrap();
            assert_eq!(c.to_hex(), hex);
        }
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::parse("#FFFFFF").unwrap());
        assert_eq!(Color::parse("#09f").unwrap(), Color::parse("#0099FF").unwrap());
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(Color::parse("white").unwrap().to_srgba_u8(), [255, 255, 255, 255]);
        assert_eq!(Color::parse("Black").unwrap().to_srgba_u8(), [0, 0, 0, 255]);
        assert_eq!(Color::parse("teal").unwrap().to_srgba_u8(), [0, 128, 128, 255]);
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(matches!(Color::parse("#12345"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Color::parse("#GGHHII"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Color::parse("notacolor"), Err(ColorParseError::UnknownName(_))));
    }

    #[test]
    fn premultiplied_alpha() {
        let c = Color::parse("#FFFFFF80").unwrap();
        assert!(c.a > 0.49 && c.a < 0.52);
        // Premultiplied: channel values carry the alpha factor.
        assert!((c.r - c.a).abs() < 1e-5);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json_like_roundtrip(Color::parse("#31A9FF").unwrap());
        assert_eq!(json, Color::parse("#31A9FF").unwrap());
    }

    fn serde_json_like_roundtrip(c: Color) -> Color {
        // toml is the serializer presets actually use
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            c: Color,
        }
        let s = toml::to_string(&Wrap { c }).unwrap();
        toml::from_str::<Wrap>(&s).unwrap().c
    }
}
