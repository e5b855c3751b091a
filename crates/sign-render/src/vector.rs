//! Vector sign rendering: a standalone SVG document equivalent to the
//! raster output.
//!
//! The gradient is expressed as a `rotate(angle − 90)` transform on the
//! default left-to-right gradient axis, which matches the endpoint geometry
//! the raster path computes for the same angle.

use sign_core::{StyleSettings, vector_rotation};

use crate::target::SIGN_DIMENSION;

/// Produce the SVG markup for one sign.
///
/// Text and attribute values are XML-escaped, so any sign text yields a
/// well-formed document.
pub fn render_vector(settings: &StyleSettings) -> String {
    let dim = SIGN_DIMENSION;
    let rotation = vector_rotation(settings.gradient_angle);
    format!(
        r##"<svg width="{dim}" height="{dim}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="background-gradient" gradientTransform="rotate({rotation})">
      <stop offset="0%" stop-color="{start}" />
      <stop offset="100%" stop-color="{end}" />
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#background-gradient)" />
  <text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle"
        font-family="{family}" font-size="{size}" font-weight="{weight}" font-style="{style}" fill="{fill}">{text}</text>
</svg>"##,
        start = settings.bg_color_start.to_hex(),
        end = settings.bg_color_end.to_hex(),
        family = xml_escape(&settings.font_family),
        size = settings.font_size_px,
        weight = settings.font_weight,
        style = settings.font_style,
        fill = settings.font_color.to_hex(),
        text = xml_escape(&settings.text),
    )
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
