//! Raster encoding of a rendered target.

use std::str::FromStr;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use sign_render::RenderTarget;

use crate::ExportError;

const JPEG_QUALITY: u8 = 90;

/// Raster output formats for single and batch export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
}

impl RasterFormat {
    pub fn extension(self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
            RasterFormat::Jpeg => "jpeg",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            RasterFormat::Png => "image/png",
            RasterFormat::Jpeg => "image/jpeg",
        }
    }
}

impl FromStr for RasterFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(RasterFormat::Png),
            "jpeg" | "jpg" => Ok(RasterFormat::Jpeg),
            other => Err(format!("unsupported raster format {other:?}")),
        }
    }
}

/// Encode the target's pixels to an in-memory file of the given format.
///
/// JPEG carries no alpha channel; the sign surface is opaque by
/// construction, so alpha is simply dropped.
pub fn encode_target(target: &RenderTarget, format: RasterFormat) -> Result<Vec<u8>, ExportError> {
    let (w, h) = (target.width(), target.height());
    let rgba = target.rgba_bytes();
    let mut out = Vec::new();
    match format {
        RasterFormat::Png => {
            PngEncoder::new(&mut out).write_image(&rgba, w, h, ExtendedColorType::Rgba8)?;
        }
        RasterFormat::Jpeg => {
            let rgb: Vec<u8> = rgba
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY).write_image(
                &rgb,
                w,
                h,
                ExtendedColorType::Rgb8,
            )?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sign_core::StyleSettings;
    use sign_render::render;

    fn rendered_target() -> RenderTarget {
        let mut target = RenderTarget::new();
        render(&StyleSettings::default(), None, &mut target);
        target
    }

    #[test]
    fn png_output_carries_the_png_signature() {
        let bytes = encode_target(&rendered_target(), RasterFormat::Png).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn jpeg_output_carries_the_jfif_marker() {
        let bytes = encode_target(&rendered_target(), RasterFormat::Jpeg).unwrap();
        assert_eq!(&bytes[..2], b"\xFF\xD8");
    }

    #[test]
    fn format_names_parse_loosely() {
        assert_eq!("PNG".parse::<RasterFormat>().unwrap(), RasterFormat::Png);
        assert_eq!("jpg".parse::<RasterFormat>().unwrap(), RasterFormat::Jpeg);
        assert!("webp".parse::<RasterFormat>().is_err());
    }
}
