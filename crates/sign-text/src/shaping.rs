//! Single-line shaping built on harfrust (pure-Rust HarfBuzz port).
//!
//! Signs are short single-direction runs, so this stays deliberately small:
//! one font, one line, left-to-right. Kerning and ligatures come through
//! HarfBuzz semantics.

use harfrust::{
    Direction as HbDirection, FontRef as HbFontRef, ShaperData, ShaperInstance,
    UnicodeBuffer as HbUnicodeBuffer,
};
use swash::GlyphId;

use crate::face::FontFace;

/// Offset of a glyph relative to the run origin, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphPlacement {
    pub x_offset: f32,
    pub y_offset: f32,
}

/// A shaped line: positioned glyph ids plus the total advance width.
#[derive(Clone, Debug, Default)]
pub struct ShapedRun {
    pub font_size: f32,
    pub glyphs: Vec<GlyphId>,
    pub positions: Vec<GlyphPlacement>,
    pub advances: Vec<f32>,
    /// Total advance width of the run in pixels.
    pub width: f32,
}

/// Shape a UTF-8 string as one left-to-right line at the given pixel size.
pub fn shape_line(text: &str, face: &FontFace, font_size: f32) -> ShapedRun {
    if text.is_empty() {
        return ShapedRun {
            font_size,
            ..ShapedRun::default()
        };
    }

    let font_data = face.as_bytes();
    let font_ref = HbFontRef::from_index(&font_data, 0).expect("valid font data for harfrust");

    // Shaper configuration with default (no variations) instance.
    let data = ShaperData::new(&font_ref);
    let instance =
        ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
    let shaper = data
        .shaper(&font_ref)
        .instance(Some(&instance))
        .point_size(None)
        .build();

    let mut buffer = HbUnicodeBuffer::new();
    buffer.push_str(text);
    buffer.set_direction(HbDirection::LeftToRight);
    // Fill in script/language from the text itself.
    buffer.guess_segment_properties();

    let glyph_buffer = shaper.shape(buffer, &[]);
    let infos = glyph_buffer.glyph_infos();
    let positions = glyph_buffer.glyph_positions();

    // harfrust reports design units; convert to pixels via units-per-em.
    let metrics = face.metrics();
    let scale = if metrics.units_per_em != 0 {
        font_size / metrics.units_per_em as f32
    } else {
        1.0
    };

    let mut glyphs = Vec::with_capacity(infos.len());
    let mut placements = Vec::with_capacity(infos.len());
    let mut advances = Vec::with_capacity(infos.len());

    let mut pen_x: f32 = 0.0;
    for (info, pos) in infos.iter().zip(positions.iter()) {
        let x_advance = pos.x_advance as f32 * scale;
        let x_offset = pos.x_offset as f32 * scale;
        let y_offset = -(pos.y_offset as f32) * scale;

        glyphs.push(info.glyph_id as GlyphId);
        placements.push(GlyphPlacement {
            x_offset: pen_x + x_offset,
            y_offset,
        });
        advances.push(x_advance);

        pen_x += x_advance;
    }

    ShapedRun {
        font_size,
        glyphs,
        positions: placements,
        advances,
        width: pen_x,
    }
}
