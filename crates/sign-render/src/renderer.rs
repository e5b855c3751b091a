//! Raster sign rendering: gradient background plus centered text.

use sign_core::{Color, StyleSettings, gradient_endpoints};
use sign_text::{FontFace, shape_line};
use tiny_skia::{GradientStop, LinearGradient, Paint, Point, Rect, SpreadMode, Transform};

use crate::target::RenderTarget;

/// Draw one sign into `target`.
///
/// The target is cleared first, then the full surface is painted with the
/// two-stop gradient, then `text` is composited centered both ways. An empty
/// text or an absent face yields a background-only sign; that degradation is
/// the caller's font-resolution concern, never a render failure.
pub fn render(settings: &StyleSettings, face: Option<&FontFace>, target: &mut RenderTarget) {
    target.clear();
    paint_background(settings, target);

    if settings.text.is_empty() {
        return;
    }
    let Some(face) = face else {
        log::warn!(
            "no usable font face for {:?}; rendering background only",
            settings.text
        );
        return;
    };
    draw_centered_text(settings, face, target);
}

fn paint_background(settings: &StyleSettings, target: &mut RenderTarget) {
    let w = target.width() as f32;
    let h = target.height() as f32;
    let axis = gradient_endpoints(settings.gradient_angle, w, h);

    let mut paint = Paint::default();
    let shader = LinearGradient::new(
        Point::from_xy(axis.x1, axis.y1),
        Point::from_xy(axis.x2, axis.y2),
        vec![
            GradientStop::new(0.0, to_skia(settings.bg_color_start)),
            GradientStop::new(1.0, to_skia(settings.bg_color_end)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    );
    match shader {
        Some(shader) => paint.shader = shader,
        // A degenerate axis cannot occur for this geometry (the endpoint
        // distance always equals the canvas width); keep a solid fill
        // instead of unwrapping anyway.
        None => paint.set_color(to_skia(settings.bg_color_start)),
    }

    let rect = Rect::from_xywh(0.0, 0.0, w, h).expect("canvas rect is non-degenerate");
    target
        .pixmap_mut()
        .as_mut()
        .fill_rect(rect, &paint, Transform::identity(), None);
}

fn draw_centered_text(settings: &StyleSettings, face: &FontFace, target: &mut RenderTarget) {
    use swash::scale::image::Content;
    use swash::scale::{Render, ScaleContext, Source, StrikeWith};

    let w = target.width() as f32;
    let h = target.height() as f32;
    let size = settings.font_size_px.max(1.0);

    let run = shape_line(&settings.text, face, size);
    let metrics = face.scaled_metrics(size);
    // Center the advance width horizontally; drop the baseline below the
    // canvas midline so the em box sits vertically centered.
    let origin_x = (w - run.width) / 2.0;
    let baseline_y = h / 2.0 + metrics.half_em_offset();
    let color = settings.font_color.to_srgba_u8();

    let mut ctx = ScaleContext::new();
    let mut scaler = ctx.builder(face.as_swash_ref()).size(size).hint(true).build();
    let renderer = Render::new(&[
        // Prefer scalable outlines; fall back to embedded bitmaps.
        Source::Outline,
        Source::Bitmap(StrikeWith::BestFit),
        Source::ColorBitmap(StrikeWith::BestFit),
    ]);

    for (gid, pos) in run.glyphs.iter().zip(run.positions.iter()) {
        let Some(img) = renderer.render(&mut scaler, *gid) else {
            continue;
        };
        let gw = img.placement.width as usize;
        let gh = img.placement.height as usize;
        if gw == 0 || gh == 0 {
            continue;
        }

        // Reduce whatever the scaler produced to an 8-bit coverage mask.
        let coverage: Vec<u8> = match img.content {
            Content::Mask => img.data,
            // Per-channel masks: the green channel is the center sample.
            Content::SubpixelMask => img.data.chunks_exact(4).map(|px| px[1]).collect(),
            // Color glyphs are tinted like everything else; coverage comes
            // from their alpha channel.
            Content::Color => img.data.chunks_exact(4).map(|px| px[3]).collect(),
        };

        let gx = origin_x + pos.x_offset + img.placement.left as f32;
        let gy = baseline_y + pos.y_offset - img.placement.top as f32;
        blend_mask(
            target,
            gx.round() as i32,
            gy.round() as i32,
            gw,
            gh,
            &coverage,
            color,
        );
    }
}

/// Composite a glyph coverage mask over the premultiplied pixmap bytes in
/// the text color. Pixels outside the canvas are clipped.
fn blend_mask(
    target: &mut RenderTarget,
    left: i32,
    top: i32,
    mask_w: usize,
    mask_h: usize,
    coverage: &[u8],
    color: [u8; 4],
) {
    let tw = target.width() as i32;
    let th = target.height() as i32;
    let data = target.pixmap_mut().data_mut();

    for row in 0..mask_h {
        let y = top + row as i32;
        if y < 0 || y >= th {
            continue;
        }
        for col in 0..mask_w {
            let x = left + col as i32;
            if x < 0 || x >= tw {
                continue;
            }
            let cov = coverage[row * mask_w + col] as u32;
            if cov == 0 {
                continue;
            }
            // Effective source alpha folds text-color alpha into coverage.
            let a = cov * color[3] as u32 / 255;
            let inv = 255 - a;
            let i = ((y * tw + x) * 4) as usize;
            data[i] = ((color[0] as u32 * a + data[i] as u32 * inv) / 255) as u8;
            data[i + 1] = ((color[1] as u32 * a + data[i + 1] as u32 * inv) / 255) as u8;
            data[i + 2] = ((color[2] as u32 * a + data[i + 2] as u32 * inv) / 255) as u8;
            data[i + 3] = (a + data[i + 3] as u32 * inv / 255) as u8;
        }
    }
}

fn to_skia(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter() -> StyleSettings {
        StyleSettings::default()
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut first = RenderTarget::new();
        let mut second = RenderTarget::new();
        let settings = starter();
        render(&settings, None, &mut first);
        render(&settings, None, &mut second);
        assert_eq!(first.pixmap().data(), second.pixmap().data());
    }

    #[test]
    fn rerender_into_a_dirty_target_matches_a_fresh_one() {
        let settings = starter();
        let mut fresh = RenderTarget::new();
        render(&settings, None, &mut fresh);

        let mut reused = RenderTarget::new();
        render(&settings.with_text("-7"), None, &mut reused);
        render(&settings, None, &mut reused);
        assert_eq!(fresh.pixmap().data(), reused.pixmap().data());
    }

    #[test]
    fn angle_180_paints_start_color_on_the_right() {
        let mut target = RenderTarget::new();
        let mut settings = starter();
        settings.text.clear();
        render(&settings, None, &mut target);

        let start = settings.bg_color_start.to_srgba_u8();
        let end = settings.bg_color_end.to_srgba_u8();
        let right = pixel(&target, 1919, 960);
        let left = pixel(&target, 0, 960);
        for ch in 0..3 {
            assert!((right[ch] as i32 - start[ch] as i32).abs() <= 2, "right {right:?}");
            assert!((left[ch] as i32 - end[ch] as i32).abs() <= 2, "left {left:?}");
        }
        assert_eq!(right[3], 255);
        assert_eq!(left[3], 255);
    }

    #[test]
    fn background_is_fully_opaque() {
        let mut target = RenderTarget::new();
        let mut settings = starter();
        settings.text.clear();
        render(&settings, None, &mut target);
        assert!(target.pixmap().data().chunks_exact(4).all(|px| px[3] == 255));
    }

    fn pixel(target: &RenderTarget, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * target.width() + x) * 4) as usize;
        let d = target.pixmap().data();
        [d[i], d[i + 1], d[i + 2], d[i + 3]]
    }
}
