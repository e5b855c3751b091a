use std::sync::Arc;

use swash::{FontRef, Metrics};

use crate::{FontError, Result};

/// Loaded font face backed by a font file (TTF/OTF).
///
/// Thin wrapper around `swash::FontRef` that owns the underlying bytes and
/// exposes the metrics the sign renderer needs for vertical centering.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            offset,
            key,
            metrics,
        })
    }

    /// Create a font face from bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font face from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Raw font bytes, for libraries that build their own view of the font
    /// (harfrust shaping, swash scaling).
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    /// A transient `FontRef` for swash APIs.
    pub fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            units_per_em,
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }
}

/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Scale metrics to pixel size, where `font_size` is px per em.
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    /// Baseline offset from the em-box center: placing the baseline at
    /// `center_y + half_em_offset()` centers the em box vertically.
    pub fn half_em_offset(&self) -> f32 {
        (self.ascent - self.descent) / 2.0
    }
}
