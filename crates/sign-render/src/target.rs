use tiny_skia::Pixmap;

/// Signs are square and fixed-size; callers never choose dimensions.
pub const SIGN_DIMENSION: u32 = 1920;

/// Reusable raster surface for sign rendering.
///
/// Batch export renders all symbols into one target, clearing (not
/// reallocating) between iterations. The renderer clears the surface itself
/// at the start of every render, so callers never need an external clear.
pub struct RenderTarget {
    pixmap: Pixmap,
}

impl RenderTarget {
    pub fn new() -> Self {
        Self {
            pixmap: Pixmap::new(SIGN_DIMENSION, SIGN_DIMENSION)
                .expect("sign canvas dimensions are non-zero"),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Straight (unpremultiplied) RGBA bytes, row-major, for encoders.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self::new()
    }
}
