//! Sequential batch export over the symbol set.

use sign_core::StyleSettings;
use sign_render::{RenderTarget, render};
use sign_text::FontStore;

use crate::artifact::{ExportArtifact, batch_file_name};
use crate::encode::{RasterFormat, encode_target};
use crate::ExportError;

/// Renders every symbol with shared style settings into one reusable
/// offscreen target, encoding each to PNG as it completes.
///
/// Strictly sequential: one symbol is fully rendered and encoded before the
/// next begins, so the target never has two logical renders in flight. There
/// is no cancellation and no per-item retry.
pub struct BatchExporter {
    target: RenderTarget,
}

impl BatchExporter {
    pub fn new() -> Self {
        Self {
            target: RenderTarget::new(),
        }
    }

    /// Export one artifact per symbol, in symbol order.
    ///
    /// Only `text` varies between items; every other style field, including
    /// the already-fitted `font_size_px`, is shared. The size is deliberately
    /// not refit per symbol: one fit per batch keeps the whole set visually
    /// consistent and skips a measurement pass per item.
    ///
    /// A font that fails to resolve degrades the affected items (background
    /// only, logged) without aborting the batch. An encoding failure aborts
    /// and propagates. `on_progress(completed, total)` fires synchronously
    /// after every item.
    pub fn export_all(
        &mut self,
        settings: &StyleSettings,
        store: &mut FontStore,
        symbols: &[String],
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<Vec<ExportArtifact>, ExportError> {
        let total = symbols.len();
        let mut artifacts = Vec::with_capacity(total);

        for (index, symbol) in symbols.iter().enumerate() {
            let item = settings.with_text(symbol.clone());
            let face = store.ensure_ready(&item.font_family, item.font_weight, item.font_style);
            render(&item, face.as_deref(), &mut self.target);

            let bytes = encode_target(&self.target, RasterFormat::Png)?;
            artifacts.push(ExportArtifact::new(
                batch_file_name(symbol),
                RasterFormat::Png.mime(),
                bytes,
            ));
            on_progress(index + 1, total);
        }

        Ok(artifacts)
    }
}

impl Default for BatchExporter {
    fn default() -> Self {
        Self::new()
    }
}
