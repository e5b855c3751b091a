//! Font readiness: resolve (family, weight, style) requests against the
//! local font database, with caching and a sans-serif fallback.
//!
//! Resolution is never fatal. A missing family degrades to the generic
//! sans-serif face; only an empty database yields no face at all, and even
//! then rendering proceeds without text rather than failing the export.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use sign_core::{FontStyle, FontWeight};

use crate::face::FontFace;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FaceKey {
    family: String,
    weight: u16,
    italic: bool,
}

/// Database-backed font resolver with a per-request cache.
pub struct FontStore {
    db: Database,
    cache: HashMap<FaceKey, Arc<FontFace>>,
}

impl FontStore {
    /// Store over the fonts installed on this system.
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        Self {
            db,
            cache: HashMap::new(),
        }
    }

    /// Store with no fonts loaded. Every request degrades; renders come out
    /// background-only.
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
            cache: HashMap::new(),
        }
    }

    /// Add every font found under `dir` to the database.
    pub fn load_fonts_dir(&mut self, dir: impl AsRef<Path>) {
        self.db.load_fonts_dir(dir);
    }

    /// Add a single in-memory font to the database.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Number of faces currently known to the database.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Make the requested face ready for measurement and drawing.
    ///
    /// Tries the named family with the given weight/style first, then the
    /// generic sans-serif family. Failures are logged and absorbed; `None`
    /// means the database has nothing usable and the caller should render
    /// without text.
    pub fn ensure_ready(
        &mut self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
    ) -> Option<Arc<FontFace>> {
        let key = FaceKey {
            family: family.to_string(),
            weight: weight.0,
            italic: style == FontStyle::Italic,
        };
        if let Some(face) = self.cache.get(&key) {
            return Some(face.clone());
        }

        let query_style = match style {
            FontStyle::Normal => Style::Normal,
            FontStyle::Italic => Style::Italic,
        };

        let face = self
            .resolve(
                &[Family::Name(family), Family::SansSerif],
                Weight(weight.0),
                query_style,
            )
            .or_else(|| {
                log::warn!("family {family:?} ({weight}, {style}) unavailable; using sans-serif");
                self.resolve(&[Family::SansSerif], Weight::NORMAL, Style::Normal)
            })?;

        let face = Arc::new(face);
        self.cache.insert(key, face.clone());
        Some(face)
    }

    fn resolve(&self, families: &[Family], weight: Weight, style: Style) -> Option<FontFace> {
        let id = self.db.query(&Query {
            families,
            weight,
            stretch: Stretch::Normal,
            style,
            ..Query::default()
        })?;
        match self.load_face(id) {
            Ok(face) => Some(face),
            Err(err) => {
                log::warn!("failed to load face {id:?}: {err}");
                None
            }
        }
    }

    fn load_face(&self, id: fontdb::ID) -> crate::Result<FontFace> {
        let face = self.db.face(id).ok_or(crate::FontError::InvalidFont)?;
        let bytes: Vec<u8> = match &face.source {
            Source::File(path) => std::fs::read(path)?,
            Source::Binary(data) => data.as_ref().as_ref().to_vec(),
            Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
        };
        FontFace::from_vec(bytes, face.index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_degrades_to_none() {
        let mut store = FontStore::empty();
        assert!(
            store
                .ensure_ready("Inter", FontWeight::MEDIUM, FontStyle::Normal)
                .is_none()
        );
    }

    #[test]
    fn unknown_family_falls_back_when_anything_is_installed() {
        let mut store = FontStore::system();
        if store.face_count() == 0 {
            return; // nothing installed; degradation covered above
        }
        let face = store.ensure_ready(
            "definitely-not-a-real-family",
            FontWeight::NORMAL,
            FontStyle::Normal,
        );
        assert!(face.is_some());
    }

    #[test]
    fn repeated_requests_hit_the_cache() {
        let mut store = FontStore::system();
        if store.face_count() == 0 {
            return;
        }
        let first = store.ensure_ready("Inter", FontWeight::MEDIUM, FontStyle::Normal);
        let second = store.ensure_ready("Inter", FontWeight::MEDIUM, FontStyle::Normal);
        match (first, second) {
            (Some(a), Some(b)) => assert!(Arc::ptr_eq(&a, &b)),
            _ => panic!("system store with faces should resolve"),
        }
    }
}
