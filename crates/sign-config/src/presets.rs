//! Named style presets persisted as TOML.
//!
//! A preset is a full [`StyleSettings`] snapshot keyed by a user-chosen
//! name. The store persists eagerly on every mutation so a crash never
//! loses a saved preset.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sign_core::StyleSettings;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PresetFile {
    presets: BTreeMap<String, StyleSettings>,
}

/// On-disk preset store keyed by preset name.
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    file: PresetFile,
}

impl PresetStore {
    /// Open a store backed by `path`, loading existing presets if the file
    /// parses. A missing or malformed file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, file }
    }

    /// Saved preset names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.file.presets.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&StyleSettings> {
        self.file.presets.get(name)
    }

    /// Insert or replace a preset and persist the store.
    pub fn save(&mut self, name: impl Into<String>, settings: StyleSettings) -> Result<(), String> {
        self.file.presets.insert(name.into(), settings);
        self.persist()
    }

    /// Remove a preset and persist the store. Returns whether it existed.
    pub fn delete(&mut self, name: &str) -> Result<bool, String> {
        let existed = self.file.presets.remove(name).is_some();
        if existed {
            self.persist()?;
        }
        Ok(existed)
    }

    fn persist(&self) -> Result<(), String> {
        let content = toml::to_string_pretty(&self.file)
            .map_err(|e| format!("Failed to serialize presets: {e}"))?;
        std::fs::write(&self.path, content).map_err(|e| format!("Failed to write presets: {e}"))
    }
}
