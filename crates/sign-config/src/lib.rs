//! Floorsign configuration system.
//!
//! Loads settings from `floorsign.toml` as an alternative to environment
//! variables, plus the named-preset store for style snapshots.

pub mod presets;

pub use presets::PresetStore;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for floorsign.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FloorsignConfig {
    /// Where exported files land.
    pub output: OutputConfig,
    /// Font database sources.
    pub fonts: FontConfig,
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for exported files. Defaults to the working directory.
    pub dir: Option<PathBuf>,
}

/// Font source settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FontConfig {
    /// Extra directory of font files loaded in addition to system fonts.
    pub dir: Option<PathBuf>,
    /// Skip system fonts entirely (useful for reproducible output).
    pub no_system_fonts: bool,
}

impl FloorsignConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Load from `floorsign.toml` in the current directory, or fall back to
    /// defaults if the file doesn't exist.
    pub fn load_or_default() -> Self {
        Self::load_from_file("floorsign.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over file values, allowing
    /// temporary overrides without editing the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(dir) = std::env::var("FLOORSIGN_OUT_DIR") {
            self.output.dir = Some(PathBuf::from(dir));
        }
        if let Ok(dir) = std::env::var("FLOORSIGN_FONT_DIR") {
            self.fonts.dir = Some(PathBuf::from(dir));
        }
        if let Ok(val) = std::env::var("FLOORSIGN_NO_SYSTEM_FONTS") {
            self.fonts.no_system_fonts = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Recommended load path: file (or defaults), then env overrides.
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FloorsignConfig::default();
        assert!(config.output.dir.is_none());
        assert!(config.fonts.dir.is_none());
        assert!(!config.fonts.no_system_fonts);
    }

    #[test]
    fn test_toml_serialization() {
        let config = FloorsignConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: FloorsignConfig = toml::from_str(&toml_str).unwrap();
        assert!(parsed.output.dir.is_none());
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if floorsign.toml doesn't exist
        let config = FloorsignConfig::load_or_default();
        assert!(!config.fonts.no_system_fonts);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("FLOORSIGN_OUT_DIR", "/tmp/signs");
            std::env::set_var("FLOORSIGN_NO_SYSTEM_FONTS", "true");
        }

        let mut config = FloorsignConfig::default();
        config.merge_with_env();

        assert_eq!(config.output.dir.as_deref(), Some(Path::new("/tmp/signs")));
        assert!(config.fonts.no_system_fonts);

        unsafe {
            std::env::remove_var("FLOORSIGN_OUT_DIR");
            std::env::remove_var("FLOORSIGN_NO_SYSTEM_FONTS");
        }
    }
}
