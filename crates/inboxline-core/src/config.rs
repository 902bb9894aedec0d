//! Section configuration.
//!
//! These are user settings read once per rebuild; the index keeps a copy of
//! the values it was built with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Settings that shape the section table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Group conversations under recency headers. When off, the list has no
    /// header rows at all.
    #[serde(default = "default_true")]
    pub show_categories: bool,

    /// Show the promotional card above the first section.
    #[serde(default)]
    pub show_promo: bool,

    /// Keep the last open section even when it is empty, so an empty list
    /// still shows one header.
    #[serde(default)]
    pub legacy_trailing_section: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            show_categories: true,
            show_promo: false,
            legacy_trailing_section: false,
        }
    }
}

impl SectionConfig {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        tracing::debug!(?config, "Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Save settings as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
