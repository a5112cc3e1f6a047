use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "bone-shard-helper.json";

/// A highlight color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const GREEN: Rgba = Rgba {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};

/// User-facing settings, stored as one JSON document. Every field has a
/// default so old settings files keep loading as new fields appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginSettings {
    pub highlight_prayer_objects: bool,
    pub exposed_altar_color: Rgba,
    pub shrine_of_ralos_color: Rgba,
    pub libation_bowl_color: Rgba,
    pub debug_mode: bool,
}

impl Default for PluginSettings {
    fn default() -> Self {
        PluginSettings {
            highlight_prayer_objects: true,
            exposed_altar_color: GREEN,
            shrine_of_ralos_color: GREEN,
            libation_bowl_color: GREEN,
            debug_mode: false,
        }
    }
}

/// Loads and saves the settings document under a config directory.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(config_dir: &Path) -> Self {
        SettingsStore {
            path: config_dir.join(SETTINGS_FILE),
        }
    }

    /// Read the settings file. A missing file yields the defaults; a file
    /// that no longer parses is reported and replaced by the defaults
    /// rather than blocking startup.
    pub fn load(&self) -> Result<PluginSettings> {
        if !self.path.exists() {
            return Ok(PluginSettings::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {}", self.path.display()))?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                eprintln!("Failed to parse settings file, using defaults: {}", e);
                Ok(PluginSettings::default())
            }
        }
    }

    pub fn save(&self, settings: &PluginSettings) -> Result<()> {
        let raw = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings file {}", self.path.display()))?;
        Ok(())
    }
}
