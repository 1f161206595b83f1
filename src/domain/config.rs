//! Config - Application Configuration
//!
//! Read from `parenting-hub.toml` in the platform config directory. Every
//! section is optional; an empty or missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_TRACKABLE_ACTIVITIES};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Language;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HubConfig {
    /// Storage backend selection
    pub storage: StorageConfig,
    /// Progress aggregate options
    pub progress: ProgressConfig,
    /// Localization options
    pub i18n: I18nConfig,
}

/// Which key-value backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One file per key on disk
    #[default]
    File,
    /// Process memory, lost on exit
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the file backend (platform data dir when unset)
    pub dir: Option<PathBuf>,
}

/// Progress configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Denominator of the overall completion percentage
    pub trackable_activities: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            trackable_activities: DEFAULT_TRACKABLE_ACTIVITIES,
        }
    }
}

/// Localization configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct I18nConfig {
    /// Language used until a persisted preference is found
    pub default_language: Language,
}

impl HubConfig {
    /// Path of the config file, creating the directory if needed
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load from the platform config directory
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`; a missing or blank file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    /// Write to `path` as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}
