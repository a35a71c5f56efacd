//! Configuration management for Primer.
//!
//! Configuration is stored in TOML format in a platform-appropriate location.
//! Every section is optional; a missing file means defaults.

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::{PrimerError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Main configuration structure for Primer.
///
/// ## Example Configuration File (primer.toml)
///
/// ```toml
/// [general]
/// catalog_path = "/home/me/courses/react.json"
/// landing_topic = "intro"
///
/// [search]
/// debounce_ms = 300
///
/// [ui]
/// highlight_matches = true
/// show_match_field = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Search behaviour
    pub search: SearchConfig,

    /// UI settings
    pub ui: UiConfig,
}

/// General configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Catalog file to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,

    /// Topic shown on the landing view
    pub landing_topic: String,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            catalog_path: None,
            landing_topic: "intro".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How long the "searching" spinner stays up after the last keystroke
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Emphasise matched text in topic titles
    pub highlight_matches: bool,

    /// Show which field (title, keyword, explanation) matched the query
    pub show_match_field: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            highlight_matches: true,
            show_match_field: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default config if no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        info!(path = %path.display(), "Loading configuration");
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| PrimerError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Saving configuration");
        let contents = toml::to_string_pretty(self).map_err(|e| PrimerError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "primer").ok_or_else(|| PrimerError::ConfigError {
            reason: "Could not determine config directory".to_string(),
        })?;

        Ok(dirs.config_dir().join("primer.toml"))
    }

    /// The search indicator window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}
