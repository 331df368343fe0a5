//! Persisted settings: network, explorer URL and default dataset.
//!
//! Stored as pretty JSON under the platform config directory:
//! - Linux: `~/.config/lazycap/config.json`
//! - macOS: `~/Library/Application Support/lazycap/config.json`
//! - Windows: `%APPDATA%/lazycap/config.json`
//!
//! Sort state is not stored: every session starts unsorted unless
//! `--sort` is given.

use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_EXPLORER_URL;
use crate::domain::Network;

const APP_DIR: &str = "lazycap";
const CONFIG_FILE: &str = "config.json";

/// Settings that survive restarts. CLI flags override them per run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Network whose genesis anchors height-to-date conversion.
    #[serde(default)]
    pub network: Network,
    /// Web explorer that allocator links open in.
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
    /// Dataset loaded when `--file` is not given.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// Where `save` writes instead of the platform location. Never persisted.
    #[serde(skip)]
    pub file: Option<PathBuf>,
}

fn default_explorer_url() -> String {
    DEFAULT_EXPLORER_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            explorer_url: default_explorer_url(),
            dataset_path: None,
            file: None,
        }
    }
}

impl AppConfig {
    /// Location of `config.json`, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no config directory or it cannot
    /// be created.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| eyre!("no config directory on this platform"))?
            .join(APP_DIR);
        fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("cannot create {}", dir.display()))?;
        Ok(dir.join(CONFIG_FILE))
    }

    /// Default settings that will be saved to `path`.
    #[must_use]
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    /// Loads `path` if given, else the platform file, falling back to defaults.
    ///
    /// A missing or broken `path` still yields defaults bound to `path`, so
    /// later saves go there.
    #[must_use]
    pub fn load_or_default(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::load();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("config load failed, using defaults: {err}");
                Self::with_file(path)
            }
        }
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Reads and parses `config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or not valid
    /// configuration JSON.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)
            .wrap_err_with(|| format!("cannot read {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Reads and parses the file at `path` and keeps saving there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or not valid configuration
    /// JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read {}", path.display()))?;
        Ok(Self {
            file: Some(path.to_path_buf()),
            ..Self::from_json(&content)?
        })
    }

    /// Parses configuration JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid configuration JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Writes the settings back to `config.json`, or to `file` when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the config path is unavailable or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        let path = match &self.file {
            Some(path) => path.clone(),
            None => Self::config_path()?,
        };
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).wrap_err_with(|| format!("cannot write {}", path.display()))
    }
}

// ============================================================================
// Tests
// ============================================================================
