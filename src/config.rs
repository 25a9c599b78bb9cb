//! User configuration, read from `<config_dir>/emucompat/config.toml`.
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::storage::StorageError;

const APP_DIR: &str = "emucompat";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the data directory (default `<data_dir>/emucompat`).
    pub data_dir: Option<PathBuf>,
    /// Repeated submit/navigation triggers within this window are dropped.
    pub debounce_ms: u64,
    /// Maximum number of phone database hits returned by a search.
    pub phone_search_limit: usize,
    /// Comments shown per page.
    pub comment_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            debounce_ms: 500,
            phone_search_limit: 20,
            comment_page_size: 20,
        }
    }
}

impl Config {
    /// Loads the config from the platform config directory.
    ///
    /// Returns the defaults if there is no config directory or no file.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub fn load() -> Result<Self, ConfigError> {
        match dirs::config_dir() {
            Some(dir) => Self::load_from(&dir.join(APP_DIR).join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config from `path`, returning the defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolves the directory all stores live under.
    pub fn data_path(&self) -> Result<PathBuf, StorageError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .ok_or(StorageError::NoDataDir)?
                .join(APP_DIR)),
        }
    }
}
