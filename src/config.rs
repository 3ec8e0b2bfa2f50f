//! Configuration loading and persistence.
//!
//! Settings live in `config.json` inside the config directory. Missing
//! files and missing fields fall back to defaults; a handful of environment
//! variables override whatever was loaded.
//!
//! # Environment Variables
//!
//! - `TTYKEYS_CONFIG_DIR` - config directory override
//! - `TTYKEYS_SAMPLE_DELAY_US` - stdin sampling delay in microseconds
//! - `TTYKEYS_LOG_FILE` - log file path

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_FILE_NAME, DEFAULT_SAMPLE_DELAY};

/// Configuration for the ttykeys CLI.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Microseconds to wait before counting queued stdin bytes.
    pub sample_delay_us: u64,
    /// Key that ends the interactive key viewer.
    pub quit_key: char,
    /// Log file; `None` means `ttykeys.log` in the temp directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_delay_us: DEFAULT_SAMPLE_DELAY.as_micros() as u64,
            quit_key: 'q',
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the configuration directory path, creating it if necessary.
    ///
    /// `TTYKEYS_CONFIG_DIR` wins; otherwise the platform config dir
    /// (Linux: `~/.config/ttykeys`).
    pub fn config_dir() -> Result<PathBuf> {
        let dir = if let Ok(dir) = std::env::var("TTYKEYS_CONFIG_DIR") {
            PathBuf::from(dir)
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("ttykeys")
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        Ok(dir)
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the config file, with environment variable
    /// overrides. Rejected overrides are logged at `warn`.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        for ignored in config.apply_env_overrides() {
            log::warn!("{ignored}");
        }
        Ok(config)
    }

    /// Loads configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Vec<String> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up by variable name.
    ///
    /// Values that fail to parse leave the setting alone and are returned
    /// as messages, so callers can report them once logging is set up.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut ignored = Vec::new();

        if let Some(delay) = lookup("TTYKEYS_SAMPLE_DELAY_US") {
            match delay.parse::<u64>() {
                Ok(us) => self.sample_delay_us = us,
                Err(e) => {
                    ignored.push(format!("Ignoring TTYKEYS_SAMPLE_DELAY_US={delay:?}: {e}"));
                }
            }
        }

        if let Some(log_file) = lookup("TTYKEYS_LOG_FILE") {
            self.log_file = Some(PathBuf::from(log_file));
        }

        ignored
    }

    /// Persists the current configuration to the config file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Writes the configuration as pretty JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Log file to use: the configured one or `ttykeys.log` in the temp dir.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME))
    }
}
