//! Application configuration.
//!
//! A small JSON file in the platform data directory holding presentation
//! defaults. Everything has a sensible default, so a missing or unreadable
//! file never blocks a command.

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::warn;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Ask before deleting a task or clearing completed tasks.
    #[serde(default = "default_confirm")]
    pub confirm_destructive: bool,

    /// Override for the directory where task data is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_confirm() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            confirm_destructive: true,
            data_dir: None,
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the
    /// file is absent or unparseable.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(%err, "configuration file is unreadable, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
