//! Dashboard settings loaded from a JSON file.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Base command used when no settings file exists.
pub const DEFAULT_BASE_CMD: &str = "bash";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for reaching the scheduler.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Command that scheduler subcommands are handed to, e.g. `bash` to run
    /// locally or `ssh login01 bash` to run on a login node.
    pub slurm_base_cmd: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slurm_base_cmd: DEFAULT_BASE_CMD.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// Returns the default settings if the file doesn't exist. A file that
    /// exists but can't be read or parsed is an error, not a fallback.
    pub fn load(path: &Utf8Path) -> Result<Settings, SettingsError> {
        if !path.exists() {
            tracing::info!(
                "settings file {} not found, using base command {:?}",
                path,
                DEFAULT_BASE_CMD
            );
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
