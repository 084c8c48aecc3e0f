//! Optional settings file for the todo manager.
//!
//! The settings file (`todo.yml`) lives in the working directory and can
//! move the data file or turn colored output off. Every field is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/todoList.json";

/// Name of the settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "todo.yml";

/// Settings loaded from `todo.yml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Path of the JSON data file.
    pub data_file: PathBuf,

    /// Whether messages are colorized.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            color: true,
        }
    }
}

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl Settings {
    /// Data file to use, preferring an explicit override from the command line.
    pub fn resolve_data_file(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override.unwrap_or_else(|| self.data_file.clone())
    }

    /// Load settings from a file path.
    ///
    /// Returns the default settings if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Ok(Self::default()),
            Ok(content) => Ok(serde_yaml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(SettingsError::Io(e)),
        }
    }
}
