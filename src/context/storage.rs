//! Reading and writing the task list JSON file.

use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::task::TaskList;

/// Errors that can occur when reading the data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// True when the data file simply does not exist yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Decode { path, .. } => path,
        }
    }
}

/// Errors that can occur when writing the data file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to encode task list: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Read and decode the task list stored at `path`.
pub fn read_task_list(path: &Path) -> Result<TaskList, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let list: TaskList = serde_json::from_str(&content).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loaded {} tasks from {}", list.len(), path.display());
    Ok(list)
}

/// Encode the task list and overwrite `path` with it.
///
/// The parent directory is created when missing.
pub fn write_task_list(path: &Path, list: &TaskList) -> Result<(), SaveError> {
    let content = serde_json::to_string_pretty(list)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SaveError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, content + "\n").map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("saved {} tasks to {}", list.len(), path.display());
    Ok(())
}
