//! Core data model for the todo list.
//!
//! This module contains:
//! - `Task` / `TaskList` - the items and their ordered collection
//! - `TodoContext` - the owned list together with the file it persists to
//! - `Settings` - optional `todo.yml` configuration
//! - JSON reading and writing of the data file

pub mod settings;
mod storage;
mod task;

use std::path::{Path, PathBuf};

pub use settings::{Settings, SettingsError, DEFAULT_DATA_FILE, SETTINGS_FILE};
pub use storage::{read_task_list, write_task_list, LoadError, SaveError};
pub use task::{Task, TaskList};

/// Application context holding the task list and the path it is saved to.
///
/// A single instance is created at startup and handed by mutable reference
/// to every command. Changes stay in memory until [`TodoContext::save`].
#[derive(Debug)]
pub struct TodoContext {
    list: TaskList,
    data_file: PathBuf,
}

impl TodoContext {
    /// Create a context with an empty list.
    pub fn new(data_file: PathBuf) -> Self {
        Self::with_list(data_file, TaskList::new())
    }

    pub fn with_list(data_file: PathBuf, list: TaskList) -> Self {
        Self { list, data_file }
    }

    /// Load the task list from `data_file`.
    pub fn load(data_file: PathBuf) -> Result<Self, LoadError> {
        let list = read_task_list(&data_file)?;
        Ok(Self::with_list(data_file, list))
    }

    /// Write the current list back to the data file.
    pub fn save(&self) -> Result<(), SaveError> {
        write_task_list(&self.data_file, &self.list)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.list
    }

    pub fn tasks_mut(&mut self) -> &mut TaskList {
        &mut self.list
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
