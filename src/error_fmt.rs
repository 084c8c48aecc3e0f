use std::fmt;

use crate::context::{LoadError, SaveError};
use crate::output::{Output, Severity};

/// Application error carrying the message shown to the user.
#[derive(Debug)]
pub enum AppError {
    /// Wrong number of arguments; holds the usage line
    Usage(&'static str),
    /// Argument that should be a task id but isn't an integer
    InvalidId(String),
    /// Command name not in the dispatch table
    UnknownCommand(String),
    /// No task with this id
    TaskNotFound(i64),
    /// The highest stored id is `i64::MAX`, so no new id can be assigned
    IdExhausted,
    /// Data file could not be loaded
    Load(LoadError),
    /// Data file could not be saved
    Save(SaveError),
}

impl AppError {
    /// Severity the error is reported with.
    pub fn severity(&self) -> Severity {
        match self {
            AppError::Usage(_) => Severity::Warn,
            AppError::Load(e) if e.is_missing() => Severity::Warn,
            _ => Severity::Error,
        }
    }

    /// Report the error through an output sink.
    pub fn report(&self, out: &mut dyn Output) {
        out.emit(self.severity(), &self.to_string());
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Usage(usage) => write!(f, "Usage: {}", usage),
            AppError::InvalidId(arg) => write!(f, "Invalid task ID: {}", arg),
            AppError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            AppError::TaskNotFound(id) => write!(f, "Task not found with ID: {}", id),
            AppError::IdExhausted => write!(
                f,
                "Cannot add task: task ID {} is already in use, remove it first",
                i64::MAX
            ),
            AppError::Load(e) => write!(f, "{}", format_load_error(e)),
            AppError::Save(e) => write!(f, "{}", format_save_error(e)),
        }
    }
}

impl std::error::Error for AppError {}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Load(e)
    }
}

impl From<SaveError> for AppError {
    fn from(e: SaveError) -> Self {
        AppError::Save(e)
    }
}

fn format_load_error(error: &LoadError) -> String {
    match error {
        e if e.is_missing() => format!(
            "No saved tasks at {}, starting with an empty list",
            e.path().display()
        ),
        LoadError::Read { path, source } => {
            format!("Failed to open file {}: {}", path.display(), source)
        }
        LoadError::Decode { path, source } => {
            format!("Failed to decode JSON in {}: {}", path.display(), source)
        }
    }
}

fn format_save_error(error: &SaveError) -> String {
    match error {
        SaveError::CreateDir { path, source } => {
            format!("Failed to create directory {}: {}", path.display(), source)
        }
        SaveError::Encode(source) => format!("Failed to encode JSON: {}", source),
        SaveError::Write { path, source } => {
            format!("Failed to write file {}: {}", path.display(), source)
        }
    }
}
