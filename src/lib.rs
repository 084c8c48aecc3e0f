pub mod commands;
pub mod context;
pub mod error_fmt;
pub mod output;
pub mod repl;
#[cfg(test)]
mod test_support;

// Re-export commonly used types from context module for convenience
pub use context::{
    LoadError, SaveError, Settings, SettingsError, Task, TaskList, TodoContext,
    DEFAULT_DATA_FILE, SETTINGS_FILE,
};

pub use error_fmt::AppError;
pub use output::{Output, Severity, Terminal};
