//! Add command - appends a new task.

use crate::error_fmt::AppError;
use crate::output::Output;
use crate::TodoContext;

/// Add a task with the given name to the end of the list.
pub fn add(ctx: &mut TodoContext, out: &mut dyn Output, name: &str) -> Result<(), AppError> {
    let task = ctx.tasks_mut().add(name).ok_or(AppError::IdExhausted)?;
    out.info(&format!("Task added: {}", task));
    Ok(())
}
