//! Complete command - marks a task as done.

use crate::error_fmt::AppError;
use crate::output::Output;
use crate::TodoContext;

/// Mark a task complete. Already complete tasks are confirmed again.
pub fn complete(ctx: &mut TodoContext, out: &mut dyn Output, id: i64) -> Result<(), AppError> {
    let task = ctx.tasks_mut().complete(id).ok_or(AppError::TaskNotFound(id))?;
    out.info(&format!("Task completed: {}", task.name));
    Ok(())
}
