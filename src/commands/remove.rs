//! Remove command - deletes a single task.

use crate::error_fmt::AppError;
use crate::output::Output;
use crate::TodoContext;

/// Remove the task with the given id. Other tasks keep their ids.
pub fn remove(ctx: &mut TodoContext, out: &mut dyn Output, id: i64) -> Result<(), AppError> {
    let task = ctx.tasks_mut().remove(id).ok_or(AppError::TaskNotFound(id))?;
    out.info(&format!("Task removed: {}", task));
    Ok(())
}
