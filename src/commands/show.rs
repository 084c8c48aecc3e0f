//! Show command - displays details for a single task.

use crate::error_fmt::AppError;
use crate::output::Output;
use crate::TodoContext;

/// Show id, name and status of one task.
pub fn show(ctx: &TodoContext, out: &mut dyn Output, id: i64) -> Result<(), AppError> {
    let task = ctx.tasks().get(id).ok_or(AppError::TaskNotFound(id))?;

    out.info(&format!("Task ID: {}", task.id));
    out.info(&format!("Name: {}", task.name));
    out.info(&format!("Status: {}", task.status_label()));

    Ok(())
}
