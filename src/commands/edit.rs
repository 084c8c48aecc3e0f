//! Edit command - renames a task.

use crate::error_fmt::AppError;
use crate::output::Output;
use crate::TodoContext;

/// Replace the name of a task. The id and completion flag are kept.
pub fn edit(
    ctx: &mut TodoContext,
    out: &mut dyn Output,
    id: i64,
    new_name: &str,
) -> Result<(), AppError> {
    let task = ctx
        .tasks_mut()
        .rename(id, new_name)
        .ok_or(AppError::TaskNotFound(id))?;
    out.info(&format!("Task edited: {}", task.name));
    Ok(())
}
