//! List command - displays all tasks in order.

use crate::output::Output;
use crate::TodoContext;

/// List all tasks, one line each.
pub fn list(ctx: &TodoContext, out: &mut dyn Output) {
    let tasks = ctx.tasks();

    if tasks.is_empty() {
        out.info("No tasks");
        return;
    }

    for task in tasks.iter() {
        out.info(&task.to_string());
    }
}
