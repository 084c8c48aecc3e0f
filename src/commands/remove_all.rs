//! Remove-all command - clears the list.

use log::debug;

use crate::output::Output;
use crate::TodoContext;

/// Remove every task. Ids start again from 1 afterwards.
pub fn remove_all(ctx: &mut TodoContext, out: &mut dyn Output) {
    let count = ctx.tasks_mut().clear();
    debug!("cleared {} tasks", count);
    out.info("All tasks removed");
}
