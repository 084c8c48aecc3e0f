//! Help command - prints the command summary.

use crate::output::Output;

const COMMANDS: &[&str] = &[
    "add <task name> - Add a new task",
    "remove <task ID> - Remove a task",
    "list - List all tasks",
    "complete <task ID> - Mark a task as completed",
    "show <task ID> - Show task details",
    "edit <task ID> <new task name> - Edit a task",
    "remove-all - Remove all tasks",
    "help - Show this help",
    "exit - Save and quit",
];

/// Print the command summary.
pub fn help(out: &mut dyn Output) {
    out.plain("Commands:");
    for line in COMMANDS {
        out.plain(line);
    }
}
