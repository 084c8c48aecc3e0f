//! The interactive command loop.
//!
//! Reads one line at a time, parses it into a [`Command`], runs it against
//! the [`TodoContext`] and reports the result through an [`Output`]. The
//! loop stops on `exit`, which saves the list first, or when input ends.

mod parse;

use std::io::BufRead;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::commands;
use crate::error_fmt::AppError;
use crate::output::Output;
use crate::TodoContext;

pub use parse::{parse, Command};

pub const PROMPT: &str = "> ";

/// Whether the loop keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user ran `exit`.
    Requested,
    /// Standard input was closed or could not be read. Nothing was saved.
    EndOfInput,
}

/// Load the task list for a session, falling back to an empty list.
///
/// Load failures are reported and logged but never stop the session.
pub fn open_context(data_file: PathBuf, out: &mut dyn Output) -> TodoContext {
    match TodoContext::load(data_file.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("starting with an empty list: {}", e);
            AppError::from(e).report(out);
            TodoContext::new(data_file)
        }
    }
}

/// Print the welcome banner and run the loop until it terminates.
///
/// Lines are read as bytes; anything that is not valid UTF-8 is decoded
/// lossily and handled like any other input.
pub fn run(ctx: &mut TodoContext, mut input: impl BufRead, out: &mut dyn Output) -> Exit {
    out.banner("Welcome to the TODO List Manager!");
    out.plain("Type 'exit' to quit.");

    let mut buf = Vec::new();
    loop {
        out.prompt(PROMPT);

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                info!("end of input, leaving without saving");
                return Exit::EndOfInput;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("failed to read input: {}", e);
                out.error(&format!("Failed to read input: {}", e));
                return Exit::EndOfInput;
            }
        }

        // invalid UTF-8 is replaced rather than rejected so the session survives
        let line = String::from_utf8_lossy(&buf);
        if handle_line(ctx, out, &line) == LoopState::Terminated {
            return Exit::Requested;
        }
    }
}

/// Parse and run a single input line, reporting any error.
pub fn handle_line(ctx: &mut TodoContext, out: &mut dyn Output, line: &str) -> LoopState {
    let command = match parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return LoopState::Running,
        Err(e) => {
            e.report(out);
            return LoopState::Running;
        }
    };

    debug!("dispatching {:?}", command);
    match execute(ctx, out, command) {
        Ok(state) => state,
        Err(e) => {
            e.report(out);
            LoopState::Running
        }
    }
}

/// Run a parsed command against the context.
pub fn execute(
    ctx: &mut TodoContext,
    out: &mut dyn Output,
    command: Command,
) -> Result<LoopState, AppError> {
    match command {
        Command::Add(name) => commands::add(ctx, out, &name)?,
        Command::Remove(id) => commands::remove(ctx, out, id)?,
        Command::List => commands::list(ctx, out),
        Command::Complete(id) => commands::complete(ctx, out, id)?,
        Command::Show(id) => commands::show(ctx, out, id)?,
        Command::Edit { id, name } => commands::edit(ctx, out, id, &name)?,
        Command::RemoveAll => commands::remove_all(ctx, out),
        Command::Help => commands::help(out),
        Command::Exit => {
            exit(ctx, out);
            return Ok(LoopState::Terminated);
        }
    }
    Ok(LoopState::Running)
}

/// Save the list and say goodbye. A failed save is reported, not escalated.
fn exit(ctx: &TodoContext, out: &mut dyn Output) {
    match ctx.save() {
        Ok(()) => out.plain("Save done..."),
        Err(e) => {
            warn!("changes were not saved: {}", e);
            AppError::from(e).report(out);
        }
    }
    out.plain("Goodbye!");
}
