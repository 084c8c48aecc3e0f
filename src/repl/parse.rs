//! Parsing of input lines into commands.

use crate::error_fmt::AppError;

/// A validated command ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(i64),
    List,
    Complete(i64),
    Show(i64),
    Edit { id: i64, name: String },
    RemoveAll,
    Help,
    Exit,
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line. Tokens are split on whitespace and
/// multi-word names are rejoined with single spaces. Command names match
/// exactly, without case folding.
pub fn parse(line: &str) -> Result<Option<Command>, AppError> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match name {
        "add" => {
            if args.is_empty() {
                return Err(AppError::Usage("add <task name>"));
            }
            Command::Add(args.join(" "))
        }
        "remove" => Command::Remove(single_id(&args, "remove <task ID>")?),
        "list" => {
            no_args(&args, "list")?;
            Command::List
        }
        "complete" => Command::Complete(single_id(&args, "complete <task ID>")?),
        "show" => Command::Show(single_id(&args, "show <task ID>")?),
        "edit" => {
            if args.len() < 2 {
                return Err(AppError::Usage("edit <task ID> <new task name>"));
            }
            Command::Edit {
                id: parse_id(args[0])?,
                name: args[1..].join(" "),
            }
        }
        "remove-all" => {
            no_args(&args, "remove-all")?;
            Command::RemoveAll
        }
        "help" => {
            no_args(&args, "help")?;
            Command::Help
        }
        "exit" => Command::Exit,
        other => return Err(AppError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn no_args(args: &[&str], usage: &'static str) -> Result<(), AppError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(AppError::Usage(usage))
    }
}

fn single_id(args: &[&str], usage: &'static str) -> Result<i64, AppError> {
    match args {
        [id] => parse_id(id),
        _ => Err(AppError::Usage(usage)),
    }
}

fn parse_id(arg: &str) -> Result<i64, AppError> {
    arg.parse()
        .map_err(|_| AppError::InvalidId(arg.to_string()))
}
