//! Command implementations.
//!
//! Each command is implemented in its own submodule. Commands take the
//! `TodoContext` they act on and the `Output` they report through; argument
//! parsing happens in the `repl` module before any of these run.

mod add;
mod complete;
mod edit;
mod help;
mod list;
mod remove;
mod remove_all;
mod show;

pub use add::add;
pub use complete::complete;
pub use edit::edit;
pub use help::help;
pub use list::list;
pub use remove::remove;
pub use remove_all::remove_all;
pub use show::show;
