//! Message output for the command loop.
//!
//! Commands report through the [`Output`] trait rather than printing
//! directly, so the same loop can run with colored or plain text and can be
//! driven against an in-memory sink.

use std::io::Write;

use owo_colors::OwoColorize;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

/// Sink for everything the command loop shows the user.
pub trait Output {
    /// Emit one message line at the given severity.
    fn emit(&mut self, severity: Severity, message: &str);

    /// Emit an emphasized heading line.
    fn banner(&mut self, message: &str);

    /// Emit an unstyled line.
    fn plain(&mut self, message: &str);

    /// Show the input prompt without a trailing newline.
    fn prompt(&mut self, prompt: &str);

    fn info(&mut self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(Severity::Warn, message);
    }

    fn error(&mut self, message: &str) {
        self.emit(Severity::Error, message);
    }
}

/// Writes messages to a terminal-like writer, optionally with ANSI colors.
///
/// Info is blue, warnings yellow, errors red and banners bold.
pub struct Terminal<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            log::debug!("failed to write output: {}", e);
        }
    }
}

impl Terminal<std::io::Stdout> {
    /// Terminal on stdout.
    pub fn stdout(color: bool) -> Self {
        Self::new(std::io::stdout(), color)
    }
}

impl<W: Write> Output for Terminal<W> {
    fn emit(&mut self, severity: Severity, message: &str) {
        if !self.color {
            self.write_line(message);
            return;
        }
        let styled = match severity {
            Severity::Info => message.blue().to_string(),
            Severity::Warn => message.yellow().to_string(),
            Severity::Error => message.red().to_string(),
        };
        self.write_line(&styled);
    }

    fn banner(&mut self, message: &str) {
        if self.color {
            let styled = message.bold().to_string();
            self.write_line(&styled);
        } else {
            self.write_line(message);
        }
    }

    fn plain(&mut self, message: &str) {
        self.write_line(message);
    }

    fn prompt(&mut self, prompt: &str) {
        let result = write!(self.writer, "{}", prompt).and_then(|_| self.writer.flush());
        if let Err(e) = result {
            log::debug!("failed to write prompt: {}", e);
        }
    }
}
