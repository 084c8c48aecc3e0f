//! Shared helpers for unit tests.

use crate::output::{Output, Severity};

/// One recorded output event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Message(Severity, String),
    Banner(String),
    Plain(String),
    Prompt,
}

/// Output sink that records everything it is given.
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<Line>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of the given severity, in order.
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Message(s, m) if *s == severity => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.messages(Severity::Info)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Severity::Warn)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages(Severity::Error)
    }

    /// Unstyled lines, in order.
    pub fn plains(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                Line::Plain(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> usize {
        self.lines.iter().filter(|l| **l == Line::Prompt).count()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Output for Recorder {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.lines.push(Line::Message(severity, message.to_string()));
    }

    fn banner(&mut self, message: &str) {
        self.lines.push(Line::Banner(message.to_string()));
    }

    fn plain(&mut self, message: &str) {
        self.lines.push(Line::Plain(message.to_string()));
    }

    fn prompt(&mut self, _prompt: &str) {
        self.lines.push(Line::Prompt);
    }
}
