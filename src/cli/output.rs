use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    Success,
    Warning,
    Error,
    Hint,
}

/// One rendered line of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: MessageKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Plain, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, text)
    }

    pub fn hint(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Hint, text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text.as_str();
        match self.kind {
            MessageKind::Plain => write!(f, "{text}"),
            MessageKind::Success => write!(f, "{}", text.bright_green()),
            MessageKind::Warning => write!(f, "{}", text.bright_yellow()),
            MessageKind::Error => write!(f, "{}", text.bright_red()),
            MessageKind::Hint => write!(f, "{}", text.dimmed()),
        }
    }
}

/// Enables or disables ANSI colors for every subsequent line.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

pub fn print_lines(lines: &[Line]) {
    for line in lines {
        println!("{line}");
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

/// Writes the prompt without a trailing newline.
pub fn prompt(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{text}")?;
    stdout.flush()
}
