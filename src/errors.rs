use thiserror::Error;

use crate::config::ConfigError;

/// Failure of a single command. Always recoverable: the command is aborted
/// and the shell keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Flag values parsed but broke a validation rule.
    #[error("{reason}")]
    Usage {
        reason: String,
        usage: &'static str,
    },
    /// The flag parser rejected the syntax of the arguments.
    #[error("{reason}")]
    Parse {
        reason: String,
        usage: &'static str,
    },
}

impl CommandError {
    pub fn usage(reason: impl Into<String>, usage: &'static str) -> Self {
        CommandError::Usage {
            reason: reason.into(),
            usage,
        }
    }

    pub fn parse(reason: impl Into<String>, usage: &'static str) -> Self {
        CommandError::Parse {
            reason: reason.into(),
            usage,
        }
    }

    /// Usage line of the command that failed.
    pub fn usage_line(&self) -> &'static str {
        match self {
            CommandError::Usage { usage, .. } | CommandError::Parse { usage, .. } => usage,
        }
    }
}

/// Errors that stop the program.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
