//! Shared runtime state for one shell session.

use crate::cli::{dispatch::dispatch, help, output::Line, tokenizer::tokenize};
use crate::config::Config;
use crate::ledger::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// What the loop should do after one line.
#[derive(Debug, PartialEq)]
pub enum LineOutcome {
    /// Nothing to print; read the next line.
    Skip,
    Output(Vec<Line>),
    Exit,
}

#[derive(Debug)]
pub struct ShellContext {
    pub mode: CliMode,
    pub ledger: Ledger,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: Config) -> Self {
        Self::with_ledger(mode, config, Ledger::new())
    }

    pub fn with_ledger(mode: CliMode, config: Config, ledger: Ledger) -> Self {
        Self {
            mode,
            ledger,
            config,
            last_command: None,
            running: true,
        }
    }

    /// Handles one raw input line, including the shell-only words
    /// `exit`, `quit` and `help`.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineOutcome::Skip;
        }
        if matches!(trimmed, "exit" | "quit") {
            self.running = false;
            return LineOutcome::Exit;
        }
        if trimmed == "help" {
            return LineOutcome::Output(help::usage_lines().into_iter().map(Line::plain).collect());
        }

        let tokens = tokenize(trimmed);
        if tokens.is_empty() {
            return LineOutcome::Skip;
        }
        self.last_command = Some(trimmed.to_string());
        LineOutcome::Output(dispatch(&mut self.ledger, tokens.as_slice()).render())
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ mode: {:?}, running: {}, expenses: {}, last_command: {:?} }}",
            self.mode,
            self.running,
            self.ledger.len(),
            self.last_command
        )
    }
}
