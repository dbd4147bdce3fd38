use std::{
    borrow::Cow,
    env,
    io::{self, BufRead, IsTerminal},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Config as EditorConfig, Context as ReadlineContext, Editor, Helper,
};

use crate::cli::{
    commands::COMMANDS,
    dispatch::dispatch,
    help::BANNER,
    output,
    shell_context::{CliMode, LineOutcome, ShellContext},
};
use crate::config::{Config, ConfigManager};
use crate::errors::CliError;
use crate::ledger::Ledger;

pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_SCRIPT";
pub const PROMPT: &str = "> ";

/// Words the shell understands besides the ledger commands.
const SHELL_WORDS: &[&str] = &["help", "exit", "quit"];

/// Runs one command when `args` is non-empty, otherwise the interactive shell.
///
/// Returns whether the run succeeded; only one-shot commands can fail without
/// returning an error.
pub fn run_cli(args: &[String]) -> Result<bool, CliError> {
    let config = ConfigManager::new().load()?;
    output::set_color(config.color && io::stdout().is_terminal());

    if !args.is_empty() {
        return Ok(run_once(args));
    }

    let mode = if env::var_os(SCRIPT_ENV).is_some() || !io::stdin().is_terminal() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let mut context = ShellContext::new(mode, config);
    tracing::debug!(?mode, "starting shell");

    match mode {
        CliMode::Interactive => {
            let mut source = EditorSource::new(&context.config)?;
            run_session(&mut context, &mut source)?;
        }
        CliMode::Script => {
            let stdin = io::stdin();
            let mut source = ScriptSource::new(stdin.lock());
            run_session(&mut context, &mut source)?;
        }
    }
    Ok(true)
}

fn run_once(args: &[String]) -> bool {
    let mut ledger = Ledger::new();
    let reply = dispatch(&mut ledger, args);
    output::print_lines(&reply.render());
    !reply.is_failure()
}

/// Provider of input lines for the shell loop.
pub trait LineSource {
    /// Shows `prompt` and reads one line; `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Called with every line that produced output.
    fn record(&mut self, _line: &str) {}
}

/// Prints the banner, then processes lines until `exit`, `quit` or end of input.
pub fn run_session(
    context: &mut ShellContext,
    source: &mut dyn LineSource,
) -> Result<(), CliError> {
    output::info(BANNER);
    while context.running {
        let Some(line) = source.read_line(PROMPT)? else {
            break;
        };
        match context.process_line(&line) {
            LineOutcome::Skip => {}
            LineOutcome::Exit => break,
            LineOutcome::Output(lines) => {
                source.record(line.trim());
                output::print_lines(&lines);
            }
        }
    }
    tracing::debug!(status = %context.status(), "shell finished");
    Ok(())
}

/// Reads plain lines from any buffered reader, writing the prompt first.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        output::prompt(prompt)?;
        // Raw bytes, so one badly encoded line cannot end the session.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Line editor with history and command-name completion.
pub struct EditorSource {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl EditorSource {
    pub fn new(config: &Config) -> Result<Self, CliError> {
        let editor_config = EditorConfig::builder()
            .max_history_size(config.history_limit)?
            .auto_add_history(false)
            .build();
        let mut editor = Editor::<CommandHelper, DefaultHistory>::with_config(editor_config)?;
        editor.set_helper(Some(CommandHelper::new()));
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C drops the current line only.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => {
                tracing::warn!(error = %err, "line editor failed");
                Err(err.into())
            }
        }
    }

    fn record(&mut self, line: &str) {
        self.editor.add_history_entry(line).ok();
    }
}

pub struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new() -> Self {
        let mut commands: Vec<String> = COMMANDS
            .iter()
            .map(|entry| entry.name)
            .chain(SHELL_WORDS.iter().copied())
            .map(str::to_string)
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let prefix = &line[..pos];
        let start = prefix
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(0);

        // Only the command name is completed.
        if !prefix[..start].trim().is_empty() {
            return (start, Vec::new());
        }

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
