//! The closed command vocabulary and the flag schemas that bind tokens to it.

use clap::Parser;

use crate::errors::CommandError;
use crate::ledger::SummaryScope;

pub const ADD_USAGE: &str = "Usage: add --description <text> --amount <number>";
pub const LIST_USAGE: &str = "Usage: list";
pub const SUMMARY_USAGE: &str = "Usage: summary [--month 1..12]";
pub const DELETE_USAGE: &str = "Usage: delete --id <number>";

/// Static description of one command, used for help text and completion.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    pub usage: &'static str,
}

impl CommandEntry {
    pub const fn new(name: &'static str, usage: &'static str) -> Self {
        Self { name, usage }
    }

    /// Usage without the leading `Usage: ` label.
    pub fn synopsis(&self) -> &'static str {
        self.usage.strip_prefix("Usage: ").unwrap_or(self.usage)
    }
}

/// Ledger commands in the order help lists them.
pub const COMMANDS: &[CommandEntry] = &[
    CommandEntry::new("add", ADD_USAGE),
    CommandEntry::new("list", LIST_USAGE),
    CommandEntry::new("summary", SUMMARY_USAGE),
    CommandEntry::new("delete", DELETE_USAGE),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { description: String, amount: f64 },
    List,
    Summary { scope: SummaryScope },
    Delete { id: u64 },
    Help,
    Unknown(String),
}

#[derive(Debug, Parser)]
#[command(name = "add", disable_help_flag = true, disable_version_flag = true)]
struct AddFlags {
    #[arg(long, allow_hyphen_values = true)]
    description: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    amount: Option<f64>,
}

#[derive(Debug, Parser)]
#[command(name = "summary", disable_help_flag = true, disable_version_flag = true)]
struct SummaryFlags {
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    month: i64,
}

#[derive(Debug, Parser)]
#[command(name = "delete", disable_help_flag = true, disable_version_flag = true)]
struct DeleteFlags {
    #[arg(long, allow_negative_numbers = true)]
    id: Option<i64>,
}

impl Command {
    /// Turns a token sequence into a command, validating its flag values.
    ///
    /// The first token names the command (matched exactly); the rest are
    /// its flags. An empty sequence asks for help.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Command, CommandError> {
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Command::Help);
        };
        let name: &str = name.as_ref();
        let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();

        let command = match name {
            "add" => {
                let flags: AddFlags = bind_flags("add", &args, ADD_USAGE)?;
                let description = flags.description.unwrap_or_default();
                if description.is_empty() {
                    return Err(CommandError::usage("description must not be empty", ADD_USAGE));
                }
                let amount = flags.amount.unwrap_or_default();
                if !(amount.is_finite() && amount > 0.0) {
                    return Err(CommandError::usage(
                        "amount must be a number greater than zero",
                        ADD_USAGE,
                    ));
                }
                Command::Add {
                    description,
                    amount,
                }
            }
            "list" => Command::List,
            "summary" => {
                let flags: SummaryFlags = bind_flags("summary", &args, SUMMARY_USAGE)?;
                let scope = SummaryScope::from_number(flags.month).ok_or_else(|| {
                    CommandError::usage("month must be between 0 and 12", SUMMARY_USAGE)
                })?;
                Command::Summary { scope }
            }
            "delete" => {
                let flags: DeleteFlags = bind_flags("delete", &args, DELETE_USAGE)?;
                let id = flags
                    .id
                    .and_then(|id| u64::try_from(id).ok())
                    .filter(|id| *id > 0)
                    .ok_or_else(|| {
                        CommandError::usage("id must be a positive number", DELETE_USAGE)
                    })?;
                Command::Delete { id }
            }
            "help" => Command::Help,
            _ => Command::Unknown(name.to_string()),
        };

        tracing::trace!(?command, "parsed command");
        Ok(command)
    }
}

/// Binds `--name value` pairs against a command's flag schema.
fn bind_flags<F: Parser>(
    name: &str,
    args: &[&str],
    usage: &'static str,
) -> Result<F, CommandError> {
    F::try_parse_from(std::iter::once(name).chain(args.iter().copied()))
        .map_err(|err| CommandError::parse(parse_reason(&err), usage))
}

fn parse_reason(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
