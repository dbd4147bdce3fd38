//! Executes parsed commands against a ledger and describes the outcome.

use strsim::levenshtein;

use crate::cli::{
    commands::{Command, COMMANDS},
    help,
    output::Line,
    table::Table,
};
use crate::errors::CommandError;
use crate::ledger::{Expense, Ledger, SummaryScope};

/// Names offered as suggestions for a mistyped command.
const SUGGESTABLE: &[&str] = &["help", "exit", "quit"];
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Outcome of one command, ready to be rendered.
#[derive(Debug, PartialEq)]
pub enum Reply<'a> {
    Added(u64),
    Listing(&'a [Expense]),
    Total { scope: SummaryScope, total: f64 },
    Deleted,
    NotFound,
    Usage,
    Unknown {
        name: String,
        suggestion: Option<&'static str>,
    },
    Rejected(CommandError),
}

impl Reply<'_> {
    /// Whether the command failed, as opposed to succeeding or missing a lookup.
    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Unknown { .. } | Reply::Rejected(_))
    }

    pub fn render(&self) -> Vec<Line> {
        match self {
            Reply::Added(id) => vec![Line::success(format!(
                "Expense added successfully (ID: {id})"
            ))],
            Reply::Listing(expenses) if expenses.is_empty() => {
                vec![Line::plain("No expenses yet")]
            }
            Reply::Listing(expenses) => expense_table(expenses)
                .render()
                .into_iter()
                .map(Line::plain)
                .collect(),
            Reply::Total { scope, total } => {
                let text = match scope {
                    SummaryScope::All => format!("Total expenses: {}", format_amount(*total)),
                    SummaryScope::Month(month) => format!(
                        "Total expenses for {}: {}",
                        month.name(),
                        format_amount(*total)
                    ),
                };
                vec![Line::plain(text)]
            }
            Reply::Deleted => vec![Line::success("Expense deleted successfully")],
            Reply::NotFound => vec![Line::warning("Expense not found")],
            Reply::Usage => usage(),
            Reply::Unknown { name, suggestion } => {
                let mut lines = vec![Line::error(format!("Unknown command: {name}"))];
                if let Some(best) = suggestion {
                    lines.push(Line::hint(format!("Did you mean `{best}`?")));
                }
                lines.extend(usage());
                lines
            }
            Reply::Rejected(CommandError::Usage { usage, .. }) => vec![Line::plain(*usage)],
            Reply::Rejected(err @ CommandError::Parse { .. }) => vec![
                Line::warning(err.to_string()),
                Line::plain(err.usage_line()),
            ],
        }
    }
}

fn usage() -> Vec<Line> {
    help::usage_lines().into_iter().map(Line::plain).collect()
}

pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

fn expense_table(expenses: &[Expense]) -> Table {
    let mut table = Table::new(["ID", "Date", "Description", "Amount"]);
    for expense in expenses {
        table.add_row([
            expense.id.to_string(),
            expense.local_date().format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            format_amount(expense.amount),
        ]);
    }
    table
}

/// Parses `tokens` and runs the resulting command.
pub fn dispatch<'a, S: AsRef<str>>(ledger: &'a mut Ledger, tokens: &[S]) -> Reply<'a> {
    match Command::parse(tokens) {
        Ok(command) => execute(ledger, command),
        Err(err) => {
            tracing::debug!(error = %err, "command rejected");
            Reply::Rejected(err)
        }
    }
}

pub fn execute(ledger: &mut Ledger, command: Command) -> Reply<'_> {
    match command {
        Command::Add {
            description,
            amount,
        } => Reply::Added(ledger.add(description, amount)),
        Command::List => Reply::Listing(ledger.list()),
        Command::Summary { scope } => Reply::Total {
            scope,
            total: ledger.summarize(scope),
        },
        Command::Delete { id } => {
            if ledger.delete(id) {
                Reply::Deleted
            } else {
                Reply::NotFound
            }
        }
        Command::Help => Reply::Usage,
        Command::Unknown(name) => {
            let suggestion = suggest(&name);
            Reply::Unknown { name, suggestion }
        }
    }
}

fn suggest(input: &str) -> Option<&'static str> {
    let needle = input.to_lowercase();
    COMMANDS
        .iter()
        .map(|entry| entry.name)
        .chain(SUGGESTABLE.iter().copied())
        .map(|name| (levenshtein(name, &needle), name))
        .filter(|(distance, name)| *distance <= MAX_SUGGESTION_DISTANCE && *name != input)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::ADD_USAGE;
    use crate::cli::output::MessageKind;
    use crate::ledger::FixedClock;
    use chrono::{Local, TimeZone, Utc};
    use std::sync::Arc;

    fn ledger() -> Ledger {
        let noon = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        Ledger::with_clock(Arc::new(FixedClock(noon)))
    }

    fn text(reply: &Reply<'_>) -> Vec<String> {
        reply.render().into_iter().map(|line| line.text).collect()
    }

    fn run(ledger: &mut Ledger, tokens: &[&str]) -> Vec<String> {
        text(&dispatch(ledger, tokens))
    }

    #[test]
    fn add_reports_new_id() {
        let mut ledger = ledger();
        assert_eq!(
            run(&mut ledger, &["add", "--description", "Coffee", "--amount", "3.50"]),
            vec!["Expense added successfully (ID: 1)"]
        );
        assert_eq!(
            run(&mut ledger, &["add", "--description", "Tea", "--amount", "2"]),
            vec!["Expense added successfully (ID: 2)"]
        );
    }

    #[test]
    fn rejected_add_leaves_ledger_untouched() {
        let mut ledger = ledger();
        let reply = dispatch(&mut ledger, &["add", "--description", "", "--amount", "5"]);
        assert!(reply.is_failure());
        let lines = text(&reply);
        assert_eq!(lines.last().map(String::as_str), Some(ADD_USAGE));
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_id(), 1);
    }

    #[test]
    fn end_to_end_add_list_delete() {
        let mut ledger = ledger();
        run(&mut ledger, &["add", "--description", "Coffee", "--amount", "3.50"]);

        let date = Utc
            .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(
            run(&mut ledger, &["list"]),
            vec![
                "ID  Date        Description  Amount".to_string(),
                format!("1   {date}  Coffee       $3.50"),
            ]
        );

        assert_eq!(dispatch(&mut ledger, &["delete", "--id", "1"]), Reply::Deleted);
        assert_eq!(run(&mut ledger, &["list"]), vec!["No expenses yet"]);
        assert_eq!(dispatch(&mut ledger, &["delete", "--id", "1"]), Reply::NotFound);
        assert_eq!(run(&mut ledger, &["delete", "--id", "1"]), vec!["Expense not found"]);
    }

    #[test]
    fn summary_totals_by_scope() {
        let mut ledger = ledger();
        ledger.add("Coffee", 3.5);
        ledger.add("Lunch", 12.0);
        assert_eq!(run(&mut ledger, &["summary"]), vec!["Total expenses: $15.50"]);
        assert_eq!(
            run(&mut ledger, &["summary", "--month", "3"]),
            vec!["Total expenses for March: $15.50"]
        );
        assert_eq!(
            run(&mut ledger, &["summary", "--month", "4"]),
            vec!["Total expenses for April: $0.00"]
        );
    }

    #[test]
    fn out_of_range_month_prints_usage() {
        let mut ledger = ledger();
        let lines = run(&mut ledger, &["summary", "--month", "13"]);
        assert_eq!(lines.last().map(String::as_str), Some("Usage: summary [--month 1..12]"));
    }

    #[test]
    fn validation_failure_prints_only_usage() {
        let mut ledger = ledger();
        assert_eq!(
            run(&mut ledger, &["summary", "--month", "13"]),
            vec!["Usage: summary [--month 1..12]"]
        );
        assert_eq!(
            run(&mut ledger, &["add", "--description", "Tea", "--amount", "0"]),
            vec![ADD_USAGE]
        );
    }

    #[test]
    fn parse_errors_print_reason_and_usage() {
        let mut ledger = ledger();
        let reply = dispatch(&mut ledger, &["delete", "--id", "abc"]);
        assert!(matches!(reply, Reply::Rejected(CommandError::Parse { .. })));
        let lines = reply.render();
        assert_eq!(lines[0].kind, MessageKind::Warning);
        assert_eq!(lines[1].text, "Usage: delete --id <number>");
    }

    #[test]
    fn unknown_command_echoes_name_and_usage() {
        let mut ledger = ledger();
        let lines = run(&mut ledger, &["bogus"]);
        assert_eq!(lines[0], "Unknown command: bogus");
        assert_eq!(lines[1], "Usage: expense-tracker <command> [--flags]");
    }

    #[test]
    fn unknown_command_suggests_close_name() {
        let mut ledger = ledger();
        let reply = dispatch(&mut ledger, &["lst"]);
        assert_eq!(
            reply,
            Reply::Unknown {
                name: "lst".into(),
                suggestion: Some("list"),
            }
        );
        assert_eq!(text(&reply)[1], "Did you mean `list`?");
    }

    #[test]
    fn uppercase_name_is_unknown_but_suggested() {
        let mut ledger = ledger();
        let reply = dispatch(&mut ledger, &["ADD", "--description", "Tea", "--amount", "2"]);
        assert!(reply.is_failure());
        assert_eq!(
            reply,
            Reply::Unknown {
                name: "ADD".into(),
                suggestion: Some("add"),
            }
        );
        assert_eq!(text(&reply)[0], "Unknown command: ADD");
        assert!(ledger.is_empty());
    }

    #[test]
    fn help_is_not_a_failure() {
        let mut ledger = ledger();
        let reply = dispatch(&mut ledger, &["help"]);
        assert!(!reply.is_failure());
        assert_eq!(text(&reply), help::usage_lines());
    }

    #[test]
    fn amounts_round_to_cents() {
        assert_eq!(format_amount(3.5), "$3.50");
        assert_eq!(format_amount(2.499), "$2.50");
        assert_eq!(format_amount(1234.0), "$1234.00");
    }
}
