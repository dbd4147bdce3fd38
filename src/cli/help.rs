use crate::cli::commands::COMMANDS;

pub const BANNER: &str = "Expense Tracker (in-memory). Type 'help' for commands, 'exit' to quit.";

/// Full usage text, one entry per line.
pub fn usage_lines() -> Vec<String> {
    let mut lines = vec![
        "Usage: expense-tracker <command> [--flags]".to_string(),
        "Commands:".to_string(),
    ];
    lines.extend(COMMANDS.iter().map(|entry| format!("  {}", entry.synopsis())));
    lines.push("Tip: run without args to enter interactive mode.".to_string());
    lines
}
