use assert_cmd::Command;
use tempfile::TempDir;

pub const BIN_NAME: &str = "expense-tracker";

/// Builds a command isolated from any user configuration file.
///
/// The returned directory must outlive the command.
pub fn tracker_command() -> (Command, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_TRACKER_CONFIG", dir.path().join("config.json"))
        .env_remove("RUST_LOG");
    (cmd, dir)
}

#[allow(dead_code)]
pub fn script_command() -> (Command, TempDir) {
    let (mut cmd, dir) = tracker_command();
    cmd.env("EXPENSE_TRACKER_SCRIPT", "1");
    (cmd, dir)
}
