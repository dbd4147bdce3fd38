pub mod commands;
pub mod dispatch;
pub mod help;
pub mod output;
pub mod shell;
pub mod shell_context;
pub mod table;
pub mod tokenizer;

pub use commands::Command;
pub use dispatch::{dispatch, execute, Reply};
pub use shell::run_cli;
pub use tokenizer::tokenize;
