#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps an in-memory ledger of expenses and drives it from
//! one-shot command-line invocations or an interactive shell.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense tracker tracing initialized.");
    });
}
