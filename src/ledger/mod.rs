//! Expense records, the in-memory ledger that owns them, and the clock it stamps them with.

pub mod clock;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use expense::{Expense, SummaryScope};
pub use ledger::Ledger;
