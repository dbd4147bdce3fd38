use std::{fmt, sync::Arc};

use super::{
    clock::{Clock, SystemClock},
    expense::{Expense, SummaryScope},
};

/// In-memory, insertion-ordered collection of expenses.
///
/// Identifiers come from a counter that only ever moves forward, so an id is
/// never handed out twice even after the expense holding it was deleted.
pub struct Ledger {
    expenses: Vec<Expense>,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Records a new expense stamped with the current time and returns its id.
    ///
    /// Values are stored as given; callers validate them first.
    pub fn add(&mut self, description: impl Into<String>, amount: f64) -> u64 {
        let id = self.next_id;
        let expense = Expense {
            id,
            date: self.clock.now(),
            description: description.into(),
            amount,
        };
        self.expenses.push(expense);
        self.next_id += 1;
        tracing::debug!(id, amount, "expense added");
        id
    }

    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Sums the amounts of every expense the scope covers.
    pub fn summarize(&self, scope: SummaryScope) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| scope.matches(expense))
            .map(|expense| expense.amount)
            .sum()
    }

    /// Removes the expense with `id`, returning whether one was found.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.expenses.iter().position(|expense| expense.id == id) {
            Some(index) => {
                self.expenses.remove(index);
                tracing::debug!(id, "expense deleted");
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("expenses", &self.expenses)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
