use chrono::{DateTime, Datelike, Local, Month, NaiveDate, Utc};

/// One recorded outlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
}

impl Expense {
    /// Calendar date of the expense in the local time zone.
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    /// Calendar month (1..=12) of the expense in the local time zone.
    pub fn month(&self) -> u32 {
        self.date.with_timezone(&Local).month()
    }
}

/// Which expenses a summary covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryScope {
    #[default]
    All,
    Month(Month),
}

impl SummaryScope {
    /// Maps `0` to [`SummaryScope::All`] and `1..=12` to a calendar month.
    pub fn from_number(value: i64) -> Option<Self> {
        match value {
            0 => Some(SummaryScope::All),
            1..=12 => u8::try_from(value)
                .ok()
                .and_then(|number| Month::try_from(number).ok())
                .map(SummaryScope::Month),
            _ => None,
        }
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            SummaryScope::All => true,
            SummaryScope::Month(month) => expense.month() == month.number_from_month(),
        }
    }
}
