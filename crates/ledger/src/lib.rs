//! In-memory budget ledger.
//!
//! A [`Ledger`] owns an ordered sequence of income entries and an ordered
//! sequence of expense entries, and derives totals and net income on
//! demand. It is append-only, session-scoped, and has no persistence.
//!
//! Validation happens at the boundary, before an entry is created: see
//! [`validate`]. The ledger itself trusts its callers entirely.
pub use entry::{Entry, EntryId};
pub use error::InvalidEntry;
pub use money::{Money, ParseMoneyError};
pub use validate::{ValidatedItem, validate};

mod entry;
mod error;
mod money;
mod validate;

/// The in-memory collection of all entries plus aggregate computation.
///
/// Constructed empty at session start and owned by the application; not a
/// process-wide singleton.
#[derive(Debug, Default)]
pub struct Ledger {
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
    next_id: u64,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an income entry and returns it.
    ///
    /// The caller must have validated the input; no checks happen here.
    pub fn add_income(&mut self, description: impl Into<String>, amount: Money) -> &Entry {
        let entry = self.make_entry(description, amount);
        self.incomes.push(entry);
        // Just pushed, the sequence cannot be empty.
        &self.incomes[self.incomes.len() - 1]
    }

    /// Appends an expense entry and returns it.
    ///
    /// The caller must have validated the input; no checks happen here.
    pub fn add_expense(&mut self, description: impl Into<String>, amount: Money) -> &Entry {
        let entry = self.make_entry(description, amount);
        self.expenses.push(entry);
        &self.expenses[self.expenses.len() - 1]
    }

    /// Sum of all income amounts; [`Money::ZERO`] when empty.
    #[must_use]
    pub fn total_income(&self) -> Money {
        Self::total_of(&self.incomes)
    }

    /// Sum of all expense amounts; [`Money::ZERO`] when empty.
    #[must_use]
    pub fn total_expenses(&self) -> Money {
        Self::total_of(&self.expenses)
    }

    /// Total income minus total expenses.
    #[must_use]
    pub fn net_income(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Income entries in insertion order.
    #[must_use]
    pub fn incomes(&self) -> &[Entry] {
        &self.incomes
    }

    /// Expense entries in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[Entry] {
        &self.expenses
    }

    fn make_entry(&mut self, description: impl Into<String>, amount: Money) -> Entry {
        self.next_id += 1;
        Entry {
            id: EntryId::new(self.next_id),
            description: description.into(),
            amount,
        }
    }

    fn total_of(entries: &[Entry]) -> Money {
        entries
            .iter()
            .fold(Money::ZERO, |total, entry| total + entry.amount)
    }
}
