//! The module contains the `Entry` type representing one budget line item.
//!
//! Both income and expense items are represented by the `Entry` type; the
//! ledger keeps them in two separate sequences.
use core::fmt;

use crate::Money;

/// Identifier of an [`Entry`], unique within a session.
///
/// Ids come from a counter owned by the ledger, so two entries created in
/// the same instant never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single income or expense line item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub description: String,
    pub amount: Money,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.description)
    }
}
