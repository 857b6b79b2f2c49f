//! Boundary validation for new line items.
//!
//! The ledger itself trusts its callers; every entry must pass through
//! [`validate`] before it is created. Rules are checked in a fixed order
//! and the first failure wins, so each rejection names exactly one cause.
use crate::{InvalidEntry, Money};

/// A (description, amount) pair that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedItem {
    pub description: String,
    pub amount: Money,
}

/// Gates entry creation.
///
/// Checks, in order:
/// 1. the description trims to a non-empty string;
/// 2. the amount parses as [`Money`];
/// 3. the amount is strictly greater than zero.
///
/// On success returns the trimmed description and the parsed amount.
pub fn validate(description: &str, amount: &str) -> Result<ValidatedItem, InvalidEntry> {
    let description = description.trim();
    if description.is_empty() {
        return Err(InvalidEntry::EmptyDescription);
    }

    let amount: Money = amount
        .parse()
        .map_err(|_| InvalidEntry::AmountNotANumber)?;

    if !amount.is_positive() {
        return Err(InvalidEntry::AmountNotPositive);
    }

    Ok(ValidatedItem {
        description: description.to_string(),
        amount,
    })
}
