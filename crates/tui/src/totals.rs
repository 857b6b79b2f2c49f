//! Rescan-based total recalculation.
//!
//! Displayed totals are derived from whatever is currently typed in the
//! rendered amount fields, not from the ledger's stored entries. This is
//! what makes in-place edits to an already-added row show up in the totals
//! even though the ledger has no update operation. Net income is in turn
//! re-derived from the two displayed total strings.

use ledger::Money;

/// Sums every rendered amount field that currently parses as money.
///
/// Fields that do not parse (mid-edit, emptied, garbage) contribute
/// nothing and re-enter the total once they parse again.
pub fn rescan<'a, I>(fields: I) -> Money
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .fold(Money::ZERO, |total, field| match field.parse::<Money>() {
            Ok(amount) => total + amount,
            Err(_) => total,
        })
}

/// Re-derives net income from the two displayed total strings.
pub fn net_from_displays(income: &str, expenses: &str) -> Money {
    parse_display(income) - parse_display(expenses)
}

/// Parses a `$`-formatted display string back into money.
///
/// Display strings are produced by [`Money`]'s `Display` impl, so parsing
/// only fails if a caller hands in something that was never a total; that
/// reads as zero rather than poisoning the net figure.
pub fn parse_display(display: &str) -> Money {
    let trimmed = display.trim();
    let bare = trimmed.strip_prefix('$').unwrap_or(trimmed);
    bare.parse().unwrap_or(Money::ZERO)
}
