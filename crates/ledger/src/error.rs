//! The module contains the error reported when user input is rejected.
//!
//! The causes are:
//!
//! - [`EmptyDescription`] when the description trims to nothing.
//! - [`AmountNotANumber`] when the amount does not parse.
//! - [`AmountNotPositive`] when the amount is zero or negative.
//!
//! [`EmptyDescription`]: InvalidEntry::EmptyDescription
//! [`AmountNotANumber`]: InvalidEntry::AmountNotANumber
//! [`AmountNotPositive`]: InvalidEntry::AmountNotPositive
use thiserror::Error;

/// Why a submitted line item was rejected.
///
/// The `Display` messages are the user-facing notice text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEntry {
    #[error("Please enter a description")]
    EmptyDescription,
    #[error("Please enter a valid number for the amount")]
    AmountNotANumber,
    #[error("Please enter an amount greater than 0")]
    AmountNotPositive,
}
