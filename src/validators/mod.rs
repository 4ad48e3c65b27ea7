//! Field validators for the transfer wizard.
//!
//! Every function here is total: malformed input yields `false` (or, for the formatting
//! helpers, a best-effort string), never an error.

mod card;
mod clock;
mod contact;
#[cfg(test)]
mod tests;

use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::Field;

pub use card::{format_card_number, mask_card_number, validate_card_number, validate_cvv, validate_expiry};
pub use clock::{Clock, FixedClock, SystemClock};
pub use contact::{validate_bank_account, validate_mobile_number};

pub const INVALID_CARD_NUMBER: &str = "Invalid card number";
pub const INVALID_EXPIRY: &str = "Invalid expiry date";
pub const INVALID_CVV: &str = "Invalid CVV";
pub const INVALID_MOBILE_NUMBER: &str = "Invalid mobile number. Include country code";
pub const INVALID_BANK_ACCOUNT: &str = "Invalid bank account";
pub const INVALID_AMOUNT: &str = "Enter a valid amount";

/// An inline message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into()
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{:?}] {}", self.field, self.message)
    }
}
