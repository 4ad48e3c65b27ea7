use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

const DEFAULT_MIN_AMOUNT: i64 = 10;
const DEFAULT_MAX_AMOUNT: i64 = 5000;

/// Parses the sender-side amount as typed into the wizard.
///
/// Accepts an optional sign, digits and at most one decimal point (`"100"`, `"99.5"`,
/// `"1."`, `".5"`). Range checks are left to [`AmountLimits`].
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
    }

    let (is_negative, unsigned) = match value.as_bytes()[0] {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value)
    };

    let parts: Vec<&str> = unsigned.split('.').collect();

    if parts.len() > 2 {
        return Err(AmountError::InvalidFormat("Value has more than one decimal point".to_string()));
    }

    let integer = parts[0];
    let fraction = parts.get(1).copied().unwrap_or("");

    if integer.is_empty() && fraction.is_empty() {
        return Err(AmountError::InvalidFormat("Value has no digits".to_string()));
    }

    if !integer.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(AmountError::InvalidFormat(format!("Value is not a number: {value}")));
    }

    let normalized = match (integer.is_empty(), fraction.is_empty()) {
        (true, _) => format!("0.{fraction}"),
        (false, true) => integer.to_string(),
        (false, false) => format!("{integer}.{fraction}")
    };

    let amount = Decimal::from_str(&normalized)?;

    Ok(if is_negative { -amount } else { amount })
}

/// Inclusive bounds a sender-side amount must respect before any fee is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AmountLimits {
    pub min: Decimal,
    pub max: Decimal
}

impl AmountLimits {
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && amount <= self.max
    }
}

impl Default for AmountLimits {
    fn default() -> Self {
        Self {
            min: Decimal::from(DEFAULT_MIN_AMOUNT),
            max: Decimal::from(DEFAULT_MAX_AMOUNT)
        }
    }
}
