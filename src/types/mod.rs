mod amount;
mod errors;
#[cfg(test)]
mod tests;

pub use amount::{parse_amount, AmountLimits};
pub use errors::AmountError;

pub type CountryCode = String;
pub type CurrencyCode = String;
pub type TransferId = u32;

/// Every transfer is funded in US dollars.
pub const SOURCE_CURRENCY: &str = "USD";
