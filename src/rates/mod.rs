mod errors;
mod provider;
mod sources;

use std::collections::HashMap;
use std::future::Future;

use rust_decimal::Decimal;

use crate::types::CurrencyCode;

pub use errors::RateSourceError;
pub use provider::{RateSnapshot, RatesProvider};
pub use sources::{CsvRateSource, StaticRateSource};

/// Read access to exchange rates, in units of the target currency per 1 USD.
///
/// A missing or non-positive rate is reported as `None`; callers must not substitute 1:1.
pub trait RateLookup {
    fn get_rate(&self, currency: &str) -> Option<Decimal>;
}

/// Where fresh rates come from. Fetching is owned by the source; the wizard only reads snapshots.
pub trait RateSource: Send + Sync + 'static {
    fn fetch_rates(&self) -> impl Future<Output = Result<HashMap<CurrencyCode, Decimal>, RateSourceError>> + Send;
}
