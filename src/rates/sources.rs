use std::collections::HashMap;
use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::task::spawn_blocking;
use tracing::error;

use crate::rates::{RateSource, RateSourceError};
use crate::types::CurrencyCode;

#[derive(Debug, Deserialize)]
struct RateRecord {
    currency: CurrencyCode,
    rate: Decimal
}

/// Reads `currency,rate` rows from a CSV file.
pub struct CsvRateSource {
    path: PathBuf
}

impl CsvRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RateSource for CsvRateSource {
    fn fetch_rates(&self) -> impl Future<Output = Result<HashMap<CurrencyCode, Decimal>, RateSourceError>> + Send {
        let path = self.path.clone();

        async move {
            spawn_blocking(move || read_rates(&path))
                .await
                .map_err(|error| RateSourceError::Task(error.to_string()))?
        }
    }
}

fn read_rates(path: &Path) -> Result<HashMap<CurrencyCode, Decimal>, RateSourceError> {
    let file = File::open(path)?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rates = HashMap::new();

    for result in reader.deserialize::<RateRecord>() {
        match result {
            Ok(record) => {
                rates.insert(record.currency.to_uppercase(), record.rate);
            },
            Err(error) => {
                error!("Rate CSV deserialization error: {error}");
            }
        }
    }

    Ok(rates)
}

/// Serves a fixed table, or a fixed failure.
pub struct StaticRateSource {
    outcome: Result<HashMap<CurrencyCode, Decimal>, String>
}

impl StaticRateSource {
    pub fn new(rates: HashMap<CurrencyCode, Decimal>) -> Self {
        Self { outcome: Ok(rates) }
    }

    pub fn failing(message: &str) -> Self {
        Self { outcome: Err(message.to_string()) }
    }
}

impl RateSource for StaticRateSource {
    fn fetch_rates(&self) -> impl Future<Output = Result<HashMap<CurrencyCode, Decimal>, RateSourceError>> + Send {
        let outcome = self.outcome.clone().map_err(RateSourceError::Unavailable);

        async move { outcome }
    }
}
