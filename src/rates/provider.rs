use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::spawn;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::rates::{RateLookup, RateSource};
use crate::types::CurrencyCode;

/// An immutable set of rates as of one refresh.
#[derive(Debug, Clone, Default)]
pub struct RateSnapshot {
    rates: HashMap<CurrencyCode, Decimal>,
    /// Why the last refresh fell back to the fallback table, if it did.
    error: Option<String>,
    /// When the rates were fetched; `None` for the fallback table.
    fetched_at: Option<DateTime<Utc>>
}

impl RateSnapshot {
    pub fn new(rates: HashMap<CurrencyCode, Decimal>) -> Self {
        Self {
            rates,
            error: None,
            fetched_at: None
        }
    }

    pub fn rates(&self) -> &HashMap<CurrencyCode, Decimal> {
        &self.rates
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

impl RateLookup for RateSnapshot {
    fn get_rate(&self, currency: &str) -> Option<Decimal> {
        self.rates.get(currency).copied().filter(|rate| *rate > Decimal::ZERO)
    }
}

/// Holds the latest [`RateSnapshot`] for any number of readers.
///
/// A refresh builds a complete snapshot and swaps it in; readers never see a partial update
/// and never wait on a refresh in flight.
pub struct RatesProvider {
    snapshot: ArcSwap<RateSnapshot>,
    loading: AtomicBool,
    supported: Vec<CurrencyCode>,
    fallback: HashMap<CurrencyCode, Decimal>
}

impl RatesProvider {
    /// Starts out serving the fallback table until the first refresh lands.
    pub fn new(supported: Vec<CurrencyCode>, fallback: HashMap<CurrencyCode, Decimal>) -> Self {
        let initial = RateSnapshot::new(fallback.clone());

        Self {
            snapshot: ArcSwap::from_pointee(initial),
            loading: AtomicBool::new(false),
            supported,
            fallback
        }
    }

    pub fn snapshot(&self) -> Arc<RateSnapshot> {
        self.snapshot.load_full()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn error(&self) -> Option<String> {
        self.snapshot.load().error.clone()
    }

    /// Fetches from `source` and publishes the result.
    ///
    /// A failed fetch publishes the fallback table together with the failure message.
    pub async fn refresh<S: RateSource>(&self, source: &S) {
        self.loading.store(true, Ordering::Release);

        let snapshot = match source.fetch_rates().await {
            Ok(fetched) => {
                debug!("Fetched {} rates", fetched.len());
                self.select_supported(&fetched)
            },
            Err(error) => {
                warn!("Rate refresh failed, serving fallback rates: {error}");
                RateSnapshot {
                    rates: self.fallback.clone(),
                    error: Some(error.to_string()),
                    fetched_at: None
                }
            }
        };

        self.snapshot.store(Arc::new(snapshot));
        self.loading.store(false, Ordering::Release);
    }

    /// Runs [`RatesProvider::refresh`] on its own task.
    pub fn spawn_refresh<S: RateSource>(self: &Arc<Self>, source: Arc<S>) -> JoinHandle<()> {
        let provider = Arc::clone(self);

        spawn(async move {
            provider.refresh(source.as_ref()).await;
        })
    }

    fn select_supported(&self, fetched: &HashMap<CurrencyCode, Decimal>) -> RateSnapshot {
        let mut rates = HashMap::new();

        for currency in &self.supported {
            let fresh = fetched.get(currency).copied().filter(|rate| *rate > Decimal::ZERO);

            match fresh.or_else(|| self.fallback.get(currency).copied()) {
                Some(rate) => {
                    rates.insert(currency.clone(), rate);
                },
                None => warn!("No rate available for [{currency}]")
            }
        }

        RateSnapshot {
            rates,
            error: None,
            fetched_at: Some(Utc::now())
        }
    }
}

impl RateLookup for RatesProvider {
    fn get_rate(&self, currency: &str) -> Option<Decimal> {
        self.snapshot.load().get_rate(currency)
    }
}
