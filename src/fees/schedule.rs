use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::fees::FeeError;
use crate::types::CurrencyCode;

const DEFAULT_FEE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
const GBP_FEE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
const ZAR_FEE_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

fn default_fee_rate() -> Decimal {
    DEFAULT_FEE_RATE
}

/// Fee fractions keyed by target currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeeSchedule {
    /// Applied to any currency without its own entry.
    #[serde(default = "default_fee_rate")]
    pub default_rate: Decimal,
    #[serde(default)]
    pub rates: HashMap<CurrencyCode, Decimal>
}

impl FeeSchedule {
    pub fn new(default_rate: Decimal, rates: HashMap<CurrencyCode, Decimal>) -> Self {
        Self { default_rate, rates }
    }

    pub fn fee_rate(&self, currency: &str) -> Decimal {
        self.rates.get(currency).copied().unwrap_or(self.default_rate)
    }

    pub fn validate(&self) -> Result<(), FeeError> {
        let default_entry = ("default".to_string(), self.default_rate);
        let entries = self.rates.iter().map(|(currency, rate)| (currency.clone(), *rate));

        for (currency, rate) in std::iter::once(default_entry).chain(entries) {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(FeeError::RateOutOfRange { currency, rate });
            }
        }

        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        let rates = HashMap::from([
            ("GBP".to_string(), GBP_FEE_RATE),
            ("ZAR".to_string(), ZAR_FEE_RATE)
        ]);

        Self::new(DEFAULT_FEE_RATE, rates)
    }
}
