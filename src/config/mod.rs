mod errors;

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::fees::{FeeEngine, FeeSchedule};
use crate::models::CountryCatalog;
use crate::rates::RatesProvider;
use crate::types::{AmountLimits, CurrencyCode};

pub use errors::ConfigError;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_ENV: &str = "TRANSFER_WIZARD_CONFIG";

const GBP_FALLBACK_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 1);
const ZAR_FALLBACK_RATE: Decimal = Decimal::from_parts(185, 0, 0, false, 1);

/// Static data the wizard runs on. Any section left out of the file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub countries: CountryCatalog,
    pub fee_schedule: FeeSchedule,
    pub limits: AmountLimits,
    /// Rates served until the first refresh, and whenever a refresh fails.
    pub fallback_rates: HashMap<CurrencyCode, Decimal>
}

impl WizardConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: WizardConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Reads the file named by [`CONFIG_ENV`], or falls back to the defaults when it is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(CONFIG_ENV) {
            Ok(path) => {
                info!("Loading configuration from [{path}]");
                Self::from_file(path)
            },
            Err(_) => Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countries.iter().next().is_none() {
            return Err(ConfigError::NoCountries);
        }

        if self.limits.min < Decimal::ZERO || self.limits.min > self.limits.max {
            return Err(ConfigError::InvalidLimits {
                min: self.limits.min,
                max: self.limits.max
            });
        }

        if let Some((currency, rate)) = self.fallback_rates.iter().find(|(_, rate)| **rate <= Decimal::ZERO) {
            return Err(ConfigError::InvalidFallbackRate {
                currency: currency.clone(),
                rate: *rate
            });
        }

        self.fee_schedule.validate()?;

        Ok(())
    }

    pub fn fee_engine(&self) -> FeeEngine {
        FeeEngine::new(self.fee_schedule.clone(), self.limits)
    }

    pub fn rates_provider(&self) -> RatesProvider {
        RatesProvider::new(self.countries.currencies(), self.fallback_rates.clone())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            countries: CountryCatalog::default(),
            fee_schedule: FeeSchedule::default(),
            limits: AmountLimits::default(),
            fallback_rates: HashMap::from([
                ("GBP".to_string(), GBP_FALLBACK_RATE),
                ("ZAR".to_string(), ZAR_FALLBACK_RATE)
            ])
        }
    }
}
