use rust_decimal::Decimal;
use thiserror::Error;

use crate::fees::FeeError;
use crate::types::CurrencyCode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Config error: {0}")]
    Fee(#[from] FeeError),
    #[error("Config error: At least one destination country is required")]
    NoCountries,
    #[error("Config error: Amount limits [{min}, {max}] are invalid")]
    InvalidLimits {
        min: Decimal,
        max: Decimal
    },
    #[error("Config error: Fallback rate [{rate}] for [{currency}] must be positive")]
    InvalidFallbackRate {
        currency: CurrencyCode,
        rate: Decimal
    }
}
