use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::CurrencyCode;

#[derive(Debug, Error)]
pub enum FeeError {
    #[error("Fee fraction [{rate}] for [{currency}] is outside [0, 1]")]
    RateOutOfRange {
        currency: CurrencyCode,
        rate: Decimal
    }
}
