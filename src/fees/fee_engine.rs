use rust_decimal::Decimal;
use tracing::{debug, error};

use crate::fees::FeeSchedule;
use crate::rates::RateLookup;
use crate::types::AmountLimits;

/// The figures shown to the sender for a given amount and destination currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Valid {
        /// Fee in USD, rounded up to a whole dollar.
        fee: Decimal,
        /// Units of target currency per 1 USD.
        rate: Decimal,
        /// USD left after the fee.
        net: Decimal,
        /// Target currency delivered, rounded up to a whole unit.
        received: Decimal
    },
    InvalidAmount,
    RateUnavailable
}

impl Quote {
    pub fn is_valid(&self) -> bool {
        matches!(self, Quote::Valid { .. })
    }

    /// The received amount, or `0` when nothing could be computed.
    pub fn received_or_zero(&self) -> Decimal {
        match self {
            Quote::Valid { received, .. } => *received,
            _ => Decimal::ZERO
        }
    }
}

/// Computes transfer fees and recipient-side amounts.
///
/// Rates are passed in per call so the engine never depends on where they were fetched.
#[derive(Debug, Clone, Default)]
pub struct FeeEngine {
    schedule: FeeSchedule,
    limits: AmountLimits
}

impl FeeEngine {
    pub fn new(schedule: FeeSchedule, limits: AmountLimits) -> Self {
        Self { schedule, limits }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub fn limits(&self) -> AmountLimits {
        self.limits
    }

    /// `ceil(amount * fee_rate)`; the fee is never rounded in the sender's favour.
    pub fn calculate_fee(&self, amount_usd: Decimal, target_currency: &str) -> Decimal {
        let fee_rate = self.schedule.fee_rate(target_currency);

        match amount_usd.checked_mul(fee_rate) {
            Some(fee) => fee.ceil().normalize(),
            None => {
                error!("Fee overflow for amount [{amount_usd}] at rate [{fee_rate}]");
                Decimal::ZERO
            }
        }
    }

    /// The received amount, or `0` when the amount is out of range or no rate is available.
    pub fn calculate_received_amount<R: RateLookup + ?Sized>(&self, amount_usd: Decimal, target_currency: &str, rates: &R) -> Decimal {
        self.quote(amount_usd, target_currency, rates).received_or_zero()
    }

    pub fn quote<R: RateLookup + ?Sized>(&self, amount_usd: Decimal, target_currency: &str, rates: &R) -> Quote {
        if !self.limits.contains(amount_usd) {
            return Quote::InvalidAmount;
        }

        let fee = self.calculate_fee(amount_usd, target_currency);
        let net = amount_usd - fee;

        if net <= Decimal::ZERO {
            debug!("Fee [{fee}] consumes the whole amount [{amount_usd}]");
            return Quote::InvalidAmount;
        }

        let Some(rate) = rates.get_rate(target_currency) else {
            debug!("No rate available for [{target_currency}]");
            return Quote::RateUnavailable;
        };

        let Some(received) = net.checked_mul(rate) else {
            error!("Received amount overflow for net [{net}] at rate [{rate}]");
            return Quote::RateUnavailable;
        };

        Quote::Valid {
            fee,
            rate,
            net,
            received: received.ceil().normalize()
        }
    }
}
