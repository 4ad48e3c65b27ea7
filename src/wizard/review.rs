use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::fees::{FeeEngine, Quote};
use crate::models::{Country, CountryCatalog, DeliveryChannel, PaymentMethod, TransferRequest};
use crate::rates::RateLookup;
use crate::types::{CurrencyCode, TransferId, SOURCE_CURRENCY};
use crate::validators::mask_card_number;
use crate::wizard::{WizardError, WizardStep};

/// Read-only figures and details shown before the sender confirms.
///
/// Always assembled fresh from the request and the current rates, so a refresh that lands
/// while the sender is reviewing is reflected the next time the summary is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub destination: Country,
    pub amount_usd: Decimal,
    pub fee_usd: Decimal,
    /// What the sender pays in total; the fee is taken out of the amount, not added on top.
    pub total_usd: Decimal,
    pub exchange_rate: Option<Decimal>,
    /// `None` when no received amount can be computed.
    pub received: Option<Decimal>,
    pub delivery_channel: DeliveryChannel,
    pub recipient_name: String,
    pub recipient_detail_label: &'static str,
    pub recipient_detail: String,
    pub payment_method: PaymentMethod,
    /// Masked card number or the sender's mobile number.
    pub payment_detail: String
}

impl ReviewSummary {
    pub fn assemble<R: RateLookup + ?Sized>(
        request: &TransferRequest,
        catalog: &CountryCatalog,
        fee_engine: &FeeEngine,
        rates: &R
    ) -> Result<Self, WizardError> {
        let destination = catalog
            .find(&request.destination_country)
            .cloned()
            .ok_or_else(|| WizardError::UnknownCountry(request.destination_country.clone()))?;

        let amount_usd = request.amount().ok_or(WizardError::IncompleteStep(WizardStep::DestinationAmount))?;
        let delivery_channel = request.delivery_channel.ok_or(WizardError::IncompleteStep(WizardStep::DeliveryChannel))?;
        let payment_method = request.payment_method.ok_or(WizardError::IncompleteStep(WizardStep::RecipientPayment))?;

        let fee_usd = fee_engine.calculate_fee(amount_usd, &destination.currency);
        let received = match fee_engine.quote(amount_usd, &destination.currency, rates) {
            Quote::Valid { received, .. } => Some(received),
            Quote::InvalidAmount | Quote::RateUnavailable => None
        };

        let payment_detail = match payment_method {
            PaymentMethod::CreditCard => mask_card_number(&request.card_number),
            PaymentMethod::MobileMoney => request.sender_mobile.trim().to_string()
        };

        Ok(Self {
            exchange_rate: rates.get_rate(&destination.currency),
            destination,
            amount_usd,
            fee_usd,
            total_usd: amount_usd,
            received,
            delivery_channel,
            recipient_name: request.recipient_name.trim().to_string(),
            recipient_detail_label: delivery_channel.recipient_detail_label(),
            recipient_detail: request.recipient_details.trim().to_string(),
            payment_method,
            payment_detail
        })
    }

    pub fn target_currency(&self) -> &CurrencyCode {
        &self.destination.currency
    }
}

impl Display for ReviewSummary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let currency = self.target_currency();

        writeln!(formatter, "You send: {SOURCE_CURRENCY} {:.2}", self.amount_usd)?;
        writeln!(formatter, "Transfer fee: - {SOURCE_CURRENCY} {:.2}", self.fee_usd)?;
        writeln!(formatter, "Total amount: {SOURCE_CURRENCY} {:.2}", self.total_usd)?;

        match self.exchange_rate {
            Some(rate) => writeln!(formatter, "Exchange rate: 1 {SOURCE_CURRENCY} = {rate:.4} {currency}")?,
            None => writeln!(formatter, "Exchange rate: unavailable")?
        }

        match self.received {
            Some(received) => writeln!(formatter, "Recipient gets: {currency} {received}")?,
            None => writeln!(formatter, "Recipient gets: invalid amount")?
        }

        writeln!(formatter, "Destination: {}", self.destination.name)?;
        writeln!(formatter, "Delivery method: {}", self.delivery_channel)?;
        writeln!(formatter, "Recipient: {}", self.recipient_name)?;
        writeln!(formatter, "{}: {}", self.recipient_detail_label, self.recipient_detail)?;
        write!(formatter, "Payment method: {} ({})", self.payment_method, self.payment_detail)
    }
}

/// A confirmed transfer, kept in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTransfer {
    pub transfer_id: TransferId,
    pub request: TransferRequest,
    pub summary: ReviewSummary,
    pub submitted_at: DateTime<Utc>
}
