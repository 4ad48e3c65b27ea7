use rust_decimal::Decimal;
use tracing::trace;

use crate::models::{DeliveryChannel, Field, PaymentMethod};
use crate::types::{parse_amount, CountryCode};

/// The in-progress transfer as the sender has filled it in so far.
///
/// Fields hold exactly what was written; nothing here validates. The wizard decides
/// what is acceptable when it evaluates a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferRequest {
    /// Destination country code, e.g. `GB`.
    pub destination_country: CountryCode,
    /// The sender-side amount in USD, as typed.
    pub amount_usd: String,
    pub delivery_channel: Option<DeliveryChannel>,
    pub recipient_name: String,
    /// A bank account or a phone number, depending on the delivery channel.
    pub recipient_details: String,
    pub payment_method: Option<PaymentMethod>,
    pub card_number: String,
    /// `MM/YY` or `MM/YYYY`.
    pub card_expiry: String,
    pub card_cvv: String,
    pub sender_mobile: String
}

impl TransferRequest {
    /// Writes a single field.
    ///
    /// Enumerated fields that do not name a known variant clear the selection instead of failing.
    pub fn set(&mut self, field: Field, value: &str) {
        trace!("Setting field [{field:?}]");

        match field {
            Field::DestinationCountry => self.destination_country = value.trim().to_string(),
            Field::AmountUsd => self.amount_usd = value.to_string(),
            Field::DeliveryChannel => self.delivery_channel = value.parse().ok(),
            Field::RecipientName => self.recipient_name = value.to_string(),
            Field::RecipientDetails => self.recipient_details = value.to_string(),
            Field::PaymentMethod => self.payment_method = value.parse().ok(),
            Field::CardNumber => self.card_number = value.to_string(),
            Field::CardExpiry => self.card_expiry = value.to_string(),
            Field::CardCvv => self.card_cvv = value.to_string(),
            Field::SenderMobile => self.sender_mobile = value.to_string()
        }
    }

    /// Reads a field back in its textual form.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::DestinationCountry => self.destination_country.clone(),
            Field::AmountUsd => self.amount_usd.clone(),
            Field::DeliveryChannel => self.delivery_channel.map(|c| c.display_name().to_string()).unwrap_or_default(),
            Field::RecipientName => self.recipient_name.clone(),
            Field::RecipientDetails => self.recipient_details.clone(),
            Field::PaymentMethod => self.payment_method.map(|m| m.display_name().to_string()).unwrap_or_default(),
            Field::CardNumber => self.card_number.clone(),
            Field::CardExpiry => self.card_expiry.clone(),
            Field::CardCvv => self.card_cvv.clone(),
            Field::SenderMobile => self.sender_mobile.clone()
        }
    }

    /// The amount as a number, when it parses as one.
    pub fn amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount_usd).ok()
    }

    /// A frozen copy for review and submission.
    pub fn snapshot(&self) -> TransferRequest {
        self.clone()
    }
}
