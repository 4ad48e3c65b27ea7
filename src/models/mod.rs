mod country;
mod errors;
#[cfg(test)]
mod tests;
mod transfer_request;

use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use country::{Country, CountryCatalog};
pub use errors::ModelError;
pub use transfer_request::TransferRequest;

/// Every writable field of a [`TransferRequest`], named the way session scripts refer to them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    DestinationCountry,
    AmountUsd,
    DeliveryChannel,
    RecipientName,
    RecipientDetails,
    PaymentMethod,
    CardNumber,
    CardExpiry,
    CardCvv,
    SenderMobile
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "destination-country" => Ok(Field::DestinationCountry),
            "amount-usd" => Ok(Field::AmountUsd),
            "delivery-channel" => Ok(Field::DeliveryChannel),
            "recipient-name" => Ok(Field::RecipientName),
            "recipient-details" => Ok(Field::RecipientDetails),
            "payment-method" => Ok(Field::PaymentMethod),
            "card-number" => Ok(Field::CardNumber),
            "card-expiry" => Ok(Field::CardExpiry),
            "card-cvv" => Ok(Field::CardCvv),
            "sender-mobile" => Ok(Field::SenderMobile),
            other => Err(ModelError::UnknownField(other.to_string()))
        }
    }
}

/// How the recipient collects the money.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryChannel {
    CashPickup,
    BankDeposit,
    #[serde(rename = "ecocash")]
    EcoCash,
    #[serde(rename = "mpesa")]
    MPesa,
    MobileMoney
}

/// Which identifier `recipient_details` must hold for a channel.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RecipientRequirement {
    BankAccount,
    PhoneNumber
}

impl DeliveryChannel {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryChannel::CashPickup => "Cash Pickup",
            DeliveryChannel::BankDeposit => "Bank Deposit",
            DeliveryChannel::EcoCash => "EcoCash",
            DeliveryChannel::MPesa => "M-Pesa",
            DeliveryChannel::MobileMoney => "Mobile Money"
        }
    }

    pub fn recipient_detail_label(&self) -> &'static str {
        match self {
            DeliveryChannel::BankDeposit => "Bank Account",
            DeliveryChannel::EcoCash | DeliveryChannel::MPesa | DeliveryChannel::MobileMoney => "Mobile Number",
            DeliveryChannel::CashPickup => "Contact Info"
        }
    }

    /// Cash pickup is collected in person, so the recipient is identified by phone like the wallets.
    pub fn recipient_requirement(&self) -> RecipientRequirement {
        match self {
            DeliveryChannel::BankDeposit => RecipientRequirement::BankAccount,
            _ => RecipientRequirement::PhoneNumber
        }
    }
}

impl FromStr for DeliveryChannel {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "cash-pickup" => Ok(DeliveryChannel::CashPickup),
            "bank-deposit" => Ok(DeliveryChannel::BankDeposit),
            "ecocash" => Ok(DeliveryChannel::EcoCash),
            "mpesa" => Ok(DeliveryChannel::MPesa),
            "mobile-money" => Ok(DeliveryChannel::MobileMoney),
            other => Err(ModelError::UnknownDeliveryChannel(other.to_string()))
        }
    }
}

impl Display for DeliveryChannel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.display_name())
    }
}

/// The sender-side instrument funding the transfer.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    MobileMoney
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit/Debit Card",
            PaymentMethod::MobileMoney => "Mobile Money"
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "credit-card" => Ok(PaymentMethod::CreditCard),
            "mobile-money" => Ok(PaymentMethod::MobileMoney),
            other => Err(ModelError::UnknownPaymentMethod(other.to_string()))
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.display_name())
    }
}
