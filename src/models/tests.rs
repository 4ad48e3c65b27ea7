use super::{CountryCatalog, DeliveryChannel, Field, PaymentMethod, RecipientRequirement, TransferRequest};

use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_default_request_is_empty() {
    let request = TransferRequest::default();

    assert!(request.destination_country.is_empty());
    assert!(request.amount_usd.is_empty());
    assert!(request.delivery_channel.is_none());
    assert!(request.payment_method.is_none());
    assert!(request.amount().is_none());
}

#[test]
fn test_set_writes_fields_without_validation() -> Result<()> {
    let mut request = TransferRequest::default();

    request.set(Field::DestinationCountry, "GB");
    request.set(Field::AmountUsd, "7");
    request.set(Field::CardCvv, "not-a-cvv");
    request.set(Field::DeliveryChannel, "bank-deposit");
    request.set(Field::PaymentMethod, "credit-card");

    assert_eq!(request.destination_country, "GB");
    assert_eq!(request.amount(), Some(Decimal::from_str("7")?));
    assert_eq!(request.card_cvv, "not-a-cvv");
    assert_eq!(request.delivery_channel, Some(DeliveryChannel::BankDeposit));
    assert_eq!(request.payment_method, Some(PaymentMethod::CreditCard));

    Ok(())
}

#[test]
fn test_unknown_selection_clears_the_previous_choice() {
    let mut request = TransferRequest::default();

    request.set(Field::DeliveryChannel, "mpesa");
    assert_eq!(request.delivery_channel, Some(DeliveryChannel::MPesa));

    request.set(Field::DeliveryChannel, "carrier-pigeon");
    assert!(request.delivery_channel.is_none());
}

#[test]
fn test_snapshot_is_detached_from_later_edits() {
    let mut request = TransferRequest::default();
    request.set(Field::RecipientName, "Jane Doe");

    let snapshot = request.snapshot();
    request.set(Field::RecipientName, "John Doe");

    assert_eq!(snapshot.recipient_name, "Jane Doe");
    assert_eq!(request.get(Field::RecipientName), "John Doe");
}

#[test]
fn test_field_names_parse_from_kebab_case() -> Result<()> {
    assert_eq!(Field::from_str("amount-usd")?, Field::AmountUsd);
    assert_eq!(Field::from_str(" card-cvv ")?, Field::CardCvv);
    assert!(Field::from_str("amountUSD").is_err());

    Ok(())
}

#[test]
fn test_delivery_channel_determines_recipient_identifier() {
    assert_eq!(DeliveryChannel::BankDeposit.recipient_requirement(), RecipientRequirement::BankAccount);
    assert_eq!(DeliveryChannel::EcoCash.recipient_requirement(), RecipientRequirement::PhoneNumber);
    assert_eq!(DeliveryChannel::CashPickup.recipient_requirement(), RecipientRequirement::PhoneNumber);
    assert_eq!(DeliveryChannel::MPesa.recipient_detail_label(), "Mobile Number");
    assert_eq!(DeliveryChannel::CashPickup.recipient_detail_label(), "Contact Info");
}

#[test]
fn test_catalog_finds_countries_case_insensitively() {
    let catalog = CountryCatalog::default();

    assert_eq!(catalog.find("gb").map(|c| c.currency.as_str()), Some("GBP"));
    assert_eq!(catalog.find("ZA").map(|c| c.name.as_str()), Some("South Africa"));
    assert!(catalog.find("US").is_none());
    assert_eq!(catalog.currencies(), vec!["ZAR".to_string(), "GBP".to_string()]);
}
