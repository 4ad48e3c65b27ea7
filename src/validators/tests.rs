use super::{
    format_card_number, mask_card_number, validate_bank_account, validate_card_number, validate_cvv,
    validate_expiry, validate_mobile_number, Clock, FixedClock
};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("Invalid test date"))
}

#[test]
fn test_card_number_passes_luhn_checksum() {
    assert!(validate_card_number("4539 1488 0343 6467"));
    assert!(validate_card_number("4539148803436467"));
    assert!(validate_card_number("4111111111111111"));
    assert!(validate_card_number("378282246310005"));
}

#[test]
fn test_card_number_fails_luhn_checksum() {
    assert!(!validate_card_number("4539 1488 0343 6468"));
    assert!(!validate_card_number("4111111111111112"));
}

#[test]
fn test_card_number_rejects_bad_lengths_and_characters() {
    assert!(!validate_card_number(""));
    assert!(!validate_card_number("424242424242"));
    assert!(!validate_card_number("42424242424242424242"));
    assert!(!validate_card_number("4539-1488-0343-6467"));
    assert!(!validate_card_number("4539 1488 0343 646a"));
}

#[test]
fn test_expiry_accepts_current_and_future_months() -> Result<()> {
    let today = date(2026, 10, 16)?;

    assert!(validate_expiry("10/26", today));
    assert!(validate_expiry("10/2026", today));
    assert!(validate_expiry("11/26", today));
    assert!(validate_expiry("1/27", today));
    assert!(validate_expiry(" 03 / 2031 ", today));

    Ok(())
}

#[test]
fn test_expiry_rejects_past_months() -> Result<()> {
    let today = date(2026, 10, 16)?;

    assert!(!validate_expiry("09/26", today));
    assert!(!validate_expiry("12/25", today));
    assert!(!validate_expiry("10/2025", today));

    Ok(())
}

#[test]
fn test_expiry_rejects_malformed_input() -> Result<()> {
    let today = date(2026, 10, 16)?;

    assert!(!validate_expiry("13/25", today));
    assert!(!validate_expiry("13/30", today));
    assert!(!validate_expiry("00/30", today));
    assert!(!validate_expiry("1230", today));
    assert!(!validate_expiry("12/", today));
    assert!(!validate_expiry("/30", today));
    assert!(!validate_expiry("12/30/1", today));
    assert!(!validate_expiry("12/203", today));
    assert!(!validate_expiry("ab/cd", today));
    assert!(!validate_expiry("", today));

    Ok(())
}

#[test]
fn test_expiry_compares_at_month_granularity() -> Result<()> {
    let last_day = FixedClock(date(2026, 10, 31)?);
    let first_day = FixedClock(date(2026, 11, 1)?);

    assert!(validate_expiry("10/26", last_day.today()));
    assert!(!validate_expiry("10/26", first_day.today()));

    Ok(())
}

#[test]
fn test_expiry_reads_four_digit_years_literally() -> Result<()> {
    let today = date(2026, 10, 16)?;

    assert!(!validate_expiry("12/0030", today));
    assert!(!validate_expiry("12/0099", today));
    assert!(validate_expiry("12/30", today));

    Ok(())
}

#[test]
fn test_card_number_rejects_non_ascii_digits() {
    assert!(!validate_card_number("٤٥٣٩١٤٨٨٠٣٤٣٦٤٦٧"));
}

#[test]
fn test_cvv_accepts_three_or_four_digits() {
    assert!(validate_cvv("123"));
    assert!(validate_cvv("1234"));
    assert!(!validate_cvv("12"));
    assert!(!validate_cvv("12345"));
    assert!(!validate_cvv("abcd"));
    assert!(!validate_cvv(" 123"));
    assert!(!validate_cvv("١٢٣"));
    assert!(!validate_cvv("１２３４"));
}

#[test]
fn test_bank_account_accepts_six_to_twenty_digits() {
    assert!(validate_bank_account("123456"));
    assert!(validate_bank_account("12345678901234567890"));
    assert!(!validate_bank_account("12345"));
    assert!(!validate_bank_account("123456789012345678901"));
    assert!(!validate_bank_account("12345678901234567890X"));
    assert!(!validate_bank_account(""));
    assert!(!validate_bank_account("١٢٣٤٥٦"));
}

#[test]
fn test_mobile_number_requires_international_format() {
    assert!(validate_mobile_number("+447911123456"));
    assert!(validate_mobile_number("+27 71 123 4567"));
    assert!(!validate_mobile_number(""));
    assert!(!validate_mobile_number("07911123456"));
    assert!(!validate_mobile_number("+44 123"));
    assert!(!validate_mobile_number("not a number"));
}

#[test]
fn test_card_number_formatting_groups_digits() {
    assert_eq!(format_card_number("4539148803436467"), "4539 1488 0343 6467");
    assert_eq!(format_card_number("4539-1488-03"), "4539 1488 03");
    assert_eq!(format_card_number("4539"), "4539");
    assert_eq!(format_card_number(""), "");
}

#[test]
fn test_card_number_masking_keeps_last_four_digits() {
    assert_eq!(mask_card_number("4539 1488 0343 6467"), "**** **** **** 6467");
    assert_eq!(mask_card_number("123"), "123");
}
