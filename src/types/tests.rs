use super::{parse_amount, AmountLimits};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("100", "100"),
        ("99.99", "99.99"),
        ("  10  ", "10"),
        ("+25.5", "25.5"),
        ("-3", "-3"),
        ("1.", "1"),
        (".5", "0.5"),
        ("5000.0001", "5000.0001"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(parse_amount(input_string)?, Decimal::from_str(expected_output)?);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("   ").is_err());
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("12abc").is_err());
    assert!(parse_amount("1.2.3").is_err());
    assert!(parse_amount(".").is_err());
    assert!(parse_amount("-").is_err());
    assert!(parse_amount("1e3").is_err());
}

#[test]
fn test_amount_rejects_values_beyond_decimal_precision() {
    assert!(parse_amount("99999999999999999999999999999999").is_err());
}

#[test]
fn test_amount_limits_are_inclusive() -> Result<()> {
    let limits = AmountLimits::default();

    assert!(!limits.contains(Decimal::from_str("9.99")?));
    assert!(limits.contains(Decimal::from(10)));
    assert!(limits.contains(Decimal::from(5000)));
    assert!(!limits.contains(Decimal::from_str("5000.01")?));

    Ok(())
}
