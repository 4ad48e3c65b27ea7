use std::sync::LazyLock;

use regex::Regex;

static BANK_ACCOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{6,20}$").expect("Invalid bank account regex")
});

pub fn validate_bank_account(account: &str) -> bool {
    BANK_ACCOUNT.is_match(account)
}

/// Validates against the international numbering plan.
///
/// No default region is assumed, so the number must carry its `+<country code>` prefix.
pub fn validate_mobile_number(number: &str) -> bool {
    let number = number.trim();

    if number.is_empty() {
        return false;
    }

    match phonenumber::parse(None, number) {
        Ok(parsed) => phonenumber::is_valid(&parsed),
        Err(_) => false
    }
}
