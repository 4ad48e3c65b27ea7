use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static CARD_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{13,19}$").expect("Invalid card number regex")
});

static CVV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3,4}$").expect("Invalid CVV regex")
});

static EXPIRY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}$").expect("Invalid expiry month regex")
});

static EXPIRY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}|[0-9]{4})$").expect("Invalid expiry year regex")
});

/// Checks length and the Luhn checksum; whitespace between digit groups is ignored.
pub fn validate_card_number(card_number: &str) -> bool {
    let clean: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();

    if !CARD_NUMBER.is_match(&clean) {
        return false;
    }

    let mut sum = 0u32;

    for (position, c) in clean.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };

        if position % 2 == 1 {
            digit *= 2;

            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
    }

    sum % 10 == 0
}

/// Accepts `MM/YY` or `MM/YYYY` for the month of `today` or any later month.
pub fn validate_expiry(expiry: &str, today: NaiveDate) -> bool {
    let parts: Vec<&str> = expiry.trim().split('/').map(str::trim).collect();

    let [month, year] = parts.as_slice() else {
        return false;
    };

    if !EXPIRY_MONTH.is_match(month) || !EXPIRY_YEAR.is_match(year) {
        return false;
    }

    let two_digit_year = year.len() == 2;

    let (Ok(month), Ok(year)) = (month.parse::<u32>(), year.parse::<i32>()) else {
        return false;
    };

    if !(1..=12).contains(&month) {
        return false;
    }

    let year = if two_digit_year { 2000 + year } else { year };

    (year, month) >= (today.year(), today.month())
}

pub fn validate_cvv(cvv: &str) -> bool {
    CVV.is_match(cvv)
}

/// Groups digits in fours for display: `"4539148803436467"` becomes `"4539 1488 0343 6467"`.
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();

    group_in_fours(&digits)
}

/// Hides all but the last four digits.
pub fn mask_card_number(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();
    let visible_from = digits.len().saturating_sub(4);

    let masked: Vec<char> = digits
        .iter()
        .enumerate()
        .map(|(index, digit)| if index < visible_from { '*' } else { *digit })
        .collect();

    group_in_fours(&masked)
}

fn group_in_fours(chars: &[char]) -> String {
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}
