use serde::Deserialize;

use crate::types::{CountryCode, CurrencyCode};

/// A supported destination and the currency its recipients are paid in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    pub code: CountryCode,
    pub name: String,
    pub currency: CurrencyCode
}

impl Country {
    pub fn new(code: &str, name: &str, currency: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            currency: currency.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CountryCatalog {
    countries: Vec<Country>
}

impl CountryCatalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn find(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    /// Target currencies, in catalog order and without repeats.
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        let mut currencies: Vec<CurrencyCode> = Vec::new();

        for country in &self.countries {
            if !currencies.contains(&country.currency) {
                currencies.push(country.currency.clone());
            }
        }

        currencies
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        Self::new(vec![
            Country::new("ZA", "South Africa", "ZAR"),
            Country::new("GB", "United Kingdom", "GBP")
        ])
    }
}
