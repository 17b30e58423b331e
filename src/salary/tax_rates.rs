use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Countries with a built-in TDS rate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumIter)]
pub enum Country {
    #[strum(serialize = "India")]
    India,
    #[strum(serialize = "United States")]
    UnitedStates,
}

impl Country {
    pub fn default_tds_rate(self) -> f64 {
        match self {
            Country::India => 0.10,
            Country::UnitedStates => 0.12,
        }
    }
}

static DEFAULT_TDS_RATES: Lazy<TaxRateTable> = Lazy::new(|| TaxRateTable {
    rates: Country::iter()
        .map(|c| (c.to_string(), c.default_tds_rate()))
        .collect(),
});

#[derive(Debug, Error, PartialEq)]
pub enum TaxRateParseError {
    #[error("entry `{0}` must look like `Country=rate`")]
    MalformedEntry(String),
    #[error("entry `{0}` has an empty country name")]
    EmptyCountry(String),
    #[error("rate for `{country}` must be a number in [0, 1), got `{raw}`")]
    InvalidRate { country: String, raw: String },
}

/// Immutable country -> deduction rate mapping, injected at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRateTable {
    rates: HashMap<String, f64>,
}

impl Default for TaxRateTable {
    fn default() -> Self {
        DEFAULT_TDS_RATES.clone()
    }
}

impl TaxRateTable {
    /// Exact, case-sensitive lookup. Unlisted countries pay nothing.
    pub fn rate_for(&self, country: &str) -> f64 {
        self.rates.get(country).copied().unwrap_or(0.0)
    }

    pub fn country_count(&self) -> usize {
        self.rates.len()
    }

    /// Parse `India=0.10;United States=0.12` (the `TDS_RATES` format).
    pub fn parse(raw: &str) -> Result<Self, TaxRateParseError> {
        let mut rates = HashMap::new();

        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (country, rate) = entry
                .rsplit_once('=')
                .ok_or_else(|| TaxRateParseError::MalformedEntry(entry.to_string()))?;

            let country = country.trim();
            if country.is_empty() {
                return Err(TaxRateParseError::EmptyCountry(entry.to_string()));
            }

            let rate = rate
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| (0.0..1.0).contains(r))
                .ok_or_else(|| TaxRateParseError::InvalidRate {
                    country: country.to_string(),
                    raw: rate.trim().to_string(),
                })?;

            rates.insert(country.to_string(), rate);
        }

        Ok(Self { rates })
    }
}
