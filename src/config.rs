use anyhow::{Context, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::Level;

use crate::salary::tax_rates::TaxRateTable;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// MySQL URL. Unset means the process keeps employees in memory.
    pub database_url: Option<String>,
    pub api_prefix: String,

    // Rate limiting
    pub rate_api_per_min: u32,

    // Logging
    pub log_dir: String,
    pub log_level: Level,

    pub tds_rates: TaxRateTable,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tds_rates = match lookup("TDS_RATES") {
            Some(raw) => TaxRateTable::parse(&raw).context("TDS_RATES is invalid")?,
            None => TaxRateTable::default(),
        };

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            api_prefix: lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            rate_api_per_min: parse_or(&lookup, "RATE_API_PER_MIN", 1000)?,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: parse_or(&lookup, "LOG_LEVEL", Level::DEBUG)?,
            tds_rates,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} must be valid, got `{raw}`: {e}")),
        None => Ok(default),
    }
}
