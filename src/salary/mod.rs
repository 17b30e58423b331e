pub mod calculator;
pub mod tax_rates;
