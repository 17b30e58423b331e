use crate::model::salary::SalaryBreakdown;
use crate::salary::tax_rates::TaxRateTable;

/// Round to 2 decimal places from the exact binary value.
///
/// Float formatting is correctly rounded, so `1003.15 * 0.10` (just below
/// 100.315) gives 100.31. Scaling by 100 first would round it up.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Deduct the country's TDS from a gross salary.
///
/// `gross_salary` is echoed back unrounded; `tds` and `net_salary` are
/// rounded independently, with the net computed from the unrounded deduction.
/// Callers guarantee a non-negative gross.
pub fn compute_net(gross_salary: f64, country: &str, rates: &TaxRateTable) -> SalaryBreakdown {
    let tds = gross_salary * rates.rate_for(country);

    SalaryBreakdown {
        gross_salary,
        tds: round2(tds),
        net_salary: round2(gross_salary - tds),
    }
}
