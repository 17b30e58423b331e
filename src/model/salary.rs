use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Computed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalaryBreakdown {
    #[schema(example = 100000.0)]
    pub gross_salary: f64,
    /// Tax deducted at source.
    #[schema(example = 10000.0)]
    pub tds: f64,
    #[schema(example = 90000.0)]
    pub net_salary: f64,
}

/// Raw MIN/MAX/AVG over a non-empty set of salaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryAggregate {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "country": "India",
    "minimum_salary": 80000.0,
    "maximum_salary": 120000.0,
    "average_salary": 100000.0
}))]
pub struct CountrySalaryMetrics {
    pub country: String,
    pub minimum_salary: f64,
    pub maximum_salary: f64,
    pub average_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "job_title": "Software Engineer",
    "average_salary": 90000.0
}))]
pub struct JobTitleSalaryMetrics {
    pub job_title: String,
    pub average_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SalaryMetrics {
    Country(CountrySalaryMetrics),
    JobTitle(JobTitleSalaryMetrics),
}
