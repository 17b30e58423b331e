use crate::{
    api::employee::EMPLOYEE_NOT_FOUND,
    error::{ApiError, ErrorBody},
    model::salary::{SalaryBreakdown, SalaryMetrics},
    service::employee::EmployeeService,
};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const MISSING_CRITERION: &str = "must supply country or job_title";

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SalaryMetricsQuery {
    /// Min, max and average salary for this exact country. Wins over `job_title`.
    #[schema(example = "India")]
    pub country: Option<String>,
    /// Average salary for this exact job title.
    #[schema(example = "Software Engineer")]
    pub job_title: Option<String>,
}

/// Which aggregate a metrics request asks for. Empty values count as absent.
#[derive(Debug, PartialEq)]
pub enum MetricsCriterion<'a> {
    Country(&'a str),
    JobTitle(&'a str),
}

impl SalaryMetricsQuery {
    pub fn criterion(&self) -> Result<MetricsCriterion<'_>, ApiError> {
        fn supplied(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }

        if let Some(country) = supplied(&self.country) {
            Ok(MetricsCriterion::Country(country))
        } else if let Some(job_title) = supplied(&self.job_title) {
            Ok(MetricsCriterion::JobTitle(job_title))
        } else {
            Err(ApiError::validation(MISSING_CRITERION))
        }
    }
}

/// Calculate deductions and net salary for an employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/calculate-salary",
    params(
        ("employee_id" = u64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Salary breakdown", body = SalaryBreakdown),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Salary"
)]
pub async fn calculate_salary(
    service: web::Data<EmployeeService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let employee = service
        .get_by_id(employee_id)
        .await?
        .ok_or_else(|| ApiError::not_found(EMPLOYEE_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(service.net_salary_for(&employee)))
}

/// Salary metrics by country or job title
#[utoipa::path(
    get,
    path = "/api/salary-metrics",
    params(SalaryMetricsQuery),
    responses(
        (status = 200, description = "Country metrics (min/max/avg) or job title average", body = SalaryMetrics),
        (status = 400, description = "Neither country nor job_title supplied", body = ErrorBody, example = json!({
            "error": "must supply country or job_title"
        })),
        (status = 404, description = "No employees match", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Salary"
)]
pub async fn salary_metrics(
    service: web::Data<EmployeeService>,
    query: web::Query<SalaryMetricsQuery>,
) -> Result<HttpResponse, ApiError> {
    let metrics = match query.criterion()? {
        MetricsCriterion::Country(country) => service
            .metrics_by_country(country)
            .await?
            .map(SalaryMetrics::Country)
            .ok_or_else(|| ApiError::not_found("no employees found for this country"))?,
        MetricsCriterion::JobTitle(job_title) => service
            .metrics_by_job_title(job_title)
            .await?
            .map(SalaryMetrics::JobTitle)
            .ok_or_else(|| ApiError::not_found("no employees found for this job title"))?,
    };

    Ok(HttpResponse::Ok().json(metrics))
}
