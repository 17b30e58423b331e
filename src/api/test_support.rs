use std::sync::Arc;

use actix_web::{test::TestRequest, web};
use serde_json::json;

use crate::repository::InMemoryEmployeeRepository;
use crate::salary::tax_rates::TaxRateTable;
use crate::service::employee::EmployeeService;

/// Fresh service over an empty in-memory store.
pub(crate) fn service_data() -> web::Data<EmployeeService> {
    web::Data::new(EmployeeService::new(
        Arc::new(InMemoryEmployeeRepository::default()),
        Arc::new(TaxRateTable::default()),
    ))
}

pub(crate) fn create_request(full_name: &str, job_title: &str, country: &str, salary: f64) -> TestRequest {
    TestRequest::post().uri("/api/employees").set_json(json!({
        "full_name": full_name,
        "job_title": job_title,
        "country": country,
        "salary": salary
    }))
}

/// API routes under `/api`, without the rate limiter.
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($crate::api::test_support::service_data())
                .service(actix_web::web::scope("/api").configure($crate::routes::api_routes)),
        )
        .await
    };
}

pub(crate) use test_app;
