use crate::api::{employee, salary};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Context, Result};

pub type ApiLimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter. Build once and share it so every worker counts
/// against the same quota.
pub fn build_limiter(requests_per_min: u32) -> Result<ApiLimiterConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .context("invalid rate limiter settings")
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: &ApiLimiterConfig) {
    cfg.service(
        web::scope(api_prefix)
            .wrap(Governor::new(limiter)) // rate limiting
            .configure(api_routes),
    );
}

/// Routes relative to the API prefix.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            )
            // /employees/{id}/calculate-salary
            .service(
                web::resource("/{id}/calculate-salary")
                    .route(web::get().to(salary::calculate_salary)),
            ),
    )
    .service(web::resource("/salary-metrics").route(web::get().to(salary::salary_metrics)));
}
