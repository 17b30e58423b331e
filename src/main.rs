use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, get};
use anyhow::Context;
use dotenvy::dotenv;
use serde_json::json;
use std::sync::Arc;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod repository;
mod routes;
mod salary;
mod service;
mod utils;

use config::Config;
use db::{ensure_schema, init_db};

use crate::docs::ApiDoc;
use crate::repository::{EmployeeRepository, InMemoryEmployeeRepository, MySqlEmployeeRepository};
use crate::service::employee::EmployeeService;
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn EmployeeRepository>> {
    match &config.database_url {
        Some(url) => {
            let pool = init_db(url)
                .await
                .context("Failed to connect to database")?;
            ensure_schema(&pool)
                .await
                .context("Failed to prepare employees table")?;
            info!("Using MySQL employee store");
            Ok(Arc::new(MySqlEmployeeRepository::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set, employees are kept in memory and lost on restart");
            Ok(Arc::new(InMemoryEmployeeRepository::default()))
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(
        addr = %config.server_addr,
        tds_countries = config.tds_rates.country_count(),
        "Server starting..."
    );

    let repo = build_repository(&config).await?;
    let service = Data::new(EmployeeService::new(repo, Arc::new(config.tds_rates.clone())));
    let limiter = routes::build_limiter(config.rate_api_per_min)?;

    let server_addr = config.server_addr.clone();
    let api_prefix = config.api_prefix.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(service.clone())
            .service(health)
            .configure(|cfg| routes::configure(cfg, &api_prefix, &limiter))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
