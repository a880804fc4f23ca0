use actix_web::{web, HttpResponse};
use serde::Serialize;
use tm_shared::ApiResponse;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthReport {
    status: &'static str,
    uptime: u64,
    version: &'static str,
    environment: String,
    /// `up`, `down`, or `memory` for the in-memory stores
    database: &'static str,
}

/// Handler for GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.database {
        None => "memory",
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            _ => "down",
        },
    };

    let report = HealthReport {
        status: if database == "down" { "degraded" } else { "healthy" },
        uptime: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.to_string(),
        database,
    };

    HttpResponse::Ok().json(ApiResponse::success("Health check successful", report))
}
