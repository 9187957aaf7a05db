use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// `up`, `down`, or `none` when running without Postgres.
    pub database: &'static str,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match &state.pool {
        Some(pool) if cinedex_db::health_check(pool).await.is_ok() => "up",
        Some(_) => "down",
        None => "none",
    };

    let status = if database == "down" { "degraded" } else { "ok" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// Mount health check routes (root level, outside `/movies`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
