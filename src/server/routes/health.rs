use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::db::stats::store_status;
use crate::server::state::AppState;

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// "ok" when the store is reachable, "degraded" otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub backend: &'static str,
    /// Human-readable store state.
    pub database: String,
    pub database_path: String,
    pub connected: bool,
    /// Up to 10 table names.
    pub collections: Vec<String>,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Production Tracking API",
    })
}

/// GET /health -- returns service and store connectivity.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let path = state.db_path.clone();
    let status = tokio::task::spawn_blocking(move || store_status(&path))
        .await
        .ok();

    let (connected, database, collections) = match status {
        Some(s) => (s.connected, s.detail, s.collections),
        None => (false, "Store probe failed".to_string(), Vec::new()),
    };

    Json(HealthResponse {
        status: if connected { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        backend: "running",
        database,
        database_path: state.db_path.display().to_string(),
        connected,
        collections,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/test", get(health_check))
}
