//! Liveness endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

pub const INDEX_TEXT: &str = "Phishing Detection API is running.";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /
pub async fn index() -> &'static str {
    INDEX_TEXT
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "phishcheck".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
