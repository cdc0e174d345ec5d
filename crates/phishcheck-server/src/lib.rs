//! HTTP API for phishcheck.
//!
//! `POST /predict` classifies a URL, `GET /` and `GET /health` report liveness.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use phishcheck_core::service::ClassificationService;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: ClassificationService,
}

impl AppState {
    pub fn new(service: ClassificationService) -> Self {
        Self { service }
    }
}

/// CORS policy: any origin when `allowed_origins` is empty, otherwise exactly those.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }
    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Build application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(api::predict_routes())
        .merge(api::health_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve `router` until the process is stopped.
pub async fn serve(addr: SocketAddr, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("phishcheck listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
