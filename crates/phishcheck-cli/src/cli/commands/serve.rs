//! `phishcheck serve` – run the HTTP API.

use anyhow::{Context, Result};
use phishcheck_core::config::PhishcheckConfig;
use phishcheck_core::service::ClassificationService;
use phishcheck_server::{build_router, cors_layer, serve, AppState};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

pub async fn run_serve(
    cfg: &PhishcheckConfig,
    bind: Option<String>,
    port: Option<u16>,
    model: Option<PathBuf>,
) -> Result<()> {
    let bind = bind.unwrap_or_else(|| cfg.server.bind.clone());
    let ip: IpAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address {bind:?}"))?;
    let addr = SocketAddr::new(ip, port.unwrap_or(cfg.server.port));

    // The model is loaded once here and only read afterwards.
    let (path, model) = super::load_model(cfg, model)?;
    tracing::info!("serving model {}", path.display());

    let service = ClassificationService::new(Arc::new(model));
    let router = build_router(
        AppState::new(service),
        cors_layer(&cfg.server.cors_allowed_origins)?,
    );
    println!("phishcheck listening on http://{addr}");
    serve(addr, router).await
}
