use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::settings::ServerConfig;
use crate::observability::metrics::Metrics;
use crate::observability::routes;
use crate::server::handlers::{self, not_found};

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self { metrics }
    }
}

/// Full route table: content routes, the scrape route and the not-found fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::router())
        .merge(routes::router())
        .fallback(not_found)
        .with_state(state)
}

/// Bind the configured address. No retry and no fallback port.
pub async fn bind(server_config: &ServerConfig) -> Result<TcpListener> {
    let address = server_config.listen_address()?;
    TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind listener on {}", address))
}

/// Serve on an already bound listener until the process is killed.
pub async fn serve(listener: TcpListener, metrics: Arc<Metrics>) -> Result<()> {
    let address = listener.local_addr()?;
    info!(%address, "listening");

    axum::serve(listener, router(AppState::new(metrics)))
        .await
        .context("http server failed")
}

pub async fn start(server_config: &ServerConfig, metrics: Arc<Metrics>) -> Result<()> {
    let listener = bind(server_config).await?;
    serve(listener, metrics).await
}
