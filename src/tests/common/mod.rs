// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;

use crate::observability::metrics::Metrics;
use crate::server::server::{router, AppState};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Full application over a fresh registry; the registry is returned for inspection.
pub async fn spawn_app() -> (JoinHandle<()>, SocketAddr, Arc<Metrics>) {
    let metrics = Arc::new(Metrics::new().expect("metrics"));
    let (handle, addr) = spawn_axum(router(AppState::new(metrics.clone()))).await;
    (handle, addr, metrics)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Body of `GET /metrics`.
pub async fn scrape(client: &Client, addr: SocketAddr) -> String {
    client
        .get(format!("http://{}/metrics", addr))
        .send()
        .await
        .expect("scrape request")
        .text()
        .await
        .expect("scrape body")
}

/// Sample lines of one metric family, HELP/TYPE comments excluded.
pub fn samples<'a>(exposition: &'a str, family: &str) -> Vec<&'a str> {
    exposition
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| {
            line.strip_prefix(family)
                .is_some_and(|rest| rest.starts_with('{') || rest.starts_with(' '))
        })
        .collect()
}
