use axum::routing::any;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Router,
};
use http::{header::CONTENT_TYPE, StatusCode};
use tracing::error;

use crate::observability::metrics::SCRAPE_CONTENT_TYPE;
use crate::server::server::AppState;

pub const METRICS_PATH: &str = "/metrics";

/// Scrape route; requests to it are never counted.
pub fn router() -> Router<AppState> {
    Router::new().route(METRICS_PATH, any(get_metrics))
}

async fn get_metrics(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(body) => (
            StatusCode::OK,
            [(CONTENT_TYPE, SCRAPE_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error has occurred while serving metrics:\n\n{}", e),
            )
                .into_response()
        }
    }
}
