use axum::{
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tracing::debug;

use crate::server::server::AppState;
use crate::utils::constants::{GREETING, NOT_FOUND_BODY};

pub const HELLO_PATH: &str = "/";
pub const ERR_PATH: &str = "/err";

/// Content routes; every method is accepted and counted.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(HELLO_PATH, any(hello))
        .route(ERR_PATH, any(err))
}

async fn hello(State(state): State<AppState>, method: Method) -> Response {
    instrumented(&state, &method, (StatusCode::OK, GREETING).into_response())
}

async fn err(State(state): State<AppState>, method: Method) -> Response {
    instrumented(&state, &method, StatusCode::NOT_FOUND.into_response())
}

/// Fallback for every unmatched path. Not counted.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    debug!("{} {} -> no route", method, uri.path());
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// Record the status the wrapped handler produced, then pass the response on.
fn instrumented(state: &AppState, method: &Method, response: Response) -> Response {
    debug!("{} -> {}", method, response.status());
    state.metrics.observe(response.status(), method);
    response
}
