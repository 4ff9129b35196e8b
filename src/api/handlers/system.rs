//! System endpoints: health check, unmatched routes and panics.

use std::any::Any;

use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::HealthResponse;
use crate::error::{ApiError, DEFAULT_ERROR_NAME, RequestDetails};

/// Message used when a panic payload carries no text.
const PANIC_FALLBACK_MESSAGE: &str = "Internal server error";

/// Health status and payload, independent of the request.
#[must_use]
pub fn health_check() -> (StatusCode, HealthResponse) {
    (StatusCode::OK, HealthResponse::up())
}

/// `GET /` — Service health status.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Health check",
    description = "Reports that the API is up. The payload never depends on the request.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    let (status, body) = health_check();
    (status, Json(body))
}

/// `GET /health` — Alias of `GET /` for probes.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check (probe alias)",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    root_handler().await
}

/// Router fallback: every unmatched route ends here with a 404 envelope
/// echoing the request method and URL.
pub async fn not_found_handler(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(RequestDetails::from_request(&method, &uri))
}

/// Turns a caught handler panic into the generic 500 envelope.
///
/// Used with [`tower_http::catch_panic::CatchPanicLayer::custom`].
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        PANIC_FALLBACK_MESSAGE.to_string()
    };
    ApiError::generic(DEFAULT_ERROR_NAME, message).into_response()
}

/// System routes mounted at the root level.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
