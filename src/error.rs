//! API error types and the JSON error envelope.
//!
//! [`ApiError`] has exactly two variants: an unmatched route
//! ([`ApiError::NotFound`], 404) and any other failure that reached the
//! edge of the service ([`ApiError::Generic`], 500). Both are rendered by
//! [`ApiError::to_payload`] into the same envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "name": "Error",
//!     "message": "Not found!",
//!     "details": { "method": "GET", "url": "/missing" }
//!   }
//! }
//! ```
//!
//! `details` is `null` for generic errors.

use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Name reported for not-found errors and for errors without a type name.
pub const DEFAULT_ERROR_NAME: &str = "Error";

/// Message reported for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "Not found!";

/// Structured JSON error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error kind name, e.g. `"Error"`.
    pub name: String,
    /// Human-readable error message.
    pub message: String,
    /// Request echo for not-found errors, `null` otherwise.
    pub details: Option<RequestDetails>,
}

/// Method and URL of the request that could not be routed.
///
/// Either field serializes as `null` when the request did not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RequestDetails {
    /// HTTP method, verbatim.
    pub method: Option<String>,
    /// Request target (path and query string), verbatim.
    pub url: Option<String>,
}

impl RequestDetails {
    /// Captures the method and request target of an incoming request.
    #[must_use]
    pub fn from_request(method: &Method, uri: &Uri) -> Self {
        let url = uri
            .path_and_query()
            .map_or_else(|| uri.to_string(), |pq| pq.as_str().to_string());
        Self {
            method: Some(method.as_str().to_string()),
            url: Some(url),
        }
    }
}

/// Errors surfaced to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No route matched the request.
    #[error("Not found!")]
    NotFound(RequestDetails),

    /// Any other failure; only its name and message reach the client.
    #[error("{name}: {message}")]
    Generic {
        /// Error kind name.
        name: String,
        /// Error message, possibly empty.
        message: String,
    },
}

impl ApiError {
    /// Not-found error echoing the given method and URL.
    #[must_use]
    pub fn not_found(method: Option<&str>, url: Option<&str>) -> Self {
        Self::NotFound(RequestDetails {
            method: method.map(str::to_string),
            url: url.map(str::to_string),
        })
    }

    /// Generic error with an explicit name and message.
    #[must_use]
    pub fn generic(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Generic {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Generic error from any [`std::error::Error`].
    ///
    /// The name is the error's short type name with module path and generic
    /// arguments removed, so `std::io::Error` reports as `"Error"`.
    #[must_use]
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        Self::generic(short_type_name::<E>(), err.to_string())
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Generic { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON envelope for this error.
    #[must_use]
    pub fn to_payload(&self) -> ErrorResponse {
        let error = match self {
            Self::NotFound(details) => ErrorBody {
                name: DEFAULT_ERROR_NAME.to_string(),
                message: NOT_FOUND_MESSAGE.to_string(),
                details: Some(details.clone()),
            },
            Self::Generic { name, message } => ErrorBody {
                name: name.clone(),
                message: message.clone(),
                details: None,
            },
        };
        ErrorResponse { error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(details) => {
                tracing::debug!(
                    method = details.method.as_deref().unwrap_or_default(),
                    url = details.url.as_deref().unwrap_or_default(),
                    "route not found"
                );
            }
            Self::Generic { name, message } => {
                tracing::error!(%name, %message, "request failed");
            }
        }
        (self.status_code(), axum::Json(self.to_payload())).into_response()
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rsplit("::").next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_ERROR_NAME,
    }
}
