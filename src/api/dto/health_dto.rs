//! Health check payload.

use serde::Serialize;
use utoipa::ToSchema;

/// Status reported while the service is serving requests.
pub const HEALTH_STATUS: &str = "OK";

/// Message reported alongside [`HEALTH_STATUS`].
pub const HEALTH_MESSAGE: &str = "BCR API is up and running!";

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"OK"`.
    #[schema(example = "OK")]
    pub status: String,
    /// Human-readable status line.
    #[schema(example = "BCR API is up and running!")]
    pub message: String,
}

impl HealthResponse {
    /// The fixed payload returned by the health endpoints.
    #[must_use]
    pub fn up() -> Self {
        Self {
            status: HEALTH_STATUS.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
