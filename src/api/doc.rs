//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

/// Tag shared by the health and fallback endpoints.
pub const SYSTEM_TAG: &str = "System";

/// Aggregated OpenAPI description of every documented handler.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "BCR API",
        description = "Base controller: health check, error envelopes and pagination metadata.",
    ),
    paths(
        crate::api::handlers::system::root_handler,
        crate::api::handlers::system::health_handler,
    ),
    components(
        schemas(
            crate::api::dto::HealthResponse,
            crate::domain::PaginationMetadata,
            crate::error::ErrorResponse,
            crate::error::ErrorBody,
            crate::error::RequestDetails,
        )
    ),
    tags(
        (name = SYSTEM_TAG, description = "Health and error handling endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_health_paths_and_error_schema() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));

        let schemas = doc.components.map(|c| c.schemas).unwrap_or_default();
        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("PaginationMetadata"));
    }
}
