//! REST API layer: route handlers, DTOs, OpenAPI document and router
//! composition.
//!
//! Every router built here shares the same edge behavior: unmatched routes
//! fall through to the 404 envelope and handler panics are shaped into the
//! 500 envelope.

pub mod doc;
pub mod dto;
pub mod handlers;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use handlers::system;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router {
    let router = Router::new().merge(system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::ApiDoc::openapi()),
        )
    };

    with_error_handling(router)
}

/// Installs the not-found fallback and the panic-to-500 layer on `router`.
///
/// A known path requested with an unsupported method is treated as
/// unmatched and also gets the 404 envelope.
///
/// Routes added to the returned router afterwards are not covered by the
/// panic layer, so merge every route first.
pub fn with_error_handling(router: Router) -> Router {
    router
        .fallback(system::not_found_handler)
        .method_not_allowed_fallback(system::not_found_handler)
        .layer(CatchPanicLayer::custom(system::handle_panic))
}
