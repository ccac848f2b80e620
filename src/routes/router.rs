//! Router Configuration
//!
//! Assembles the final application router: the `/api/v1` routes, a JSON
//! 404 fallback, request tracing and a permissive CORS policy.
//!
//! CORS is wide open (any origin, method and header) because the API is
//! bearer-token authenticated; there are no cookies for a cross-site page
//! to ride on.

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Layer order
///
/// Tracing wraps CORS wraps the routes, so preflight requests show up in
/// the logs too.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(app_state.clone());

    // Unknown paths answer in the same JSON shape as every other error
    let router = router.fallback(|| async { ApiError::NotFound("Resource") });

    router.with_state(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer()),
    )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
