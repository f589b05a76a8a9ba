/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` - one span per HTTP request
 * - `CorsLayer` - only when an allowed origin is configured
 *
 * Unknown paths fall through to a JSON 404.
 */

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Schema and user store
/// * `cors_allow_origin` - Browser origin allowed to call the API, if any
pub fn create_router(app_state: AppState, cors_allow_origin: Option<&str>) -> Router<()> {
    let router = configure_api_routes(Router::new())
        .fallback(|| async { BackendError::handler(StatusCode::NOT_FOUND, "Not Found") })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let router = match cors_allow_origin.map(cors_layer) {
        Some(Some(cors)) => router.layer(cors),
        _ => router,
    };

    router.with_state(app_state)
}

/// CORS layer for a single origin, or `None` if the origin is not a valid header value
fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(origin) {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_headers([CONTENT_TYPE])
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(AllowOrigin::exact(origin)),
        ),
        Err(_) => {
            tracing::warn!(origin, "Ignoring invalid CORS_ALLOW_ORIGIN");
            None
        }
    }
}
