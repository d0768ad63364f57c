/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` logs every request and response through `tracing`
 * - `CorsLayer` admits only the configured origins, with credentials
 *
 * Unknown routes get a JSON 404 like every other error.
 */

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Body of `GET /`
pub const HEALTH_MESSAGE: &str = "Server is running";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state
/// * `cors_origins` - Origins allowed to make credentialed requests
pub fn create_router(app_state: AppState, cors_origins: &[String]) -> Router {
    let router = Router::new().route("/", get(health));
    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route")
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}
