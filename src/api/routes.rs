//! API Route Configuration

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the router serving the page and the JSON API
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/experiences/:resource", get(handlers::get_experiences));

    Router::new()
        .route("/", get(handlers::render_index))
        .nest("/v1", api_v1)
        // Also expose at root for convenience
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
