pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Every path is routed by method: POST books, anything else gets the landing
/// page, except `GET /health`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/health",
            get(handlers::health::health).fallback(handlers::dispatch),
        )
        .fallback(handlers::dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
