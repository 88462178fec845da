//! Route definitions for the review console.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use super::{handlers, AppState};

/// Build the console router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/stats.json", get(handlers::stats_json).layer(CorsLayer::permissive()))
        .route("/static/style.css", get(handlers::stylesheet))
        .with_state(state)
}
