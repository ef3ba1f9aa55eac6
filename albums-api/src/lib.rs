//! albums-api library - HTTP surface of the album catalog
//!
//! Three album routes under `/api/v1`, plus the API description and a
//! health endpoint.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Base path for versioned album routes
pub const API_BASE_PATH: &str = "/api/v1";

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Store connection pool, built once at startup
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, api::album_routes())
        .merge(api::docs_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
