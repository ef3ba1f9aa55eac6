//! Store liveness endpoint
//!
//! Reports whether the shared pool can reach the album store right now.
//! Startup tolerates an unreachable store, so this is where operators see it.

use albums_common::db;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;
use tracing::warn;

use super::response::PrettyJson;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" or "degraded"
    pub status: &'static str,
    pub store_reachable: bool,
    /// Present only when the album table could be counted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<i64>,
    pub version: &'static str,
}

/// GET /health
///
/// 200 when the store answers, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, PrettyJson<HealthResponse>) {
    let store_reachable = match db::ping(&state.db).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check could not reach store: {}", e);
            false
        }
    };

    // A reachable store without the table still reports degraded
    let albums = if store_reachable {
        db::count_albums(&state.db).await.ok()
    } else {
        None
    };

    let healthy = albums.is_some();
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        PrettyJson(HealthResponse {
            status: if healthy { "ok" } else { "degraded" },
            store_reachable,
            albums,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
