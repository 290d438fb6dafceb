//! Liveness and store-connectivity endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::pool::check_connectivity;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Connectivity probe response
#[derive(Serialize)]
pub struct ConnectivityResponse {
    pub connected: bool,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /connectivity-check
///
/// Always 200; the boolean carries the outcome. Failure details go to
/// the server log only.
async fn connectivity_check(State(state): State<AppState>) -> Json<ConnectivityResponse> {
    let connected = check_connectivity(state.pool()).await;
    Json(ConnectivityResponse { connected })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/connectivity-check", get(connectivity_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert!(!body.version.is_empty());
    }
}
