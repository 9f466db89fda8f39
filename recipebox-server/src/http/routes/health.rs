//! Liveness check backed by the recipe store
//!
//! `GET /health` counts recipes, so a 200 means the database file is open
//! and the table is readable. Storage failures answer 503.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::RecipeRepo;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");

    match RecipeRepo::new(&state.pool).count().await {
        Ok(recipes) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                recipes: Some(recipes),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version,
                    recipes: None,
                    error: Some("Database unavailable"),
                }),
            )
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
