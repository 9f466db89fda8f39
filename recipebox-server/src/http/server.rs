//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS (any origin, recipe methods, preflight answered here)
//! - Tracing and timeout middleware
//! - Static frontend and uploads mounts
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use super::uploads::UPLOADS_ROUTE;
use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: ServerConfig) -> Self {
        Self { pool, config }
    }
}

/// Build the application router: API routes, static mounts, middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::map_response(json_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.request_timeout_secs),
        ));

    let uploads = ServeDir::new(&state.config.uploads_dir);
    let frontend = ServeDir::new(&state.config.frontend_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(routes::health::router())
        .merge(routes::recipes::router())
        .nest_service(UPLOADS_ROUTE, uploads)
        .fallback_service(frontend)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(layers)
        .with_state(Arc::new(state))
}

/// `TimeoutLayer` answers with an empty 408; give it the JSON error body.
async fn json_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        ApiError::Timeout.into_response()
    } else {
        response
    }
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&config.database_path).await?;
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> Result<(), ServerError> {
    tokio::fs::create_dir_all(&config.uploads_dir).await?;
    if !config.frontend_dir.is_dir() {
        tracing::warn!(
            frontend = %config.frontend_dir.display(),
            "Frontend directory not found, static pages will 404"
        );
    }

    let bind_addr = config.bind_addr;
    tracing::info!(
        uploads = %config.uploads_dir.display(),
        frontend = %config.frontend_dir.display(),
        "Static mounts configured"
    );

    let app = build_router(AppState::new(pool, config));

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on http://{}", bind_addr);
    tracing::info!("API endpoints available at http://{}/api/recipes", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
