//! recipebox-server: HTTP server for the recipe collection
//!
//! Stores recipes in a single SQLite table and exposes them over a small
//! JSON API with filtering, sorting, and multipart image uploads. The
//! frontend and the uploads directory are served as static files.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::ServerConfig;
pub use http::{build_router, run_server, ApiError, AppState, ServerError};
