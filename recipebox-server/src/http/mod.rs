//! HTTP server layer
//!
//! Axum server with:
//! - Recipe CRUD under `/api/recipes`
//! - Multipart forms with image uploads
//! - Static frontend and uploads mounts
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod form;
pub mod routes;
pub mod server;
pub mod uploads;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerError};
