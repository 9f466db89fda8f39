//! Server configuration - paths, bind address, and limits
//!
//! Configuration is loaded from environment variables:
//! - `RECIPEBOX_BIND`: Address to bind to (default: 0.0.0.0:8080)
//! - `RECIPEBOX_DB`: SQLite database file (default: recipes.db)
//! - `RECIPEBOX_FRONTEND_DIR`: Static frontend directory (default: ../frontend)
//! - `RECIPEBOX_UPLOADS_DIR`: Uploaded images directory (default: ../uploads)
//! - `RECIPEBOX_MAX_UPLOAD_BYTES`: Request body limit (default: 10 MiB)
//! - `RECIPEBOX_TIMEOUT_SECS`: Request timeout (default: 30)

use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,

    /// SQLite database file, created if missing
    pub database_path: PathBuf,

    /// Directory served at `/`
    pub frontend_dir: PathBuf,

    /// Directory uploaded images are written to, served at `/uploads`
    pub uploads_dir: PathBuf,

    /// Maximum request body size, applies to multipart uploads
    pub max_upload_bytes: usize,

    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: parse_var("RECIPEBOX_BIND", defaults.bind_addr),
            database_path: path_var("RECIPEBOX_DB", defaults.database_path),
            frontend_dir: path_var("RECIPEBOX_FRONTEND_DIR", defaults.frontend_dir),
            uploads_dir: path_var("RECIPEBOX_UPLOADS_DIR", defaults.uploads_dir),
            max_upload_bytes: parse_var("RECIPEBOX_MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
            request_timeout_secs: parse_var("RECIPEBOX_TIMEOUT_SECS", defaults.request_timeout_secs),
        }
    }

    /// Create config rooted in a single directory (for testing)
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            database_path: root.join("recipes.db"),
            frontend_dir: root.join("frontend"),
            uploads_dir: root.join("uploads"),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            database_path: PathBuf::from("recipes.db"),
            frontend_dir: PathBuf::from("../frontend"),
            uploads_dir: PathBuf::from("../uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn path_var(key: &str, default: PathBuf) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or(default)
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}
