//! HTTP server command
//!
//! Runs the recipe API plus the static frontend and uploads mounts.
//! Flags override `RECIPEBOX_*` environment variables, which override
//! built-in defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use recipebox_server::db::create_pool;
use recipebox_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:8080)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// SQLite database file, created if missing (default: recipes.db)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Directory served at / (default: ../frontend)
    #[arg(long)]
    pub frontend_dir: Option<PathBuf>,

    /// Directory uploaded images are written to (default: ../uploads)
    #[arg(long)]
    pub uploads_dir: Option<PathBuf>,

    /// Maximum request body size in bytes
    #[arg(long)]
    pub max_upload_bytes: Option<usize>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ServeArgs {
    /// Merge flags over the environment configuration
    pub fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::from_env();

        ServerConfig {
            bind_addr: self.bind.unwrap_or(defaults.bind_addr),
            database_path: self.db.unwrap_or(defaults.database_path),
            frontend_dir: self.frontend_dir.unwrap_or(defaults.frontend_dir),
            uploads_dir: self.uploads_dir.unwrap_or(defaults.uploads_dir),
            max_upload_bytes: self.max_upload_bytes.unwrap_or(defaults.max_upload_bytes),
            request_timeout_secs: self.timeout.unwrap_or(defaults.request_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config();

    tracing::info!("Opening database at {}", config.database_path.display());
    let pool = create_pool(&config.database_path)
        .await
        .with_context(|| {
            format!(
                "Failed to initialize database at {}",
                config.database_path.display()
            )
        })?;

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
