//! Create the database file and recipes table without starting the server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use recipebox_server::db::create_pool;
use recipebox_server::ServerConfig;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file (default: recipes.db)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let path = args.db.unwrap_or(ServerConfig::from_env().database_path);

    let pool = create_pool(&path)
        .await
        .with_context(|| format!("Failed to initialize database at {}", path.display()))?;
    pool.close().await;

    println!("Database ready at {}", path.display());
    Ok(())
}
