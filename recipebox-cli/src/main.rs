//! recipebox CLI - recipe collection server
//!
//! Entry point for the `recipebox` binary:
//! - `serve` runs the HTTP API with the static frontend and uploads mounts
//! - `init-db` creates the SQLite database and recipes table, then exits

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "recipebox",
    author,
    version,
    about = "Recipe collection server with filtering, sorting, and image uploads"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (recipe API, frontend, uploads)
    Serve(commands::serve::ServeArgs),
    /// Create the database file and recipes table
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
