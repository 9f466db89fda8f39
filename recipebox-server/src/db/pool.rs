//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The schema is
//! ensured before the pool is handed out, so a pool returned from here is
//! always ready for [`RecipeRepo`](super::RecipeRepo).

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::schema;

/// Default maximum connections for the pool.
/// Writers serialize on the SQLite file lock anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (or create) the SQLite database at `path` and ensure the schema.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the table cannot be
/// created.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("recipes.db").await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the SQLite database with a custom connection limit.
pub async fn create_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    schema::ensure(&pool).await?;
    Ok(pool)
}

/// Open an in-memory database (for testing).
///
/// Limited to a single connection: every SQLite memory connection is its
/// own database.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    schema::ensure(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn memory_pool_acquires_connection() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn file_pool_creates_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.db");

        let pool = create_pool(&path).await.expect("pool creation failed");
        assert!(path.exists());

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
            .fetch_one(&pool)
            .await
            .expect("recipes table missing");
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn concurrent_pool_access() {
        let dir = TempDir::new().unwrap();
        let pool = create_pool(dir.path().join("recipes.db"))
            .await
            .expect("pool creation failed");

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i64,) = sqlx::query_as("SELECT ?")
                        .bind(i as i64)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i64);
        }
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        use std::collections::HashSet;

        use crate::db::repos::RecipeRepo;
        use crate::models::NewRecipe;

        let dir = TempDir::new().unwrap();
        let pool = create_pool(dir.path().join("recipes.db"))
            .await
            .expect("pool creation failed");

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let recipe = NewRecipe {
                        title: format!("Recipe {i}"),
                        cook_time: i,
                        ..Default::default()
                    };
                    RecipeRepo::new(&pool)
                        .insert(&recipe)
                        .await
                        .expect("concurrent insert failed")
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.expect("task panicked"));
        }
        assert_eq!(ids.len(), 20);

        let count = RecipeRepo::new(&pool).count().await.unwrap();
        assert_eq!(count, 20);
    }
}
