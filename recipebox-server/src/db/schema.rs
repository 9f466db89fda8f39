//! Recipe table definition

use sqlx::SqlitePool;

/// Create the recipes table if it does not exist yet
pub async fn ensure(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Ensuring recipes table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            image_url TEXT,
            protein REAL NOT NULL DEFAULT 0,
            carbs REAL NOT NULL DEFAULT 0,
            is_vegan INTEGER NOT NULL DEFAULT 0,
            is_vegetarian INTEGER NOT NULL DEFAULT 0,
            is_gluten_free INTEGER NOT NULL DEFAULT 0,
            cook_time INTEGER NOT NULL DEFAULT 0,
            difficulty TEXT NOT NULL DEFAULT 'medium',
            ingredients TEXT NOT NULL,
            instructions TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
