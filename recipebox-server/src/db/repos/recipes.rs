//! Recipe repository
//!
//! Handles recipe CRUD plus the two list variants:
//! - filter: AND-ed bounds and dietary flags, every value bound
//! - sort: column from [`SortColumn`], never from raw input
//!
//! All listings break ties on `id` so rows inserted within the same second
//! keep a stable order.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{NewRecipe, Recipe, RecipeFilter, SortColumn, SortOrder};

const SELECT_RECIPES: &str = r#"
    SELECT id, title, description, COALESCE(image_url, '') AS image_url,
           protein, carbs, is_vegan, is_vegetarian, is_gluten_free,
           cook_time, difficulty, ingredients, instructions, created_at
    FROM recipes
"#;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    fn recipe_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Recipe",
            id: id.to_string(),
        }
    }
}

/// Recipe repository
pub struct RecipeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RecipeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All recipes, newest first.
    pub async fn list_all(&self) -> Result<Vec<Recipe>, DbError> {
        self.sort(SortColumn::CreatedAt, SortOrder::Desc).await
    }

    /// Recipes matching every supplied criterion, newest first.
    pub async fn filter(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, DbError> {
        let filter = filter.clone().normalized();

        let mut query = QueryBuilder::<Sqlite>::new(SELECT_RECIPES);
        query.push(" WHERE 1 = 1");

        if let Some(min) = filter.min_protein {
            query.push(" AND protein >= ").push_bind(min);
        }
        if let Some(max) = filter.max_protein {
            query.push(" AND protein <= ").push_bind(max);
        }
        if let Some(min) = filter.min_carbs {
            query.push(" AND carbs >= ").push_bind(min);
        }
        if let Some(max) = filter.max_carbs {
            query.push(" AND carbs <= ").push_bind(max);
        }
        if filter.vegan_only {
            query.push(" AND is_vegan = ").push_bind(true);
        }
        if filter.vegetarian_only {
            query.push(" AND is_vegetarian = ").push_bind(true);
        }
        if filter.gluten_free_only {
            query.push(" AND is_gluten_free = ").push_bind(true);
        }

        query.push(" ORDER BY created_at DESC, id DESC");

        let recipes = query
            .build_query_as::<Recipe>()
            .fetch_all(self.pool)
            .await?;

        Ok(recipes)
    }

    /// All recipes ordered by an allow-listed column.
    pub async fn sort(&self, column: SortColumn, order: SortOrder) -> Result<Vec<Recipe>, DbError> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_RECIPES);
        query
            .push(" ORDER BY ")
            .push(column.as_sql())
            .push(" ")
            .push(order.as_sql())
            .push(", id ")
            .push(order.as_sql());

        let recipes = query
            .build_query_as::<Recipe>()
            .fetch_all(self.pool)
            .await?;

        Ok(recipes)
    }

    /// Get a single recipe by id.
    pub async fn get(&self, id: i64) -> Result<Recipe, DbError> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_RECIPES);
        query.push(" WHERE id = ").push_bind(id);

        query
            .build_query_as::<Recipe>()
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::recipe_not_found(id))
    }

    /// Insert a recipe, returning the id the database assigned.
    pub async fn insert(&self, recipe: &NewRecipe) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO recipes (title, description, image_url, protein, carbs,
                                 is_vegan, is_vegetarian, is_gluten_free,
                                 cook_time, difficulty, ingredients, instructions)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.image_url)
        .bind(recipe.protein)
        .bind(recipe.carbs)
        .bind(recipe.is_vegan)
        .bind(recipe.is_vegetarian)
        .bind(recipe.is_gluten_free)
        .bind(recipe.cook_time)
        .bind(&recipe.difficulty)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace every mutable field of an existing recipe.
    ///
    /// `created_at` is left untouched.
    pub async fn update(&self, id: i64, recipe: &NewRecipe) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE recipes SET title = ?, description = ?, image_url = ?,
                               protein = ?, carbs = ?, is_vegan = ?,
                               is_vegetarian = ?, is_gluten_free = ?,
                               cook_time = ?, difficulty = ?,
                               ingredients = ?, instructions = ?
            WHERE id = ?
            "#,
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(&recipe.image_url)
        .bind(recipe.protein)
        .bind(recipe.carbs)
        .bind(recipe.is_vegan)
        .bind(recipe.is_vegetarian)
        .bind(recipe.is_gluten_free)
        .bind(recipe.cook_time)
        .bind(&recipe.difficulty)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::recipe_not_found(id));
        }
        Ok(())
    }

    /// Delete a recipe.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::recipe_not_found(id));
        }
        Ok(())
    }

    /// Number of stored recipes.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
