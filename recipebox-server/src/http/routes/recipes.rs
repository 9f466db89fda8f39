//! Recipe endpoints
//!
//! - `GET    /api/recipes`      - list, filtered or sorted by query string
//! - `POST   /api/recipes`      - create from multipart form
//! - `GET    /api/recipes/{id}` - fetch one
//! - `PUT    /api/recipes/{id}` - full update from multipart form
//! - `DELETE /api/recipes/{id}` - remove

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::RecipeRepo;
use crate::http::error::ApiError;
use crate::http::extractors::RecipeId;
use crate::http::form::RecipeForm;
use crate::http::server::AppState;
use crate::http::uploads;
use crate::models::{ListMode, ListParams, NewRecipe, Recipe};

/// Confirmation body for write endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }
}

/// GET /api/recipes - list recipes
async fn list_recipes(
    State(state): State<Arc<AppState>>,
    params: ListParams,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let repo = RecipeRepo::new(&state.pool);

    let recipes = match params.mode() {
        ListMode::Filter(filter) => repo.filter(&filter).await?,
        ListMode::Sort(column, order) => repo.sort(column, order).await?,
        ListMode::All => repo.list_all().await?,
    };

    Ok(Json(recipes))
}

/// GET /api/recipes/{id} - get a single recipe
async fn get_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = RecipeRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(ApiError::storage("Failed to load recipe"))?;

    Ok(Json(recipe))
}

/// POST /api/recipes - create a recipe
async fn create_recipe(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let form = RecipeForm::from_multipart(multipart).await?;
    let mut recipe = form.to_recipe()?;

    if let Some(url) = store_form_image(&state, &form).await? {
        recipe.image_url = url;
    }

    let id = RecipeRepo::new(&state.pool)
        .insert(&recipe)
        .await
        .map_err(ApiError::storage("Failed to create recipe"))?;

    tracing::info!(id, title = %recipe.title, "Recipe created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Recipe created successfully",
            id: Some(id),
        }),
    ))
}

/// PUT /api/recipes/{id} - replace a recipe
///
/// Without a new image the stored `image_url` is kept.
async fn update_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let form = RecipeForm::from_multipart(multipart).await?;
    let mut recipe: NewRecipe = form.to_recipe()?;

    let repo = RecipeRepo::new(&state.pool);
    let existing = repo
        .get(id)
        .await
        .map_err(ApiError::storage("Failed to update recipe"))?;

    recipe.image_url = match store_form_image(&state, &form).await? {
        Some(url) => url,
        None => existing.image_url,
    };

    repo.update(id, &recipe)
        .await
        .map_err(ApiError::storage("Failed to update recipe"))?;

    tracing::info!(id, "Recipe updated");
    Ok(Json(MessageResponse::new("Recipe updated successfully")))
}

/// DELETE /api/recipes/{id} - delete a recipe
async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    RecipeId(id): RecipeId,
) -> Result<Json<MessageResponse>, ApiError> {
    RecipeRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(ApiError::storage("Failed to delete recipe"))?;

    tracing::info!(id, "Recipe deleted");
    Ok(Json(MessageResponse::new("Recipe deleted successfully")))
}

async fn store_form_image(state: &AppState, form: &RecipeForm) -> Result<Option<String>, ApiError> {
    let Some(image) = form.image() else {
        return Ok(None);
    };

    uploads::store_image(&state.config.uploads_dir, &image.file_name, &image.bytes)
        .await
        .map(Some)
        .map_err(ApiError::Upload)
}

/// Recipe routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/api/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}
