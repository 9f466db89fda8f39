//! Recipe records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Difficulty stored when the form leaves it out
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Recipe record as stored and returned by the API.
///
/// `id` and `created_at` are assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub protein: f64,
    pub carbs: f64,
    pub is_vegan: bool,
    pub is_vegetarian: bool,
    pub is_gluten_free: bool,
    pub cook_time: i64,
    pub difficulty: String,
    pub ingredients: String,
    pub instructions: String,
    pub created_at: String,
}

/// Mutable recipe fields, used for both insert and full-record update
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub protein: f64,
    pub carbs: f64,
    pub is_vegan: bool,
    pub is_vegetarian: bool,
    pub is_gluten_free: bool,
    pub cook_time: i64,
    pub difficulty: String,
    pub ingredients: String,
    pub instructions: String,
}

impl Default for NewRecipe {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            protein: 0.0,
            carbs: 0.0,
            is_vegan: false,
            is_vegetarian: false,
            is_gluten_free: false,
            cook_time: 0,
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            ingredients: String::new(),
            instructions: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_escaped_strings() {
        let recipe = Recipe {
            id: 7,
            title: "Grandma's \"best\" pie".into(),
            description: "line one\nline two".into(),
            image_url: String::new(),
            protein: 12.5,
            carbs: 40.0,
            is_vegan: false,
            is_vegetarian: true,
            is_gluten_free: false,
            cook_time: 45,
            difficulty: "hard".into(),
            ingredients: "flour\tbutter".into(),
            instructions: "bake".into(),
            created_at: "2024-01-01 10:00:00".into(),
        };

        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains(r#""title":"Grandma's \"best\" pie""#));
        assert!(json.contains(r#""description":"line one\nline two""#));
        assert!(json.contains(r#""ingredients":"flour\tbutter""#));
        assert!(json.contains(r#""is_vegetarian":true"#));
        assert!(json.contains(r#""cook_time":45"#));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["protein"], 12.5);
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn new_recipe_defaults_to_medium() {
        let recipe = NewRecipe::default();
        assert_eq!(recipe.difficulty, "medium");
        assert_eq!(recipe.cook_time, 0);
        assert!(!recipe.is_vegan);
    }
}
