//! Domain models
//!
//! Query and form input is coerced into these types before it reaches the
//! database. Coercion failures return ValidationError, not panic.

pub mod query;
pub mod recipe;
pub mod validation;

pub use query::{ListMode, ListParams, RecipeFilter, SortColumn, SortOrder};
pub use recipe::{NewRecipe, Recipe, DEFAULT_DIFFICULTY};
pub use validation::ValidationError;
