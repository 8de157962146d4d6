//! Core data types for the masala recipe generation service.
//!
//! This crate provides the request model, the input normalizer that applies
//! defaults, the deterministic prompt compiler, and the schema/recipe
//! payload types shared across the workspace.

mod preferences;
mod prompt;
mod recipe;
mod schema;

pub use preferences::{
    DEFAULT_CUISINE, DEFAULT_DISH_TYPE, DEFAULT_SPICE_LEVEL, Ingredient, Preferences,
    RecipeRequest,
};
pub use prompt::{CLOSING_INSTRUCTION, compile};
pub use recipe::Recipe;
pub use schema::{SchemaDescriptor, recipe_schema};
