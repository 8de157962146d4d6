//! Trait definitions for masala generation backends.

mod generator;

pub use generator::RecipeGenerator;
