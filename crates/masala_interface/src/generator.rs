//! Generation capability trait.

use async_trait::async_trait;
use masala_core::{Recipe, SchemaDescriptor};
use masala_error::GenerationError;

/// The narrow seam between prompt compilation and the generative capability.
///
/// Implementors submit the instruction together with the schema descriptor
/// to an external model and return a schema-conforming [`Recipe`], or a
/// single [`GenerationError`] covering every failure cause. The capability
/// is stochastic: identical prompts may yield different recipes.
///
/// Object-safe so servers can hold `Arc<dyn RecipeGenerator>` and tests can
/// substitute a deterministic stub.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Generates one recipe from the compiled prompt. One attempt, no retry.
    async fn generate(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Recipe, GenerationError>;
}
