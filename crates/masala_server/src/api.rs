//! HTTP API for recipe generation.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use masala_core::{Preferences, Recipe, RecipeRequest, SchemaDescriptor, compile, recipe_schema};
use masala_error::{GenerationError, GenerationErrorKind};
use masala_interface::RecipeGenerator;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// The single externally observable failure message.
///
/// Every failure cause collapses to this payload; the specific cause is
/// logged, never surfaced.
pub const ERROR_MESSAGE: &str = "Failed to generate recipe.";

/// API server state.
#[derive(Clone)]
pub struct AppState {
    /// Generation capability, swappable for a stub in tests.
    pub generator: Arc<dyn RecipeGenerator>,
    /// The recipe output contract, forwarded verbatim.
    pub schema: SchemaDescriptor,
}

impl AppState {
    /// Creates state around a generation backend, using the fixed recipe
    /// schema contract.
    pub fn new(generator: Arc<dyn RecipeGenerator>) -> Self {
        Self {
            generator,
            schema: recipe_schema(),
        }
    }
}

/// Creates the API router.
pub fn create_router(generator: Arc<dyn RecipeGenerator>) -> Router {
    let state = AppState::new(generator);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate-recipe", post(generate_recipe))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generate a recipe from user preferences.
///
/// The body is deserialized by hand so a malformed request follows the same
/// uniform-failure path as a generation error instead of a framework
/// rejection: the caller always receives a well-formed JSON body.
#[instrument(skip_all)]
async fn generate_recipe(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match handle_generate(&state, &body).await {
        Ok(recipe) => (StatusCode::OK, Json(recipe.into_value())),
        Err(err) => {
            error!(error = %err, "Error generating recipe");
            (StatusCode::OK, Json(json!({ "error": ERROR_MESSAGE })))
        }
    }
}

async fn handle_generate(state: &AppState, body: &str) -> Result<Recipe, GenerationError> {
    let request: RecipeRequest = serde_json::from_str(body).map_err(|e| {
        GenerationError::new(GenerationErrorKind::InvalidRequest(format!(
            "Failed to parse request body: {}",
            e
        )))
    })?;

    let prefs = Preferences::from_request(request);
    let prompt = compile(&prefs);

    debug!(prompt_len = prompt.len(), "Compiled prompt");

    state.generator.generate(&prompt, &state.schema).await
}
