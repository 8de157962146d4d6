//! Groq client for schema-constrained generation.

use crate::groq::{GroqConfig, conversions, dto::ChatResponse};
use async_trait::async_trait;
use masala_core::{Recipe, SchemaDescriptor};
use masala_error::{ConfigError, GenerationError, GenerationErrorKind};
use masala_interface::RecipeGenerator;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for the Groq chat completions API.
///
/// One generation attempt per call; retries and timeout budgets belong to
/// the caller or the provider, not this client.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Creates a new Groq client.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::new();

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            "Created Groq client"
        );

        Self { client, config }
    }

    /// Creates a client from environment configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(GroqConfig::from_env()?))
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        self.config.model()
    }
}

#[async_trait]
impl RecipeGenerator for GroqClient {
    #[instrument(skip(self, prompt, schema), fields(model = %self.config.model()))]
    async fn generate(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Recipe, GenerationError> {
        let chat_request = conversions::to_chat_request(prompt, schema, self.config.model())?;

        debug!(
            model = %self.config.model(),
            message_count = chat_request.messages().len(),
            schema = %schema.name(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.config.base_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }
}
