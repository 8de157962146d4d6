//! Configuration for the Groq connection.

use derive_getters::Getters;
use masala_error::ConfigError;

/// Default model used when `GROQ_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Default chat completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Configuration for the Groq connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GroqConfig {
    /// API key for bearer authentication
    api_key: String,
    /// Model identifier to use for generation
    model: String,
    /// Full URL of the chat completions endpoint
    base_url: String,
}

impl GroqConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GROQ_API_KEY` (required)
    /// - `GROQ_MODEL` (default: "llama-3.3-70b-versatile")
    /// - `GROQ_BASE_URL` (default: the hosted Groq endpoint)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ConfigError::new("GROQ_API_KEY not set"))?;
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        GroqConfigBuilder::default()
            .api_key(api_key)
            .model(model)
            .base_url(base_url)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid Groq config: {}", e)))
    }
}
