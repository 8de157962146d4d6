//! Type conversions between masala and the Groq chat format.

use crate::groq::dto::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};
use masala_core::{Recipe, SchemaDescriptor};
use masala_error::{GenerationError, GenerationErrorKind};

/// Builds a chat request carrying the compiled prompt and the forwarded
/// schema descriptor.
pub fn to_chat_request(
    prompt: &str,
    schema: &SchemaDescriptor,
    model: &str,
) -> Result<ChatRequest, GenerationError> {
    let messages = vec![ChatMessage {
        role: "user".to_string(),
        content: prompt.to_string(),
    }];

    ChatRequest::builder()
        .model(model.to_string())
        .messages(messages)
        .response_format(Some(ResponseFormat::json_schema(
            schema.name().clone(),
            schema.schema().clone(),
        )))
        .build()
        .map_err(|e| {
            GenerationError::new(GenerationErrorKind::Configuration(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Extracts the generated recipe from a chat response.
///
/// The model is instructed to emit a schema-conforming JSON object as the
/// first choice's content; content that is not a JSON object is treated as
/// a schema-conformance failure.
pub fn from_chat_response(response: &ChatResponse) -> Result<Recipe, GenerationError> {
    let content = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::ResponseParsing(
                "No choices in response".to_string(),
            ))
        })?;

    let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        GenerationError::new(GenerationErrorKind::SchemaConformance(format!(
            "Content is not valid JSON: {}",
            e
        )))
    })?;

    if !value.is_object() {
        return Err(GenerationError::new(GenerationErrorKind::SchemaConformance(
            "Content is not a JSON object".to_string(),
        )));
    }

    Ok(Recipe::new(value))
}
