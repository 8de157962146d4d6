//! Schema descriptor for structured generation.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Externally owned descriptor of the expected output object's shape.
///
/// The pipeline forwards the descriptor to the generation client verbatim
/// and never inspects or mutates the schema body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SchemaDescriptor {
    /// Schema name, used by providers to label the response format
    name: String,
    /// JSON Schema describing the expected object
    schema: serde_json::Value,
}

impl SchemaDescriptor {
    /// Creates a new schema descriptor.
    pub fn new(name: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// The recipe output contract.
///
/// Owned by the schema collaborator; reproduced here as an immutable
/// constant of the service.
pub fn recipe_schema() -> SchemaDescriptor {
    SchemaDescriptor::new(
        "recipe",
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Short, appetizing recipe name (2-3 words)"
                },
                "description": {
                    "type": "string",
                    "description": "One or two sentences describing the dish"
                },
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "quantity": { "type": "string" }
                        },
                        "required": ["name", "quantity"],
                        "additionalProperties": false
                    }
                },
                "steps": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "prepTimeMinutes": { "type": "integer" },
                "cookTimeMinutes": { "type": "integer" },
                "servings": { "type": "integer" }
            },
            "required": ["name", "description", "ingredients", "steps"],
            "additionalProperties": false
        }),
    )
}
