//! Recipe payload type.

use serde::{Deserialize, Serialize};

/// A structured recipe returned by the generative capability.
///
/// The field set is owned by the schema collaborator; this crate treats the
/// payload as opaque validated JSON and only forwards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(serde_json::Value);

impl Recipe {
    /// Wraps a schema-conforming JSON value.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the recipe, returning the underlying JSON value.
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}
