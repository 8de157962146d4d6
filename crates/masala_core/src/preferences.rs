//! Request types and the input normalizer.

use serde::{Deserialize, Serialize};

/// Cuisine applied when the caller supplies none.
pub const DEFAULT_CUISINE: &str = "Indian";
/// Dish type applied when the caller supplies none.
pub const DEFAULT_DISH_TYPE: &str = "Curry";
/// Spice level applied when the caller supplies none.
pub const DEFAULT_SPICE_LEVEL: &str = "Mild";

/// An ingredient identified upstream, with an optional quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, e.g. "tomato"
    pub name: String,
    /// Free-form quantity, e.g. "2" or "500g"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl Ingredient {
    /// Creates a new ingredient with the given name and quantity.
    pub fn new(name: impl Into<String>, quantity: Option<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Inbound recipe request body.
///
/// Every field is optional on the wire. Missing or empty preference fields
/// fall back to fixed defaults during normalization; `user_prompt` is
/// intended to be required but is deliberately not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeRequest {
    pub cuisine: Option<String>,
    pub dish_type: Option<String>,
    pub spice_level: Option<String>,
    pub dietary_restrictions: Option<Vec<String>>,
    pub available_ingredients: Option<Vec<Ingredient>>,
    pub user_prompt: Option<String>,
}

/// Canonical preference set: a [`RecipeRequest`] after defaults have been
/// applied.
///
/// # Examples
///
/// ```
/// use masala_core::{Preferences, RecipeRequest, DEFAULT_CUISINE};
///
/// let prefs = Preferences::from_request(RecipeRequest::default());
/// assert_eq!(prefs.cuisine(), DEFAULT_CUISINE);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Preferences {
    /// Cuisine, defaulted when absent
    cuisine: String,
    /// Dish type, defaulted when absent
    dish_type: String,
    /// Spice level, defaulted when absent
    spice_level: String,
    /// Dietary restrictions; empty means none
    dietary_restrictions: Vec<String>,
    /// Available ingredients; empty means none
    available_ingredients: Vec<Ingredient>,
    /// Free-text request, passed through verbatim and never defaulted
    user_prompt: Option<String>,
}

impl Preferences {
    /// Normalizes a raw request into the canonical preference set.
    ///
    /// Caller values win when present and non-empty; otherwise the scalar
    /// fields take their fixed defaults and the sequence fields collapse to
    /// empty. `user_prompt` is never defaulted or validated.
    pub fn from_request(request: RecipeRequest) -> Self {
        Self {
            cuisine: non_empty(request.cuisine, DEFAULT_CUISINE),
            dish_type: non_empty(request.dish_type, DEFAULT_DISH_TYPE),
            spice_level: non_empty(request.spice_level, DEFAULT_SPICE_LEVEL),
            dietary_restrictions: request.dietary_restrictions.unwrap_or_default(),
            available_ingredients: request.available_ingredients.unwrap_or_default(),
            user_prompt: request.user_prompt,
        }
    }
}

fn non_empty(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_absent() {
        let prefs = Preferences::from_request(RecipeRequest::default());

        assert_eq!(prefs.cuisine(), "Indian");
        assert_eq!(prefs.dish_type(), "Curry");
        assert_eq!(prefs.spice_level(), "Mild");
        assert!(prefs.dietary_restrictions().is_empty());
        assert!(prefs.available_ingredients().is_empty());
        assert_eq!(*prefs.user_prompt(), None);
    }

    #[test]
    fn test_caller_values_win() {
        let request = RecipeRequest {
            cuisine: Some("Thai".to_string()),
            dish_type: Some("Soup".to_string()),
            spice_level: Some("Hot".to_string()),
            dietary_restrictions: Some(vec!["vegan".to_string()]),
            available_ingredients: Some(vec![Ingredient::new("lemongrass", None)]),
            user_prompt: Some("something warming".to_string()),
        };

        let prefs = Preferences::from_request(request);

        assert_eq!(prefs.cuisine(), "Thai");
        assert_eq!(prefs.dish_type(), "Soup");
        assert_eq!(prefs.spice_level(), "Hot");
        assert_eq!(prefs.dietary_restrictions(), &["vegan".to_string()]);
        assert_eq!(prefs.available_ingredients().len(), 1);
        assert_eq!(prefs.user_prompt().as_deref(), Some("something warming"));
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let request = RecipeRequest {
            cuisine: Some(String::new()),
            dish_type: Some(String::new()),
            spice_level: Some(String::new()),
            ..RecipeRequest::default()
        };

        let prefs = Preferences::from_request(request);

        assert_eq!(prefs.cuisine(), DEFAULT_CUISINE);
        assert_eq!(prefs.dish_type(), DEFAULT_DISH_TYPE);
        assert_eq!(prefs.spice_level(), DEFAULT_SPICE_LEVEL);
    }

    #[test]
    fn test_lowercase_mild_is_not_the_default() {
        // Comparison against the default is case-sensitive by contract.
        let request = RecipeRequest {
            spice_level: Some("mild".to_string()),
            ..RecipeRequest::default()
        };

        let prefs = Preferences::from_request(request);
        assert_eq!(prefs.spice_level(), "mild");
        assert_ne!(prefs.spice_level(), DEFAULT_SPICE_LEVEL);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let body = serde_json::json!({
            "cuisine": "Mexican",
            "dishType": "Taco",
            "spiceLevel": "Hot",
            "dietaryRestrictions": ["vegetarian"],
            "availableIngredients": [{"name": "tortilla", "quantity": "6"}],
            "userPrompt": "street food"
        });

        let request: RecipeRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.dish_type.as_deref(), Some("Taco"));
        assert_eq!(request.spice_level.as_deref(), Some("Hot"));
        assert_eq!(
            request.available_ingredients.unwrap()[0].quantity.as_deref(),
            Some("6")
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = serde_json::json!({
            "userPrompt": "dinner",
            "imageUrl": "https://example.com/fridge.jpg"
        });

        let request: RecipeRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.user_prompt.as_deref(), Some("dinner"));
    }
}
