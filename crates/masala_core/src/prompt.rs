//! Deterministic prompt compiler.
//!
//! The compiled string is the entire contract surface handed to the
//! generation client, so the exact textual composition matters: clause
//! order is fixed and tests assert byte-for-byte output.

use crate::{DEFAULT_SPICE_LEVEL, Preferences};

/// Fixed closing instruction appended to every compiled prompt.
pub const CLOSING_INSTRUCTION: &str = "Create an amazing recipe that would be perfect for this request. Use whatever ingredients work best - if I mentioned having certain ingredients available, feel free to incorporate them if they fit well, but don't limit yourself to only those ingredients. Focus on making the best possible dish.\n\nGive the recipe a simple, appetizing name (2-3 words).";

/// Compiles the canonical preference set into a single instruction string.
///
/// Pure function of its input: identical preferences always yield
/// byte-identical output. The spicing clause is omitted whenever the spice
/// level equals the literal default `"Mild"` (case-sensitive), so the
/// default is never mentioned.
pub fn compile(prefs: &Preferences) -> String {
    let mut prompt = format!(
        "Create a delicious {} {} recipe",
        prefs.cuisine(),
        prefs.dish_type()
    );

    if prefs.spice_level() != DEFAULT_SPICE_LEVEL {
        prompt.push_str(&format!(
            " with {} spicing",
            prefs.spice_level().to_lowercase()
        ));
    }
    prompt.push('.');

    if !prefs.dietary_restrictions().is_empty() {
        prompt.push_str(&format!(
            "\nRequirements: {}",
            prefs.dietary_restrictions().join(", ")
        ));
    }

    if !prefs.available_ingredients().is_empty() {
        let listed: Vec<String> = prefs
            .available_ingredients()
            .iter()
            .map(|ing| match &ing.quantity {
                Some(quantity) => format!("{} ({})", ing.name, quantity),
                None => ing.name.clone(),
            })
            .collect();
        prompt.push_str(&format!(
            "\nIngredients I have available: {}",
            listed.join(", ")
        ));
    }

    // user_prompt is not validated upstream; an absent prompt renders as an
    // empty placeholder rather than failing.
    prompt.push_str(&format!(
        "\nRequest: {}",
        prefs.user_prompt().as_deref().unwrap_or("")
    ));

    prompt.push('\n');
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ingredient, RecipeRequest};

    fn compile_request(request: RecipeRequest) -> String {
        compile(&Preferences::from_request(request))
    }

    #[test]
    fn test_defaults_open_without_spicing_clause() {
        let prompt = compile_request(RecipeRequest::default());

        assert!(prompt.starts_with("Create a delicious Indian Curry recipe."));
        assert!(!prompt.contains("spicing"));
    }

    #[test]
    fn test_explicit_mild_omits_spicing_clause() {
        let prompt = compile_request(RecipeRequest {
            spice_level: Some("Mild".to_string()),
            ..RecipeRequest::default()
        });

        assert!(prompt.starts_with("Create a delicious Indian Curry recipe."));
        assert!(!prompt.contains("spicing"));
    }

    #[test]
    fn test_hot_spicing_clause_appears_exactly_once() {
        let prompt = compile_request(RecipeRequest {
            spice_level: Some("Hot".to_string()),
            ..RecipeRequest::default()
        });

        assert!(prompt.starts_with("Create a delicious Indian Curry recipe with hot spicing."));
        assert_eq!(prompt.matches(" with hot spicing.").count(), 1);
    }

    #[test]
    fn test_lowercase_mild_still_renders_clause() {
        // The comparison against the default is case-sensitive.
        let prompt = compile_request(RecipeRequest {
            spice_level: Some("mild".to_string()),
            ..RecipeRequest::default()
        });

        assert!(prompt.contains(" with mild spicing."));
    }

    #[test]
    fn test_requirements_line() {
        let prompt = compile_request(RecipeRequest {
            dietary_restrictions: Some(vec!["vegan".to_string(), "gluten-free".to_string()]),
            ..RecipeRequest::default()
        });

        assert!(prompt.contains("\nRequirements: vegan, gluten-free"));
    }

    #[test]
    fn test_ingredients_render_quantity_only_when_present() {
        let prompt = compile_request(RecipeRequest {
            available_ingredients: Some(vec![
                Ingredient::new("tomato", Some("2".to_string())),
                Ingredient::new("onion", None),
            ]),
            ..RecipeRequest::default()
        });

        assert!(prompt.contains("Ingredients I have available: tomato (2), onion"));
        assert!(!prompt.contains("onion ()"));
    }

    #[test]
    fn test_requirements_precede_ingredients() {
        let prompt = compile_request(RecipeRequest {
            dietary_restrictions: Some(vec!["halal".to_string()]),
            available_ingredients: Some(vec![Ingredient::new("chicken", None)]),
            ..RecipeRequest::default()
        });

        let requirements = prompt.find("Requirements:").unwrap();
        let ingredients = prompt.find("Ingredients I have available:").unwrap();
        assert!(requirements < ingredients);
    }

    #[test]
    fn test_absent_user_prompt_renders_empty_placeholder() {
        let prompt = compile_request(RecipeRequest::default());

        assert!(prompt.contains("\nRequest: \n"));
    }

    #[test]
    fn test_end_to_end_default_scenario() {
        let prompt = compile_request(RecipeRequest {
            user_prompt: Some("something quick for dinner".to_string()),
            ..RecipeRequest::default()
        });

        let expected = format!(
            "Create a delicious Indian Curry recipe.\nRequest: something quick for dinner\n{}",
            CLOSING_INSTRUCTION
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_compilation_is_idempotent() {
        let prefs = Preferences::from_request(RecipeRequest {
            cuisine: Some("Thai".to_string()),
            spice_level: Some("Extra Hot".to_string()),
            dietary_restrictions: Some(vec!["dairy-free".to_string()]),
            available_ingredients: Some(vec![Ingredient::new("rice", Some("1 cup".to_string()))]),
            user_prompt: Some("weeknight dinner".to_string()),
            ..RecipeRequest::default()
        });

        assert_eq!(compile(&prefs), compile(&prefs));
    }

    #[test]
    fn test_closing_instruction_always_present() {
        let prompt = compile_request(RecipeRequest::default());
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }
}
