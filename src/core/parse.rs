//! Envelope parsing for the JSON documents returned by the model
//!
//! Both calls constrain the model to a single-field JSON object. A missing
//! top-level field defaults to an empty sequence; a document that cannot be
//! parsed into the envelope at all fails the call. Inside the recipe array,
//! records that do not match the declared shape are dropped individually
//! (logged at warn level) rather than failing the surviving batch.

use serde::Deserialize;
use tracing::warn;

use crate::error::ApiFailure;
use crate::types::Recipe;

#[derive(Debug, Default, Deserialize)]
struct IngredientsEnvelope {
    #[serde(default)]
    ingredients: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RecipesEnvelope {
    #[serde(default)]
    recipes: Vec<serde_json::Value>,
}

/// Extract the ingredient names from a recognition payload
pub fn parse_ingredients_payload(payload: &str) -> Result<Vec<String>, ApiFailure> {
    let envelope: IngredientsEnvelope = serde_json::from_str(payload.trim())
        .map_err(|e| ApiFailure::InvalidRequest(format!("unparsable recognition payload: {e}")))?;
    Ok(envelope.ingredients)
}

/// Extract the recipe batch from a generation payload
pub fn parse_recipes_payload(payload: &str) -> Result<Vec<Recipe>, ApiFailure> {
    let envelope: RecipesEnvelope = serde_json::from_str(payload.trim())
        .map_err(|e| ApiFailure::InvalidRequest(format!("unparsable generation payload: {e}")))?;

    let batch = envelope
        .recipes
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Recipe>(record) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!("dropping malformed recipe record: {e}");
                None
            }
        })
        .collect();

    Ok(batch)
}
