//! Client trait definitions for dependency injection
//!
//! The orchestrator is generic over these two traits so tests can drive the
//! state machine with mocks while the binary wires in the Gemini service.

use async_trait::async_trait;

use crate::error::ApiFailure;
use crate::types::{CapturedImage, Recipe};

/// Ingredient recognition client
///
/// One multimodal model call turning a still image into ingredient name
/// strings. Names come back as-is; deduplication belongs to the registry.
#[mockall::automock]
#[async_trait]
pub trait IngredientRecognizer: Send + Sync {
    /// Identify the food ingredients visible in the image
    async fn identify_ingredients(&self, image: &CapturedImage) -> Result<Vec<String>, ApiFailure>;
}

/// Recipe generation client
///
/// One text model call turning ingredient names and a serving count into a
/// structured recipe batch. Callers must reject empty ingredient lists
/// before dispatching.
#[mockall::automock]
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Request a batch of recipes with quantities scaled to `servings`
    async fn suggest_recipes(&self, ingredients: &[String], servings: u32) -> Result<Vec<Recipe>, ApiFailure>;
}
