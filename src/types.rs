//! Core data types for the recipe suggestion app

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiFailure;

/// The single image encoding accepted by the recognition call
pub const SUPPORTED_MEDIA_TYPE: &str = "image/jpeg";

/// Unique identifier for a registry entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientId(Uuid);

impl IngredientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for IngredientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named entry in the ingredient registry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
}

impl Ingredient {
    /// Create a new entry with a freshly generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: IngredientId::new(),
            name: name.into(),
        }
    }
}

/// Recipe difficulty as constrained by the declared response schema
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Immutable recipe value object produced by the generation call
///
/// Ingredient lines arrive already scaled to the requested serving count,
/// and `servings` echoes that count without being re-verified here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    pub image_url: String,
    pub servings: u32,
}

/// A still-image frame handed to the recognition call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedImage {
    pub data: Vec<u8>,
    pub media_type: String,
}

impl CapturedImage {
    /// Wrap raw JPEG bytes
    pub fn jpeg(data: Vec<u8>) -> Self {
        Self {
            data,
            media_type: SUPPORTED_MEDIA_TYPE.to_string(),
        }
    }

    /// Check the input constraints of the recognition call: a non-empty
    /// payload in the one supported encoding
    pub fn validate(&self) -> Result<(), ApiFailure> {
        if self.data.is_empty() {
            return Err(ApiFailure::InvalidRequest("empty image payload".to_string()));
        }
        if self.media_type != SUPPORTED_MEDIA_TYPE {
            return Err(ApiFailure::InvalidRequest(format!(
                "unsupported media type: {} (expected {})",
                self.media_type, SUPPORTED_MEDIA_TYPE
            )));
        }
        Ok(())
    }
}

/// Configuration shaping the fixed prompt text for both model calls
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PromptProfile {
    /// Culinary tradition the generation call is constrained to
    pub cuisine: String,
    /// Language the model must answer in
    pub language: String,
    /// Number of recipes requested per generation call
    pub recipe_count: u32,
}

impl Default for PromptProfile {
    fn default() -> Self {
        Self {
            cuisine: "Italian".to_string(),
            language: "Italian".to_string(),
            recipe_count: 3,
        }
    }
}
