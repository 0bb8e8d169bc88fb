//! Gemini client implementation for ingredient recognition and recipe
//! generation
//!
//! Both calls go through `generateContent` with a declared JSON response
//! schema, so the model replies with machine-readable payloads instead of
//! prose.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;
use tracing::debug;

use crate::core::parse::{parse_ingredients_payload, parse_recipes_payload};
use crate::core::prompt::PromptBuilder;
use crate::core::schema::{ingredients_response_schema, recipes_response_schema};
use crate::error::ApiFailure;
use crate::traits::{IngredientRecognizer, RecipeGenerator};
use crate::types::{CapturedImage, PromptProfile, Recipe};

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Public Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for both Gemini calls
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
    prompt: PromptBuilder,
}

impl GeminiClient {
    /// Create a client with the default model, endpoint, timeout and prompt
    /// profile
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            prompt: PromptBuilder::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_profile(mut self, profile: PromptProfile) -> Self {
        self.prompt = PromptBuilder::new(profile);
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Send one `generateContent` request and extract the text of the first
    /// candidate
    async fn generate_content(&self, body: serde_json::Value) -> Result<String, ApiFailure> {
        let request_start = Instant::now();

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiFailure::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return match response.status().as_u16() {
                401 => Err(ApiFailure::AuthenticationFailed),
                429 => Err(ApiFailure::RateLimitExceeded),
                503 => Err(ApiFailure::ServiceUnavailable),
                _ => Err(ApiFailure::ServerError(response.status().to_string())),
            };
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidRequest(format!("Failed to parse response: {}", e)))?;

        let content = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| ApiFailure::InvalidRequest("No content in response".to_string()))?;

        // Gemini doesn't always provide token counts in the response
        let usage_metadata = response_json.get("usageMetadata");
        let prompt_token_count = usage_metadata
            .and_then(|u| u.get("promptTokenCount"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0);
        let candidates_token_count = usage_metadata
            .and_then(|u| u.get("candidatesTokenCount"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0);

        debug!(
            "generateContent answered in {:?} ({} prompt + {} candidate tokens)",
            request_start.elapsed(),
            prompt_token_count,
            candidates_token_count
        );

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl IngredientRecognizer for GeminiClient {
    async fn identify_ingredients(&self, image: &CapturedImage) -> Result<Vec<String>, ApiFailure> {
        image.validate()?;

        let encoded = general_purpose::STANDARD.encode(&image.data);
        let body = json!({
            "contents": [
                {
                    "parts": [
                        {
                            "inlineData": {
                                "mimeType": image.media_type,
                                "data": encoded
                            }
                        },
                        {
                            "text": self.prompt.recognition_instruction()
                        }
                    ]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": ingredients_response_schema()
            }
        });

        let payload = self.generate_content(body).await?;
        parse_ingredients_payload(&payload)
    }
}

#[async_trait]
impl RecipeGenerator for GeminiClient {
    async fn suggest_recipes(
        &self,
        ingredients: &[String],
        servings: u32,
    ) -> Result<Vec<Recipe>, ApiFailure> {
        if ingredients.is_empty() {
            return Err(ApiFailure::InvalidRequest(
                "No ingredients to cook with".to_string(),
            ));
        }
        if servings == 0 {
            return Err(ApiFailure::InvalidRequest(
                "Servings must be at least 1".to_string(),
            ));
        }

        let body = json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": self.prompt.generation_instruction(ingredients, servings)
                        }
                    ]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": recipes_response_schema(servings)
            }
        });

        let payload = self.generate_content(body).await?;
        parse_recipes_payload(&payload)
    }
}
