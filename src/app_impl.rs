//! Application orchestrator
//!
//! `ChefApp` wires the session state machine to the recognition and
//! generation clients and serializes the remote calls so at most one is in
//! flight at a time.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{ChefError, ChefResult};
use crate::state::{create_shared_state, SessionSnapshot, SessionState, SharedSessionState};
use crate::traits::{IngredientRecognizer, RecipeGenerator};
use crate::types::{CapturedImage, Ingredient, IngredientId, Recipe};

/// Orchestrates ingredient edits, image analysis and recipe generation over
/// one shared session
pub struct ChefApp<R: IngredientRecognizer, G: RecipeGenerator> {
    pub state: SharedSessionState,
    pub recognizer: R,
    pub generator: G,
    busy: Mutex<()>,
}

impl<R: IngredientRecognizer, G: RecipeGenerator> ChefApp<R, G> {
    /// Create an idle application around the given clients
    pub fn new(recognizer: R, generator: G) -> Self {
        Self {
            state: create_shared_state(SessionState::new()),
            recognizer,
            generator,
            busy: Mutex::new(()),
        }
    }

    /// Add one ingredient by name; `None` when it duplicates an existing
    /// entry or the name is blank
    pub async fn add_ingredient(&self, name: &str) -> Option<Ingredient> {
        let mut state = self.state.write().await;
        state.registry_mut().add(name)
    }

    /// Remove an ingredient by id; `false` when no entry matches
    pub async fn remove_ingredient(&self, id: IngredientId) -> bool {
        let mut state = self.state.write().await;
        state.registry_mut().remove(id)
    }

    /// Drop every ingredient; a ready result view falls back to idle
    pub async fn clear_ingredients(&self) {
        let mut state = self.state.write().await;
        state.clear_ingredients();
    }

    /// Set the serving count, clamped to the supported range
    pub async fn set_servings(&self, value: u32) -> u32 {
        let mut state = self.state.write().await;
        state.set_servings(value)
    }

    /// Adjust the serving count by a delta, clamped to the supported range
    pub async fn adjust_servings(&self, delta: i32) -> u32 {
        let mut state = self.state.write().await;
        state.adjust_servings(delta)
    }

    /// Close an error phase after the message has been shown
    pub async fn acknowledge_error(&self) {
        let mut state = self.state.write().await;
        state.acknowledge_error();
    }

    /// Plain-data view of the session for presentation layers
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        state.snapshot()
    }

    /// Whether a remote call is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.try_lock().is_err()
    }

    /// Recognize ingredients on a captured photo and merge them into the
    /// registry
    ///
    /// Returns only the entries that were actually added; names already
    /// present under any casing are skipped. Rejected immediately with
    /// [`ChefError::Busy`] while another remote call is in flight.
    pub async fn request_analysis(&self, image: &CapturedImage) -> ChefResult<Vec<Ingredient>> {
        let _busy = self.busy.try_lock().map_err(|_| ChefError::Busy {
            operation: "image analysis".to_string(),
        })?;

        {
            let mut state = self.state.write().await;
            state.begin_analysis();
        }

        match self.recognizer.identify_ingredients(image).await {
            Ok(names) => {
                let mut state = self.state.write().await;
                let added = state.registry_mut().merge(names);
                state.complete_analysis();
                info!("image analysis added {} new ingredients", added.len());
                Ok(added)
            }
            Err(reason) => {
                let mut state = self.state.write().await;
                state.fail_analysis();
                warn!("image analysis failed: {reason}");
                Err(ChefError::AnalysisFailed { reason })
            }
        }
    }

    /// Generate a recipe batch from the current registry and serving count
    ///
    /// An empty registry is a no-op that returns an empty batch without
    /// calling the generator or touching the phase. Rejected immediately
    /// with [`ChefError::Busy`] while another remote call is in flight. On
    /// success the new batch replaces the previous one wholesale; on failure
    /// the previous batch is left untouched.
    pub async fn request_generation(&self) -> ChefResult<Vec<Recipe>> {
        {
            let state = self.state.read().await;
            if state.registry().is_empty() {
                debug!("generation requested with an empty registry, skipping");
                return Ok(Vec::new());
            }
        }

        let _busy = self.busy.try_lock().map_err(|_| ChefError::Busy {
            operation: "recipe generation".to_string(),
        })?;

        let (names, servings) = {
            let mut state = self.state.write().await;
            state.begin_generation();
            (state.registry().names(), state.servings())
        };

        match self.generator.suggest_recipes(&names, servings).await {
            Ok(batch) => {
                let mut state = self.state.write().await;
                state.complete_generation(batch.clone());
                info!(
                    "generated {} recipes from {} ingredients for {} servings",
                    batch.len(),
                    names.len(),
                    servings
                );
                Ok(batch)
            }
            Err(reason) => {
                let mut state = self.state.write().await;
                state.fail_generation();
                warn!("recipe generation failed: {reason}");
                Err(ChefError::GenerationFailed { reason })
            }
        }
    }
}
