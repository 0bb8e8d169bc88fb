//! Session state management
//!
//! The session owns everything a presentation layer needs to render: the
//! ingredient registry, the serving count, the current recipe batch and the
//! phase of the two-call state machine.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::core::registry::IngredientRegistry;
use crate::types::{Ingredient, Recipe};

/// Lowest serving count a generation request may carry
pub const MIN_SERVINGS: u32 = 1;
/// Highest serving count a generation request may carry
pub const MAX_SERVINGS: u32 = 12;
/// Serving count of a fresh session
pub const DEFAULT_SERVINGS: u32 = 2;

/// Fixed user-facing message set when the recognition call fails
pub const ANALYSIS_ERROR_MESSAGE: &str = "Errore durante l'analisi dell'immagine. Riprova.";
/// Fixed user-facing message set when the generation call fails
pub const GENERATION_ERROR_MESSAGE: &str =
    "Ops! Qualcosa è andato storto nella generazione delle ricette. Riprova.";

/// Phase of the session state machine
///
/// Transitions:
/// - `Idle -> Analyzing` on photo capture; back to `Idle` on success, to
///   `AnalysisError` on failure
/// - `Idle -> Generating` on a generate request with a non-empty registry;
///   to `ResultsReady` on success, to `GenerationError` on failure
/// - error phases return to `Idle` when acknowledged (the next call also
///   clears them when it starts)
/// - clearing the ingredients moves `ResultsReady` back to `Idle`
///
/// Serving adjustments and ingredient edits never transition the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Analyzing,
    AnalysisError,
    Generating,
    GenerationError,
    ResultsReady,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Idle => write!(f, "idle"),
            SessionPhase::Analyzing => write!(f, "analyzing"),
            SessionPhase::AnalysisError => write!(f, "analysis error"),
            SessionPhase::Generating => write!(f, "generating"),
            SessionPhase::GenerationError => write!(f, "generation error"),
            SessionPhase::ResultsReady => write!(f, "results ready"),
        }
    }
}

/// Owned session state behind the application orchestrator
#[derive(Clone, Debug)]
pub struct SessionState {
    registry: IngredientRegistry,
    servings: u32,
    phase: SessionPhase,
    last_error: Option<String>,
    recipes: Vec<Recipe>,
    last_generated_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Create a fresh idle session
    pub fn new() -> Self {
        Self {
            registry: IngredientRegistry::new(),
            servings: DEFAULT_SERVINGS,
            phase: SessionPhase::Idle,
            last_error: None,
            recipes: Vec::new(),
            last_generated_at: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn registry(&self) -> &IngredientRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut IngredientRegistry {
        &mut self.registry
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_generated_at(&self) -> Option<DateTime<Utc>> {
        self.last_generated_at
    }

    /// Set the serving count, clamped to the supported range
    pub fn set_servings(&mut self, value: u32) -> u32 {
        self.servings = value.clamp(MIN_SERVINGS, MAX_SERVINGS);
        self.servings
    }

    /// Adjust the serving count by a delta, clamped to the supported range
    pub fn adjust_servings(&mut self, delta: i32) -> u32 {
        let adjusted = i64::from(self.servings) + i64::from(delta);
        self.servings = adjusted.clamp(i64::from(MIN_SERVINGS), i64::from(MAX_SERVINGS)) as u32;
        self.servings
    }

    /// Enter the analyzing phase, clearing any stale error message
    pub fn begin_analysis(&mut self) {
        self.phase = SessionPhase::Analyzing;
        self.last_error = None;
    }

    /// Recognition succeeded; the session is idle again
    pub fn complete_analysis(&mut self) {
        self.phase = SessionPhase::Idle;
    }

    /// Recognition failed; keep the fixed message until acknowledged
    pub fn fail_analysis(&mut self) {
        self.phase = SessionPhase::AnalysisError;
        self.last_error = Some(ANALYSIS_ERROR_MESSAGE.to_string());
    }

    /// Enter the generating phase, clearing any stale error message
    pub fn begin_generation(&mut self) {
        self.phase = SessionPhase::Generating;
        self.last_error = None;
    }

    /// Generation succeeded; the batch replaces the previous one wholesale
    pub fn complete_generation(&mut self, batch: Vec<Recipe>) {
        self.recipes = batch;
        self.last_generated_at = Some(Utc::now());
        self.phase = SessionPhase::ResultsReady;
    }

    /// Generation failed; the previous batch is left untouched
    pub fn fail_generation(&mut self) {
        self.phase = SessionPhase::GenerationError;
        self.last_error = Some(GENERATION_ERROR_MESSAGE.to_string());
    }

    /// Close an error phase after the message has been shown; no-op in any
    /// other phase
    pub fn acknowledge_error(&mut self) {
        if matches!(
            self.phase,
            SessionPhase::AnalysisError | SessionPhase::GenerationError
        ) {
            self.phase = SessionPhase::Idle;
            self.last_error = None;
        }
    }

    /// Drop every ingredient
    ///
    /// A ready result view falls back to idle; the batch itself is retained
    /// until the next successful generation replaces it.
    pub fn clear_ingredients(&mut self) {
        self.registry.clear();
        if self.phase == SessionPhase::ResultsReady {
            self.phase = SessionPhase::Idle;
        }
    }

    /// Plain-data view for presentation layers
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            ingredients: self.registry.entries().to_vec(),
            servings: self.servings,
            phase: self.phase,
            last_error: self.last_error.clone(),
            recipes: self.recipes.clone(),
            last_generated_at: self.last_generated_at,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable read-only view of the session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub ingredients: Vec<Ingredient>,
    pub servings: u32,
    pub phase: SessionPhase,
    pub last_error: Option<String>,
    pub recipes: Vec<Recipe>,
    pub last_generated_at: Option<DateTime<Utc>>,
}

/// Shared session state wrapper
pub type SharedSessionState = Arc<RwLock<SessionState>>;

/// Create new shared session state
pub fn create_shared_state(state: SessionState) -> SharedSessionState {
    Arc::new(RwLock::new(state))
}
