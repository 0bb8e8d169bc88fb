//! ChefInBox core library
//!
//! Turns a list of ingredients, typed in by hand or recognized on a photo,
//! into a batch of recipe suggestions scaled to a serving count. Both model
//! calls run against Gemini with declared JSON response schemas.

pub mod error;
pub mod types;
pub mod traits;
pub mod state;
pub mod app_impl;
pub mod core;
pub mod services;

// Re-export main types
pub use app_impl::ChefApp;
pub use error::{ApiFailure, ChefError, ChefResult};
pub use state::{
    SessionPhase, SessionSnapshot, SessionState, SharedSessionState, ANALYSIS_ERROR_MESSAGE,
    DEFAULT_SERVINGS, GENERATION_ERROR_MESSAGE, MAX_SERVINGS, MIN_SERVINGS,
};
pub use traits::*;
pub use types::*;
pub use services::*;
