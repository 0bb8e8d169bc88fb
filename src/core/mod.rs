//! Core business logic for the recipe suggestion app

pub mod parse;
pub mod prompt;
pub mod registry;
pub mod schema;
pub mod utils;

pub use parse::{parse_ingredients_payload, parse_recipes_payload};
pub use prompt::PromptBuilder;
pub use registry::IngredientRegistry;
pub use schema::{ingredients_response_schema, recipes_response_schema};
pub use utils::load_captured_image;
