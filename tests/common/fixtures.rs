//! Test fixtures and data for the scenario tests
//!
//! This module provides consistent test data used across the suite.

use chefinbox::{CapturedImage, Difficulty, Recipe};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Serving count most scenarios run with
    pub const TEST_SERVINGS: u32 = 4;

    /// Names as the recognition call returns them
    pub fn recognized_names() -> Vec<String> {
        vec!["Uovo".to_string(), "Farina".to_string()]
    }

    /// Names with whitespace and case variations
    pub fn edge_case_names() -> Vec<String> {
        vec![
            "pomodoro".to_string(),
            " Pomodoro ".to_string(),
            "POMODORO".to_string(),
            "Basilico".to_string(),
        ]
    }

    /// A tiny stand-in for a captured JPEG frame
    pub fn sample_image() -> CapturedImage {
        CapturedImage::jpeg(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
    }

    /// One fully populated recipe
    pub fn sample_recipe(title: &str, servings: u32) -> Recipe {
        Recipe {
            title: title.to_string(),
            description: format!("{title}, come da tradizione"),
            ingredients: vec![format!("Ingredienti per {servings} persone")],
            instructions: vec!["Preparare".to_string(), "Cuocere".to_string()],
            prep_time: "30 minuti".to_string(),
            difficulty: Difficulty::Medium,
            calories: Some("500 kcal".to_string()),
            image_url: format!(
                "https://example.com/{}.jpg",
                title.to_lowercase().replace(' ', "-")
            ),
            servings,
        }
    }

    /// A standard three-recipe batch
    pub fn sample_batch(servings: u32) -> Vec<Recipe> {
        vec![
            Self::sample_recipe("Spaghetti alla Carbonara", servings),
            Self::sample_recipe("Melanzane alla Parmigiana", servings),
            Self::sample_recipe("Risotto alla Milanese", servings),
        ]
    }
}
