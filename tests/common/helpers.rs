//! Test helpers and builder patterns for the scenario tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate.

use chefinbox::{ChefApp, MockIngredientRecognizer, MockRecipeGenerator};

/// Type alias for the app under test with both clients mocked
pub type TestApp = ChefApp<MockIngredientRecognizer, MockRecipeGenerator>;

/// Builder pattern for creating test apps with mock clients
pub struct ChefAppBuilder {
    recognizer: MockIngredientRecognizer,
    generator: MockRecipeGenerator,
}

impl ChefAppBuilder {
    /// Create a new builder with unconfigured mocks
    pub fn new() -> Self {
        Self {
            recognizer: MockIngredientRecognizer::new(),
            generator: MockRecipeGenerator::new(),
        }
    }

    /// Configure the recognizer mock with a setup function
    pub fn with_recognizer<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockIngredientRecognizer),
    {
        setup(&mut self.recognizer);
        self
    }

    /// Configure the generator mock with a setup function
    pub fn with_generator<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockRecipeGenerator),
    {
        setup(&mut self.generator);
        self
    }

    /// Build the app with all configured mocks
    pub fn build(self) -> TestApp {
        ChefApp::new(self.recognizer, self.generator)
    }
}

impl Default for ChefAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Create an app whose mocks expect no calls at all
    pub fn quiet_app() -> TestApp {
        ChefAppBuilder::new().build()
    }

    /// Seed the registry through the public edit path
    pub async fn seed_ingredients(app: &TestApp, names: &[&str]) {
        for name in names {
            app.add_ingredient(name).await;
        }
    }
}
