//! Ingredient registry with case-insensitive deduplication
//!
//! The registry is the user's working set of ingredients: the merge target
//! for recognition results and the source of every generation request.

use crate::types::{Ingredient, IngredientId};

/// In-memory, insertion-ordered collection of named ingredients
///
/// Uniqueness is enforced case-insensitively on the trimmed name, never on
/// the id. Ids only exist so single entries can be removed.
#[derive(Clone, Debug, Default)]
pub struct IngredientRegistry {
    entries: Vec<Ingredient>,
}

impl IngredientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add a named ingredient, returning the new entry
    ///
    /// The name is trimmed first. Returns `None` when the trimmed name is
    /// empty or an entry with the same name (ignoring case) already exists.
    pub fn add(&mut self, name: &str) -> Option<Ingredient> {
        let name = name.trim();
        if name.is_empty() || self.contains_name(name) {
            return None;
        }
        let ingredient = Ingredient::new(name);
        self.entries.push(ingredient.clone());
        Some(ingredient)
    }

    /// Merge a batch of recognized names, returning the entries actually added
    pub fn merge(&mut self, names: impl IntoIterator<Item = String>) -> Vec<Ingredient> {
        names.into_iter().filter_map(|name| self.add(&name)).collect()
    }

    /// Remove a single entry by id; `true` when something was removed
    pub fn remove(&mut self, id: IngredientId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether a name (ignoring case) is already present
    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.entries.iter().any(|entry| entry.name.to_lowercase() == needle)
    }

    /// Names in insertion order, as sent to the generation call
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Ingredient] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
