// ABOUTME: Concurrent in-memory recipe store with per-record atomic updates
// ABOUTME: Serves list/get and applies partial edits and favorite toggles in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::collections::BTreeMap;

use dashmap::DashMap;
use recipe_core::errors::RecipeError;
use recipe_core::models::{Recipe, RecipeId, RecipeUpdate};
use tracing::{debug, info};

use super::seed;

/// Authoritative recipe collection.
///
/// Records live in a sharded map. Mutations run while holding the record's
/// write guard and reads clone under a read guard, so a concurrent reader
/// observes either the previous recipe or the fully updated one.
///
/// Identifiers are fixed at construction; there is no insert or remove.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: DashMap<RecipeId, Recipe>,
}

impl RecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given recipes
    ///
    /// Later entries replace earlier ones with the same identifier.
    #[must_use]
    pub fn with_recipes(recipes: impl IntoIterator<Item = (RecipeId, Recipe)>) -> Self {
        Self {
            recipes: recipes.into_iter().collect(),
        }
    }

    /// Create a store holding the reference seed recipes
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::with_recipes(seed::reference_recipes());
        info!(recipes = store.len(), "Recipe store seeded");
        store
    }

    /// Number of stored recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the store holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Snapshot of every recipe, or only the favorites, ordered by identifier
    #[must_use]
    pub fn list(&self, favorite_only: bool) -> BTreeMap<RecipeId, Recipe> {
        let recipes: BTreeMap<RecipeId, Recipe> = self
            .recipes
            .iter()
            .filter(|entry| !favorite_only || entry.value().favorite)
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        debug!(favorite_only, count = recipes.len(), "Listed recipes");
        recipes
    }

    /// Snapshot of a single recipe
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if no recipe has this identifier
    pub fn get(&self, recipe_id: &str) -> Result<Recipe, RecipeError> {
        self.recipes
            .get(recipe_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RecipeError::not_found(recipe_id))
    }

    /// Apply a partial update and return the updated recipe
    ///
    /// The update is validated before the record is locked; a rejected update
    /// leaves the stored recipe untouched.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidServings` or `RecipeError::InvalidIngredient`
    /// for an invalid field, and `RecipeError::NotFound` if no recipe has this
    /// identifier
    pub fn edit(&self, recipe_id: &str, update: RecipeUpdate) -> Result<Recipe, RecipeError> {
        update.validate()?;

        let changed = update.changed_fields();
        let mut entry = self
            .recipes
            .get_mut(recipe_id)
            .ok_or_else(|| RecipeError::not_found(recipe_id))?;
        entry.apply(update);
        let updated = entry.value().clone();
        drop(entry);

        info!(recipe_id, fields = ?changed, "Recipe edited");
        Ok(updated)
    }

    /// Set the favorite flag and return the updated recipe
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if no recipe has this identifier
    pub fn set_favorite(&self, recipe_id: &str, favorite: bool) -> Result<Recipe, RecipeError> {
        let mut entry = self
            .recipes
            .get_mut(recipe_id)
            .ok_or_else(|| RecipeError::not_found(recipe_id))?;
        entry.favorite = favorite;
        let updated = entry.value().clone();
        drop(entry);

        info!(recipe_id, favorite, "Recipe favorite flag set");
        Ok(updated)
    }
}
