// ABOUTME: Core data models shared by the recipe store, scaler, and HTTP layer
// ABOUTME: Re-exports Recipe, Ingredient, RecipeUpdate and their validation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Recipe, ingredient, and partial-update models
pub mod recipe;

pub use recipe::{
    validate_ingredients, validate_servings, Ingredient, Recipe, RecipeId, RecipeUpdate,
};
