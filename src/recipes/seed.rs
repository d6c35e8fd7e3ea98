// ABOUTME: Reference recipes the store is seeded with at startup
// ABOUTME: Stands in for persisted state since the service keeps nothing on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use recipe_core::models::{Ingredient, Recipe, RecipeId};

/// Recipe "1": Scrambled Eggs for two, not a favorite
#[must_use]
pub fn scrambled_eggs() -> Recipe {
    Recipe::new("Scrambled Eggs", 2.0).with_ingredients([
        Ingredient::count("Eggs", 4.0),
        Ingredient::new("Milk", 2.0, "tbsp"),
        Ingredient::new("Salt", 0.25, "tsp"),
    ])
}

/// Recipe "2": Pancakes for four, marked favorite
#[must_use]
pub fn pancakes() -> Recipe {
    Recipe::new("Pancakes", 4.0)
        .with_ingredients([
            Ingredient::new("Flour", 1.5, "cup"),
            Ingredient::new("Baking Powder", 3.5, "tsp"),
            Ingredient::new("Salt", 1.0, "tsp"),
            Ingredient::new("White Sugar", 1.0, "tbsp"),
            Ingredient::new("Milk", 1.25, "cup"),
            Ingredient::count("Egg", 1.0),
            Ingredient::new("Melted Butter", 3.0, "tbsp"),
        ])
        .with_favorite(true)
}

/// The reference deployment's seed set, keyed by identifier
#[must_use]
pub fn reference_recipes() -> Vec<(RecipeId, Recipe)> {
    vec![
        ("1".to_owned(), scrambled_eggs()),
        ("2".to_owned(), pancakes()),
    ]
}
