// ABOUTME: Recipe management module: the in-memory store, the ingredient scaler, and seed data
// ABOUTME: Everything the HTTP layer calls into lives behind this module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipes Module
//!
//! - [`RecipeStore`]: authoritative, concurrently shared collection of recipes
//!   keyed by identifier. Supports list, get, partial edit and favorite toggle.
//! - [`scale_ingredients`]: pure proportional rescaling of an ingredient list;
//!   never reads or writes the store.
//! - [`seed`]: the recipes the service starts with.
//!
//! ## Example Usage
//!
//! ```rust
//! use recipe_service::recipes::{scale_ingredients, RecipeStore};
//! use recipe_service::models::RecipeUpdate;
//!
//! let store = RecipeStore::seeded();
//! let eggs = store.get("1").unwrap();
//! let doubled = scale_ingredients(eggs.servings, eggs.servings * 2.0, &eggs.ingredients).unwrap();
//! assert_eq!(doubled.len(), eggs.ingredients.len());
//!
//! let renamed = store.edit("1", RecipeUpdate::new().with_name("Soft Eggs")).unwrap();
//! assert_eq!(renamed.name, "Soft Eggs");
//! ```

/// Proportional ingredient scaling
pub mod scaling;
/// Seed recipes loaded at startup
pub mod seed;
/// Concurrent in-memory recipe store
pub mod store;

pub use scaling::{scale_ingredients, scaling_factor};
pub use store::RecipeStore;
