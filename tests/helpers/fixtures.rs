// ABOUTME: Recipe fixtures and router builders shared by integration tests
// ABOUTME: Builds seeded stores and fully layered routers with test configuration

use std::sync::Arc;

use axum::Router;
use recipe_service::config::ServerConfig;
use recipe_service::models::{Ingredient, Recipe};
use recipe_service::recipes::RecipeStore;
use recipe_service::server::build_router;

/// Seeded store shared with the router so tests can inspect state directly
pub fn seeded_store() -> Arc<RecipeStore> {
    Arc::new(RecipeStore::seeded())
}

/// Full router (all middleware) over the given store with default config
pub fn router_for(store: &Arc<RecipeStore>) -> Router {
    build_router(Arc::clone(store), &ServerConfig::default())
}

/// The Scrambled Eggs ingredient list from seed recipe "1"
#[allow(dead_code)]
pub fn eggs_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::count("Eggs", 4.0),
        Ingredient::new("Milk", 2.0, "tbsp"),
        Ingredient::new("Salt", 0.25, "tsp"),
    ]
}

/// A small store with one favorite and one regular recipe
#[allow(dead_code)]
pub fn two_recipe_store() -> RecipeStore {
    RecipeStore::with_recipes([
        (
            "toast".to_owned(),
            Recipe::new("Toast", 1.0).with_ingredient(Ingredient::count("Bread", 2.0)),
        ),
        (
            "soup".to_owned(),
            Recipe::new("Soup", 4.0)
                .with_ingredient(Ingredient::new("Stock", 1.0, "l"))
                .with_favorite(true),
        ),
    ])
}

/// Approximate float equality for scaled quantities
#[allow(dead_code)]
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
