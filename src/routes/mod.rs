// ABOUTME: Route module organization for the recipe service HTTP endpoints
// ABOUTME: Merges recipe, health, and descriptor routes into a single router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the recipe service
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to [`crate::recipes`]. Middleware layers are applied by
//! [`crate::server::build_router`].

/// Health check and readiness routes
pub mod health;
/// Recipe listing, lookup, scaling, editing and favorites
pub mod recipes;

use std::sync::Arc;

use axum::{http::Uri, routing::get, Json, Router};
use recipe_core::constants::service;
use recipe_core::errors::AppError;
use serde_json::{json, Value};

use crate::middleware::RequestContext;
use crate::recipes::RecipeStore;

pub use health::HealthRoutes;
pub use recipes::{
    EditRecipeRequest, FavoriteRequest, ListRecipesQuery, RecipeRoutes, ScaleRequest,
    ScaleResponse,
};

/// Build the unlayered application router
pub fn api_routes(store: Arc<RecipeStore>) -> Router {
    Router::new()
        .route("/", get(service_descriptor))
        .merge(RecipeRoutes::routes(Arc::clone(&store)))
        .merge(HealthRoutes::routes(store))
        .fallback(route_not_found)
}

/// Handle GET / - Describe the service and its endpoints
async fn service_descriptor() -> Json<Value> {
    Json(json!({
        "name": service::SERVICE_TITLE,
        "description": service::SERVICE_DESCRIPTION,
        "version": service::API_VERSION,
        "endpoints": [
            "GET /recipes",
            "GET /recipes/:recipe_id",
            "POST /scale-recipe",
            "POST /edit-recipe",
            "POST /favorite-recipe",
            "GET /health",
            "GET /ready",
        ],
    }))
}

async fn route_not_found(context: RequestContext, uri: Uri) -> AppError {
    context.attach(AppError::not_found(format!("Route {}", uri.path())))
}
