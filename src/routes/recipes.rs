// ABOUTME: Route handlers for the recipe REST API
// ABOUTME: Decodes requests, calls the recipe store or scaler, and encodes JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe routes
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | `GET` | `/recipes?favorite=<bool>` | list (optionally favorites only) |
//! | `GET` | `/recipes/:recipe_id` | get one |
//! | `POST` | `/scale-recipe` | scale an ingredient list |
//! | `POST` | `/edit-recipe` | partial update |
//! | `POST` | `/favorite-recipe` | set the favorite flag |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use recipe_core::errors::AppError;
use recipe_core::models::{Ingredient, Recipe, RecipeId, RecipeUpdate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::middleware::RequestContext;
use crate::recipes::{scale_ingredients, RecipeStore};

/// Query parameters for listing recipes
#[derive(Debug, Deserialize, Default)]
pub struct ListRecipesQuery {
    /// Only return recipes marked favorite
    pub favorite: Option<bool>,
}

/// Request body for scaling an ingredient list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleRequest {
    /// Servings the quantities are currently written for
    pub original_servings: f64,
    /// Servings to scale to
    pub desired_servings: f64,
    /// Ingredients to rescale
    pub ingredients: Vec<Ingredient>,
}

/// Response for a scaled ingredient list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleResponse {
    /// Echo of the request's original servings
    pub original_servings: f64,
    /// Echo of the request's desired servings
    pub desired_servings: f64,
    /// Rescaled ingredients, in request order
    pub scaled_ingredients: Vec<Ingredient>,
}

/// Request body for a partial recipe edit
///
/// Fields other than `recipe_id` are optional; omitted or `null` fields keep
/// their stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRecipeRequest {
    /// Recipe to edit
    pub recipe_id: RecipeId,
    /// Fields to replace
    #[serde(flatten)]
    pub update: RecipeUpdate,
}

/// Request body for setting the favorite flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRequest {
    /// Recipe to mark
    pub recipe_id: RecipeId,
    /// New flag value
    pub favorite: bool,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(store: Arc<RecipeStore>) -> Router {
        Router::new()
            .route("/recipes", get(Self::handle_list))
            .route("/recipes/:recipe_id", get(Self::handle_get))
            .route("/scale-recipe", post(Self::handle_scale))
            .route("/edit-recipe", post(Self::handle_edit))
            .route("/favorite-recipe", post(Self::handle_favorite))
            .with_state(store)
    }

    /// Handle GET /recipes - List all recipes, or only favorites
    async fn handle_list(
        State(store): State<Arc<RecipeStore>>,
        Query(query): Query<ListRecipesQuery>,
    ) -> Result<Response, AppError> {
        let recipes: BTreeMap<RecipeId, Recipe> = store.list(query.favorite.unwrap_or(false));
        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /recipes/:recipe_id - Get a specific recipe
    async fn handle_get(
        State(store): State<Arc<RecipeStore>>,
        context: RequestContext,
        Path(recipe_id): Path<String>,
    ) -> Result<Response, AppError> {
        debug!(recipe_id = %recipe_id, "Fetching recipe");
        let recipe = store.get(&recipe_id).map_err(|e| context.attach(e))?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle POST /scale-recipe - Rescale ingredients between servings counts
    async fn handle_scale(
        context: RequestContext,
        Json(request): Json<ScaleRequest>,
    ) -> Result<Response, AppError> {
        let scaled_ingredients = scale_ingredients(
            request.original_servings,
            request.desired_servings,
            &request.ingredients,
        )
        .map_err(|e| context.attach(e))?;

        let response = ScaleResponse {
            original_servings: request.original_servings,
            desired_servings: request.desired_servings,
            scaled_ingredients,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /edit-recipe - Apply a partial update
    async fn handle_edit(
        State(store): State<Arc<RecipeStore>>,
        context: RequestContext,
        Json(request): Json<EditRecipeRequest>,
    ) -> Result<Response, AppError> {
        let recipe = store
            .edit(&request.recipe_id, request.update)
            .map_err(|e| context.attach(e))?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle POST /favorite-recipe - Set the favorite flag
    async fn handle_favorite(
        State(store): State<Arc<RecipeStore>>,
        context: RequestContext,
        Json(request): Json<FavoriteRequest>,
    ) -> Result<Response, AppError> {
        let recipe = store
            .set_favorite(&request.recipe_id, request.favorite)
            .map_err(|e| context.attach(e))?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }
}
