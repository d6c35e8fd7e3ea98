// ABOUTME: HTTP client for the recipe service API used by the demo binary and end-to-end tests
// ABOUTME: Wraps list, get, scale, edit and favorite calls and decodes structured error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe service client
//!
//! ```rust,no_run
//! use recipe_service::client::RecipeClient;
//!
//! # async fn demo() -> Result<(), recipe_service::client::ClientError> {
//! let client = RecipeClient::new("http://127.0.0.1:5001");
//! let favorites = client.list_recipes(true).await?;
//! println!("{} favorite recipes", favorites.len());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use recipe_core::errors::ErrorResponse;
use recipe_core::models::{Ingredient, Recipe, RecipeId, RecipeUpdate};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::routes::{EditRecipeRequest, FavoriteRequest, ScaleRequest, ScaleResponse};

/// Errors returned by [`RecipeClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or the raw body text
        message: String,
    },
}

impl ClientError {
    /// HTTP status for `Api` errors
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) => None,
        }
    }
}

/// Client for the recipe service HTTP API
#[derive(Debug, Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecipeClient {
    /// Create a client for the service at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// List recipes, optionally only favorites
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on transport failure or a non-success status
    pub async fn list_recipes(
        &self,
        favorite_only: bool,
    ) -> Result<BTreeMap<RecipeId, Recipe>, ClientError> {
        let path = if favorite_only {
            "/recipes?favorite=true"
        } else {
            "/recipes"
        };
        Self::send(self.http.get(self.url(path))).await
    }

    /// Fetch a single recipe
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the recipe does not exist
    pub async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe, ClientError> {
        Self::send(self.http.get(self.url(&format!("/recipes/{recipe_id}")))).await
    }

    /// Scale an ingredient list between servings counts
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 400 for invalid servings or ingredients
    pub async fn scale_recipe(
        &self,
        original_servings: f64,
        desired_servings: f64,
        ingredients: Vec<Ingredient>,
    ) -> Result<ScaleResponse, ClientError> {
        let request = ScaleRequest {
            original_servings,
            desired_servings,
            ingredients,
        };
        Self::send(self.http.post(self.url("/scale-recipe")).json(&request)).await
    }

    /// Apply a partial update to a recipe
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 or 400
    pub async fn edit_recipe(
        &self,
        recipe_id: impl Into<RecipeId>,
        update: RecipeUpdate,
    ) -> Result<Recipe, ClientError> {
        let request = EditRecipeRequest {
            recipe_id: recipe_id.into(),
            update,
        };
        Self::send(self.http.post(self.url("/edit-recipe")).json(&request)).await
    }

    /// Set a recipe's favorite flag
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if the recipe does not exist
    pub async fn favorite_recipe(
        &self,
        recipe_id: impl Into<RecipeId>,
        favorite: bool,
    ) -> Result<Recipe, ClientError> {
        let request = FavoriteRequest {
            recipe_id: recipe_id.into(),
            favorite,
        };
        Self::send(self.http.post(self.url("/favorite-recipe")).json(&request)).await
    }

    /// Fetch the liveness document
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on transport failure or a non-success status
    pub async fn health(&self) -> Result<Value, ClientError> {
        Self::send(self.http.get(self.url("/health"))).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Recipe API response");

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await?;
        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body).map_or_else(
        |_| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_owned()
            } else {
                body.trim().to_owned()
            }
        },
        |parsed| parsed.error.message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = RecipeClient::new("http://localhost:5001/");
        assert_eq!(client.base_url(), "http://localhost:5001");
        assert_eq!(client.url("/recipes"), "http://localhost:5001/recipes");
    }

    #[test]
    fn test_error_message_prefers_structured_body() {
        let body = r#"{"error":{"code":"RESOURCE_NOT_FOUND","message":"Recipe '9' not found"}}"#;
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, body),
            "Recipe '9' not found"
        );
        assert_eq!(
            error_message(StatusCode::UNPROCESSABLE_ENTITY, "missing field `favorite`"),
            "missing field `favorite`"
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
    }
}
