// ABOUTME: Recipe domain errors raised by the recipe store and the ingredient scaler
// ABOUTME: Converts into AppError so handlers can return them with `?`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::ErrorCode;
use serde_json::json;
use thiserror::Error;

/// Errors specific to recipe operations.
///
/// Every variant is terminal for the request that raised it: nothing is
/// retried and nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    /// The referenced recipe identifier is not in the store
    #[error("Recipe '{recipe_id}' not found")]
    NotFound {
        /// Identifier that was looked up
        recipe_id: String,
    },

    /// A servings value was zero, negative, or not finite
    #[error("{field} must be a positive number, got {value}")]
    InvalidServings {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
    },

    /// An ingredient violated the ingredient constraints
    #[error("ingredient #{index} is invalid: {reason}")]
    InvalidIngredient {
        /// Position of the ingredient in the submitted list
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The scaling factor pushes a quantity outside the finite range
    #[error("scaling factor {factor} produces quantities outside the representable range")]
    ScaleOverflow {
        /// Computed desired/original ratio
        factor: f64,
    },
}

impl RecipeError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(recipe_id: impl Into<String>) -> Self {
        Self::NotFound {
            recipe_id: recipe_id.into(),
        }
    }

    /// Create an "invalid servings" error
    #[must_use]
    pub const fn invalid_servings(field: &'static str, value: f64) -> Self {
        Self::InvalidServings { field, value }
    }

    /// Create an "invalid ingredient" error
    #[must_use]
    pub fn invalid_ingredient(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidIngredient {
            index,
            reason: reason.into(),
        }
    }

    /// Map this error onto the service-wide error code
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::InvalidServings { .. } | Self::InvalidIngredient { .. } => {
                ErrorCode::InvalidInput
            }
            Self::ScaleOverflow { .. } => ErrorCode::ValueOutOfRange,
        }
    }

    /// Recipe identifier involved in the failure, if any
    #[must_use]
    pub fn recipe_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { recipe_id } => Some(recipe_id),
            _ => None,
        }
    }

    /// Structured details for the HTTP error body
    #[must_use]
    pub fn details(&self) -> serde_json::Value {
        match self {
            Self::NotFound { recipe_id } => json!({ "recipe_id": recipe_id }),
            Self::InvalidServings { field, .. } => json!({ "field": field }),
            Self::InvalidIngredient { index, .. } => json!({ "ingredient_index": index }),
            // f64 infinity has no JSON representation
            Self::ScaleOverflow { .. } => serde_json::Value::Null,
        }
    }
}
