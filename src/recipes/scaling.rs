// ABOUTME: Proportional ingredient scaling between servings counts
// ABOUTME: Pure function over an ingredient list; never touches the recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use recipe_core::errors::RecipeError;
use recipe_core::models::{validate_ingredients, validate_servings, Ingredient};
use tracing::debug;

/// Ratio of desired to original servings
///
/// # Errors
///
/// Returns `RecipeError::InvalidServings` if either value is not a positive
/// finite number, and `RecipeError::ScaleOverflow` if the ratio itself is not
/// finite
pub fn scaling_factor(original_servings: f64, desired_servings: f64) -> Result<f64, RecipeError> {
    validate_servings("original_servings", original_servings)?;
    validate_servings("desired_servings", desired_servings)?;

    let factor = desired_servings / original_servings;
    if factor.is_finite() {
        Ok(factor)
    } else {
        Err(RecipeError::ScaleOverflow { factor })
    }
}

/// Rescale ingredient quantities from `original_servings` to `desired_servings`
///
/// Output is one-to-one with the input: same order, names and units, with
/// each quantity multiplied by the scaling factor. An empty list scales to an
/// empty list.
///
/// # Errors
///
/// Returns `RecipeError::InvalidServings` for a non-positive servings value,
/// `RecipeError::InvalidIngredient` for a blank name or a negative/non-finite
/// quantity, and `RecipeError::ScaleOverflow` if a scaled quantity would not
/// be finite
pub fn scale_ingredients(
    original_servings: f64,
    desired_servings: f64,
    ingredients: &[Ingredient],
) -> Result<Vec<Ingredient>, RecipeError> {
    let factor = scaling_factor(original_servings, desired_servings)?;
    validate_ingredients(ingredients)?;

    let scaled = ingredients
        .iter()
        .map(|ingredient| {
            let quantity = ingredient.quantity * factor;
            if quantity.is_finite() {
                Ok(Ingredient {
                    name: ingredient.name.clone(),
                    quantity,
                    unit: ingredient.unit.clone(),
                })
            } else {
                Err(RecipeError::ScaleOverflow { factor })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        original_servings,
        desired_servings,
        factor,
        ingredients = scaled.len(),
        "Scaled ingredients"
    );
    Ok(scaled)
}
