// ABOUTME: Integration tests for proportional ingredient scaling
// ABOUTME: Covers linearity, identity, shape preservation, validation and the reference scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::fixtures::{approx_eq, eggs_ingredients};
use recipe_service::errors::RecipeError;
use recipe_service::models::Ingredient;
use recipe_service::recipes::{scale_ingredients, scaling_factor};

#[test]
fn test_reference_scenario_two_to_five() {
    let scaled = scale_ingredients(2.0, 5.0, &eggs_ingredients()).unwrap();

    assert_eq!(scaled.len(), 3);
    assert_eq!(scaled[0].name, "Eggs");
    assert!(approx_eq(scaled[0].quantity, 10.0));
    assert_eq!(scaled[0].unit, "");
    assert_eq!(scaled[1].name, "Milk");
    assert!(approx_eq(scaled[1].quantity, 5.0));
    assert_eq!(scaled[1].unit, "tbsp");
    assert_eq!(scaled[2].name, "Salt");
    assert!(approx_eq(scaled[2].quantity, 0.625));
    assert_eq!(scaled[2].unit, "tsp");
}

#[test]
fn test_scaling_is_linear() {
    let ingredients = eggs_ingredients();
    for (original, desired) in [(2.0, 5.0), (4.0, 1.0), (3.0, 7.5), (1.0, 100.0)] {
        let scaled = scale_ingredients(original, desired, &ingredients).unwrap();
        for (input, output) in ingredients.iter().zip(&scaled) {
            assert!(approx_eq(output.quantity, input.quantity * desired / original));
        }
    }
}

#[test]
fn test_same_servings_is_identity() {
    let ingredients = eggs_ingredients();
    let scaled = scale_ingredients(2.0, 2.0, &ingredients).unwrap();
    assert_eq!(scaled, ingredients);
}

#[test]
fn test_scaling_preserves_shape() {
    let ingredients = vec![
        Ingredient::new("Zucchini", 1.0, "whole"),
        Ingredient::new("Apple", 2.0, "cup"),
        Ingredient::count("Mango", 3.0),
    ];
    let scaled = scale_ingredients(3.0, 4.0, &ingredients).unwrap();

    let names: Vec<_> = scaled.iter().map(|i| i.name.as_str()).collect();
    let units: Vec<_> = scaled.iter().map(|i| i.unit.as_str()).collect();
    assert_eq!(names, vec!["Zucchini", "Apple", "Mango"]);
    assert_eq!(units, vec!["whole", "cup", ""]);
}

#[test]
fn test_empty_list_scales_to_empty() {
    assert!(scale_ingredients(2.0, 8.0, &[]).unwrap().is_empty());
}

#[test]
fn test_zero_quantity_stays_zero() {
    let scaled = scale_ingredients(1.0, 9.0, &[Ingredient::new("Pepper", 0.0, "pinch")]).unwrap();
    assert!(approx_eq(scaled[0].quantity, 0.0));
}

#[test]
fn test_rejects_non_positive_servings() {
    let ingredients = eggs_ingredients();

    let error = scale_ingredients(0.0, 4.0, &ingredients).unwrap_err();
    assert_eq!(error, RecipeError::invalid_servings("original_servings", 0.0));

    let error = scale_ingredients(2.0, -1.0, &ingredients).unwrap_err();
    assert_eq!(error, RecipeError::invalid_servings("desired_servings", -1.0));

    assert!(scaling_factor(f64::NAN, 1.0).is_err());
}

#[test]
fn test_rejects_invalid_ingredients() {
    let result = scale_ingredients(
        2.0,
        4.0,
        &[
            Ingredient::count("Eggs", 2.0),
            Ingredient::new("Milk", -2.0, "tbsp"),
        ],
    );
    assert!(matches!(
        result,
        Err(RecipeError::InvalidIngredient { index: 1, .. })
    ));

    let result = scale_ingredients(2.0, 4.0, &[Ingredient::new("", 1.0, "g")]);
    assert!(matches!(
        result,
        Err(RecipeError::InvalidIngredient { index: 0, .. })
    ));
}

#[test]
fn test_scaling_factor_value() {
    assert!(approx_eq(scaling_factor(2.0, 5.0).unwrap(), 2.5));
}
