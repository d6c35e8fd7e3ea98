// ABOUTME: Data models for stored recipes and the partial edits applied to them
// ABOUTME: Defines Recipe, Ingredient, RecipeUpdate, and the servings/ingredient rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::RecipeError;
use serde::{Deserialize, Deserializer, Serialize};

/// Key under which a recipe is stored
pub type RecipeId = String;

/// Single ingredient in a recipe
///
/// Value type: it has no identity of its own and always belongs to exactly
/// one recipe's ingredient list (or to a scale request).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Human-readable ingredient name
    pub name: String,
    /// Amount in `unit`
    pub quantity: f64,
    /// Measurement unit; empty for countable items such as eggs
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unit: String,
}

impl Ingredient {
    /// Create a new ingredient
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    /// Create a unitless ingredient (whole items)
    #[must_use]
    pub fn count(name: impl Into<String>, quantity: f64) -> Self {
        Self::new(name, quantity, "")
    }

    /// Check the ingredient constraints; `index` is only used for reporting
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidIngredient` if the name is blank or the
    /// quantity is negative or not finite
    pub fn validate(&self, index: usize) -> Result<(), RecipeError> {
        if self.name.trim().is_empty() {
            return Err(RecipeError::invalid_ingredient(
                index,
                "name must not be empty",
            ));
        }
        if !self.quantity.is_finite() {
            return Err(RecipeError::invalid_ingredient(
                index,
                format!("quantity for '{}' must be a finite number", self.name),
            ));
        }
        if self.quantity < 0.0 {
            return Err(RecipeError::invalid_ingredient(
                index,
                format!(
                    "quantity for '{}' must not be negative, got {}",
                    self.name, self.quantity
                ),
            ));
        }
        Ok(())
    }
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name
    pub name: String,
    /// Number of servings the ingredient quantities are written for
    pub servings: f64,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Whether the recipe is marked as a favorite
    pub favorite: bool,
}

impl Recipe {
    /// Create a recipe with no ingredients that is not a favorite
    #[must_use]
    pub fn new(name: impl Into<String>, servings: f64) -> Self {
        Self {
            name: name.into(),
            servings,
            ingredients: Vec::new(),
            favorite: false,
        }
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add multiple ingredients
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Set the favorite flag
    #[must_use]
    pub const fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Overwrite every field present in `update`, leaving the rest untouched
    ///
    /// Does not validate; callers run [`RecipeUpdate::validate`] first so a
    /// rejected update never lands half-applied.
    pub fn apply(&mut self, update: RecipeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(servings) = update.servings {
            self.servings = servings;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
    }
}

/// Partial edit of a recipe
///
/// Each field is either present (overwrite) or absent (keep). On the wire an
/// omitted field and an explicit `null` both mean absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    /// Replacement name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement servings count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
    /// Replacement ingredient list (replaces the whole sequence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
}

impl RecipeUpdate {
    /// Create an update that changes nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the replacement servings count
    #[must_use]
    pub const fn with_servings(mut self, servings: f64) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Set the replacement ingredient list
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    /// True when no field is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.servings.is_none() && self.ingredients.is_none()
    }

    /// Names of the fields this update will overwrite
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(3);
        if self.name.is_some() {
            fields.push("name");
        }
        if self.servings.is_some() {
            fields.push("servings");
        }
        if self.ingredients.is_some() {
            fields.push("ingredients");
        }
        fields
    }

    /// Check every supplied field against the recipe constraints
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidServings` for a non-positive servings value
    /// and `RecipeError::InvalidIngredient` for the first bad ingredient
    pub fn validate(&self) -> Result<(), RecipeError> {
        if let Some(servings) = self.servings {
            validate_servings("servings", servings)?;
        }
        if let Some(ingredients) = &self.ingredients {
            validate_ingredients(ingredients)?;
        }
        Ok(())
    }
}

/// Require a servings value to be finite and strictly positive
///
/// # Errors
///
/// Returns `RecipeError::InvalidServings` naming `field` otherwise
pub fn validate_servings(field: &'static str, value: f64) -> Result<(), RecipeError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RecipeError::invalid_servings(field, value))
    }
}

/// Validate an ingredient list in order, reporting the first violation
///
/// # Errors
///
/// Returns `RecipeError::InvalidIngredient` for the first bad ingredient
pub fn validate_ingredients(ingredients: &[Ingredient]) -> Result<(), RecipeError> {
    ingredients
        .iter()
        .enumerate()
        .try_for_each(|(index, ingredient)| ingredient.validate(index))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingredient_unit_defaults_to_empty() {
        let omitted: Ingredient = serde_json::from_value(json!({"name": "Egg", "quantity": 1})).unwrap();
        let null: Ingredient =
            serde_json::from_value(json!({"name": "Egg", "quantity": 1, "unit": null})).unwrap();

        assert_eq!(omitted.unit, "");
        assert_eq!(null.unit, "");
    }

    #[test]
    fn test_ingredient_validation() {
        assert!(Ingredient::new("Salt", 0.0, "tsp").validate(0).is_ok());
        assert!(Ingredient::new("Salt", 0.25, "tsp").validate(0).is_ok());
        assert!(matches!(
            Ingredient::new("  ", 1.0, "").validate(3),
            Err(RecipeError::InvalidIngredient { index: 3, .. })
        ));
        assert!(Ingredient::new("Salt", -1.0, "tsp").validate(0).is_err());
        assert!(Ingredient::new("Salt", f64::NAN, "tsp").validate(0).is_err());
    }

    #[test]
    fn test_validate_servings() {
        assert!(validate_servings("servings", 0.5).is_ok());
        assert!(validate_servings("servings", 0.0).is_err());
        assert!(validate_servings("servings", -2.0).is_err());
        assert!(validate_servings("servings", f64::INFINITY).is_err());
    }

    #[test]
    fn test_update_null_fields_are_absent() {
        let update: RecipeUpdate =
            serde_json::from_value(json!({"name": null, "servings": 3})).unwrap();

        assert_eq!(update.name, None);
        assert_eq!(update.servings, Some(3.0));
        assert_eq!(update.changed_fields(), vec!["servings"]);
    }

    #[test]
    fn test_apply_is_partial() {
        let mut recipe = Recipe::new("Toast", 1.0).with_ingredient(Ingredient::count("Bread", 2.0));
        recipe.apply(RecipeUpdate::new().with_name("Buttered Toast"));

        assert_eq!(recipe.name, "Buttered Toast");
        assert!((recipe.servings - 1.0).abs() < f64::EPSILON);
        assert_eq!(recipe.ingredients, vec![Ingredient::count("Bread", 2.0)]);
    }

    #[test]
    fn test_update_validation_reports_first_bad_ingredient() {
        let update = RecipeUpdate::new().with_ingredients(vec![
            Ingredient::new("Flour", 1.0, "cup"),
            Ingredient::new("Sugar", -1.0, "tbsp"),
            Ingredient::new("", 1.0, ""),
        ]);

        assert!(matches!(
            update.validate(),
            Err(RecipeError::InvalidIngredient { index: 1, .. })
        ));
    }
}
