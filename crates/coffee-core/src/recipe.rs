//! # Recipe
//!
//! A named, priced bundle of ingredient quantities.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Recipe::new()                  name "", price 0, all amounts 0        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_name("Latte")              any string, no validation              │
//! │  set_price("75")                ┐                                      │
//! │  set_amount_coffee("2")         │ parsed; invalid input → RecipeError  │
//! │  set_amount_milk("2")           │ and the field keeps its old value    │
//! │  set_amount_sugar("1")          │                                      │
//! │  set_amount_chocolate("0")      ┘                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RecipeBook::add_recipe(recipe) the book takes ownership               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two recipes are the same recipe when their names match (case-sensitive).
//! Price and amounts don't take part in `==` or `Hash`.
//!
//! ## Negative Input
//! Every numeric setter rejects negative input with
//! [`RecipeError::InvalidQuantity`]. Nothing is clamped to zero.

use serde::Deserialize;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::RecipeError;
use crate::money::Money;
use crate::types::Ingredient;
use crate::validation::parse_quantity;

/// A drink the machine can make.
///
/// Deserializes from a flat table, which is how the console preloads
/// recipes from its config file:
///
/// ```toml
/// name = "Latte"
/// price = 75
/// coffee = 2
/// milk = 2
/// sugar = 1
/// chocolate = 0
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Recipe {
    name: String,
    price: Money,
    #[serde(rename = "coffee")]
    amount_coffee: u32,
    #[serde(rename = "milk")]
    amount_milk: u32,
    #[serde(rename = "sugar")]
    amount_sugar: u32,
    #[serde(rename = "chocolate")]
    amount_chocolate: u32,
}

impl Recipe {
    /// Creates an unnamed recipe with a zero price and no ingredients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fully populated recipe from already-validated values.
    pub fn from_parts(
        name: impl Into<String>,
        price: Money,
        coffee: u32,
        milk: u32,
        sugar: u32,
        chocolate: u32,
    ) -> Self {
        Recipe {
            name: name.into(),
            price,
            amount_coffee: coffee,
            amount_milk: milk,
            amount_sugar: sugar,
            amount_chocolate: chocolate,
        }
    }

    // =========================================================================
    // Name
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name. Any string is accepted, including the empty one.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Drops the name back to the unnamed default.
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    /// True when the recipe has never been given a (non-empty) name.
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    // =========================================================================
    // Price
    // =========================================================================

    pub fn price(&self) -> Money {
        self.price
    }

    /// Parses and sets the price.
    ///
    /// ## Example
    /// ```rust
    /// use coffee_core::Recipe;
    ///
    /// let mut recipe = Recipe::new();
    /// recipe.set_price("50").unwrap();
    /// assert_eq!(recipe.price().units(), 50);
    ///
    /// assert!(recipe.set_price("-1").is_err());
    /// assert_eq!(recipe.price().units(), 50);
    /// ```
    pub fn set_price(&mut self, value: &str) -> Result<(), RecipeError> {
        self.price = Money::from_units(parse_quantity("price", value)?);
        Ok(())
    }

    // =========================================================================
    // Ingredient Amounts
    // =========================================================================

    /// Units of `ingredient` used per serving.
    pub fn amount(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Coffee => self.amount_coffee,
            Ingredient::Milk => self.amount_milk,
            Ingredient::Sugar => self.amount_sugar,
            Ingredient::Chocolate => self.amount_chocolate,
        }
    }

    /// Parses and sets the amount of `ingredient`.
    ///
    /// On error the previous amount is kept.
    pub fn set_amount(&mut self, ingredient: Ingredient, value: &str) -> Result<(), RecipeError> {
        let parsed = parse_quantity(ingredient.field(), value)?;
        *self.amount_mut(ingredient) = parsed;
        Ok(())
    }

    fn amount_mut(&mut self, ingredient: Ingredient) -> &mut u32 {
        match ingredient {
            Ingredient::Coffee => &mut self.amount_coffee,
            Ingredient::Milk => &mut self.amount_milk,
            Ingredient::Sugar => &mut self.amount_sugar,
            Ingredient::Chocolate => &mut self.amount_chocolate,
        }
    }

    pub fn amount_coffee(&self) -> u32 {
        self.amount_coffee
    }

    pub fn set_amount_coffee(&mut self, value: &str) -> Result<(), RecipeError> {
        self.set_amount(Ingredient::Coffee, value)
    }

    pub fn amount_milk(&self) -> u32 {
        self.amount_milk
    }

    pub fn set_amount_milk(&mut self, value: &str) -> Result<(), RecipeError> {
        self.set_amount(Ingredient::Milk, value)
    }

    pub fn amount_sugar(&self) -> u32 {
        self.amount_sugar
    }

    pub fn set_amount_sugar(&mut self, value: &str) -> Result<(), RecipeError> {
        self.set_amount(Ingredient::Sugar, value)
    }

    pub fn amount_chocolate(&self) -> u32 {
        self.amount_chocolate
    }

    pub fn set_amount_chocolate(&mut self, value: &str) -> Result<(), RecipeError> {
        self.set_amount(Ingredient::Chocolate, value)
    }
}

// =============================================================================
// Identity
// =============================================================================

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Recipe {}

/// Hashes the name only, so equal recipes always hash equal.
impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Shows the recipe's name.
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
