//! # Inventory
//!
//! On-hand stock of the four ingredients.
//!
//! ## Stock Movements
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Operator restock ───► add_coffee("5")      parse → check → increment  │
//! │                        add_inventory(...)   all four or none           │
//! │                                                                         │
//! │  Purchase ───────────► enough_ingredients() read only                  │
//! │                        deduct()             refuses if short           │
//! │                                                                         │
//! │  Check stock ────────► Display / describe() "Coffee: 15\nMilk: 15..."  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Additions never clamp: a negative or non-numeric quantity is an
//! [`InventoryError`] and the counter is left exactly as it was.

use std::fmt;

use tracing::warn;

use crate::error::InventoryError;
use crate::recipe::Recipe;
use crate::types::Ingredient;
use crate::validation::parse_quantity;
use crate::DEFAULT_STARTING_STOCK;

/// Ingredient counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    coffee: u32,
    milk: u32,
    sugar: u32,
    chocolate: u32,
}

impl Inventory {
    /// A freshly filled machine: [`DEFAULT_STARTING_STOCK`] of everything.
    pub fn new() -> Self {
        Self::with_stock(DEFAULT_STARTING_STOCK)
    }

    /// Every ingredient starts at `units`.
    pub fn with_stock(units: u32) -> Self {
        Inventory {
            coffee: units,
            milk: units,
            sugar: units,
            chocolate: units,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current stock of `ingredient`.
    pub fn stock(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Chocolate => self.chocolate,
        }
    }

    pub fn coffee(&self) -> u32 {
        self.coffee
    }

    pub fn milk(&self) -> u32 {
        self.milk
    }

    pub fn sugar(&self) -> u32 {
        self.sugar
    }

    pub fn chocolate(&self) -> u32 {
        self.chocolate
    }

    fn stock_mut(&mut self, ingredient: Ingredient) -> &mut u32 {
        match ingredient {
            Ingredient::Coffee => &mut self.coffee,
            Ingredient::Milk => &mut self.milk,
            Ingredient::Sugar => &mut self.sugar,
            Ingredient::Chocolate => &mut self.chocolate,
        }
    }

    // =========================================================================
    // Restocking
    // =========================================================================

    /// Parses `value` and adds it to `ingredient`.
    ///
    /// ## Example
    /// ```rust
    /// use coffee_core::{Ingredient, Inventory};
    ///
    /// let mut inventory = Inventory::new();
    /// inventory.add(Ingredient::Sugar, "3").unwrap();
    /// assert_eq!(inventory.sugar(), 18);
    ///
    /// assert!(inventory.add(Ingredient::Sugar, "-2").is_err());
    /// assert!(inventory.add(Ingredient::Sugar, "tss").is_err());
    /// assert_eq!(inventory.sugar(), 18);
    /// ```
    pub fn add(&mut self, ingredient: Ingredient, value: &str) -> Result<(), InventoryError> {
        let units = parse_quantity(ingredient.field(), value)?;
        let updated = self.checked_total(ingredient, units)?;
        *self.stock_mut(ingredient) = updated;
        Ok(())
    }

    fn checked_total(&self, ingredient: Ingredient, units: u32) -> Result<u32, InventoryError> {
        let current = self.stock(ingredient);
        current.checked_add(units).ok_or(InventoryError::Overflow {
            ingredient,
            current,
            added: units,
        })
    }

    pub fn add_coffee(&mut self, value: &str) -> Result<(), InventoryError> {
        self.add(Ingredient::Coffee, value)
    }

    pub fn add_milk(&mut self, value: &str) -> Result<(), InventoryError> {
        self.add(Ingredient::Milk, value)
    }

    pub fn add_sugar(&mut self, value: &str) -> Result<(), InventoryError> {
        self.add(Ingredient::Sugar, value)
    }

    pub fn add_chocolate(&mut self, value: &str) -> Result<(), InventoryError> {
        self.add(Ingredient::Chocolate, value)
    }

    /// Restocks all four ingredients at once.
    ///
    /// Every value is parsed and overflow-checked before any counter is
    /// touched, so a bad fourth value leaves the first three unapplied.
    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InventoryError> {
        let raw = [coffee, milk, sugar, chocolate];
        let mut totals = [0u32; 4];

        for ((ingredient, value), total) in Ingredient::ALL.iter().zip(raw).zip(totals.iter_mut())
        {
            let units = parse_quantity(ingredient.field(), value)?;
            *total = self.checked_total(*ingredient, units)?;
        }

        for (ingredient, total) in Ingredient::ALL.into_iter().zip(totals) {
            *self.stock_mut(ingredient) = total;
        }
        Ok(())
    }

    // =========================================================================
    // Purchases
    // =========================================================================

    /// True when every ingredient the recipe needs is on hand.
    pub fn enough_ingredients(&self, recipe: &Recipe) -> bool {
        Ingredient::ALL
            .iter()
            .all(|&ingredient| self.stock(ingredient) >= recipe.amount(ingredient))
    }

    /// Ingredients the recipe needs more of than the machine holds.
    pub fn shortfall(&self, recipe: &Recipe) -> Vec<Ingredient> {
        Ingredient::ALL
            .into_iter()
            .filter(|&ingredient| self.stock(ingredient) < recipe.amount(ingredient))
            .collect()
    }

    /// Takes one serving of `recipe` out of stock.
    ///
    /// Returns `false` and leaves every counter alone when the machine is
    /// short on anything the recipe needs.
    pub fn deduct(&mut self, recipe: &Recipe) -> bool {
        if !self.enough_ingredients(recipe) {
            warn!(
                recipe = %recipe,
                short = ?self.shortfall(recipe),
                "Deduct refused, not enough ingredients"
            );
            return false;
        }

        for ingredient in Ingredient::ALL {
            let needed = recipe.amount(ingredient);
            *self.stock_mut(ingredient) -= needed;
        }
        true
    }

    /// Human-readable listing, one ingredient per line.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// `Coffee: 15\nMilk: 15\nSugar: 15\nChocolate: 15\n`
impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ingredient in Ingredient::ALL {
            writeln!(f, "{}: {}", ingredient, self.stock(ingredient))?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
