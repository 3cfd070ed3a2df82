//! # Transaction Engine
//!
//! `CoffeeMaker` owns one recipe book and one inventory and runs purchases
//! against them.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    purchase(slot, payment)                              │
//! │                                                                         │
//! │  Look up slot ──── empty / no such slot ──────► Refunded(NoRecipe)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  payment >= price? ──── no ───────────────────► Refunded(Funds)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  enough ingredients? ──── no ─────────────────► Refunded(Ingredients)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  deduct ingredients ──────────────────────────► Dispensed(change)       │
//! │                                                                         │
//! │  Nothing is mutated until every check has passed.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coffee_core::{CoffeeMaker, Money, Recipe};
//!
//! let mut machine = CoffeeMaker::new();
//! machine.add_recipe(Recipe::from_parts("Coffee", Money::from_units(50), 3, 1, 1, 0));
//!
//! assert_eq!(machine.make_coffee(0, Money::from_units(75)), Money::from_units(25));
//! assert_eq!(machine.make_coffee(0, Money::from_units(10)), Money::from_units(10));
//! assert_eq!(machine.make_coffee(3, Money::from_units(60)), Money::from_units(60));
//! ```

use tracing::{debug, info};

use crate::error::{InventoryError, RecipeBookError};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::recipe::Recipe;
use crate::recipe_book::{RecipeBook, Slot};

// =============================================================================
// Purchase Outcome
// =============================================================================

/// Why a purchase handed the whole payment back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefundReason {
    /// The slot is empty or doesn't exist.
    NoRecipe,
    /// The payment was below the recipe's price.
    InsufficientFunds { price: Money },
    /// The machine is short on at least one ingredient.
    InsufficientIngredients,
}

/// Result of a single purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    /// A drink was made; `change` is `payment - price`.
    Dispensed { recipe: String, change: Money },
    /// No drink; `refund` is the full payment.
    Refunded { reason: RefundReason, refund: Money },
}

impl Purchase {
    /// Money handed back to the buyer, whichever way it went.
    pub fn returned(&self) -> Money {
        match self {
            Purchase::Dispensed { change, .. } => *change,
            Purchase::Refunded { refund, .. } => *refund,
        }
    }

    pub fn is_dispensed(&self) -> bool {
        matches!(self, Purchase::Dispensed { .. })
    }
}

// =============================================================================
// CoffeeMaker
// =============================================================================

/// The vending machine.
#[derive(Debug, Clone, Default)]
pub struct CoffeeMaker {
    recipe_book: RecipeBook,
    inventory: Inventory,
}

impl CoffeeMaker {
    /// Default machine: 4 recipe slots, 15 units of every ingredient.
    pub fn new() -> Self {
        Self::default()
    }

    /// Machine with `slots` recipe slots and `starting_stock` of everything.
    pub fn with_limits(slots: usize, starting_stock: u32) -> Self {
        CoffeeMaker {
            recipe_book: RecipeBook::with_capacity(slots),
            inventory: Inventory::with_stock(starting_stock),
        }
    }

    // =========================================================================
    // Recipe Book
    // =========================================================================

    pub fn recipe_book(&self) -> &RecipeBook {
        &self.recipe_book
    }

    /// All slots in order; see [`RecipeBook::slots`].
    pub fn recipes(&self) -> &[Slot] {
        self.recipe_book.slots()
    }

    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        self.recipe_book.add_recipe(recipe)
    }

    pub fn edit_recipe(
        &mut self,
        index: usize,
        recipe: Recipe,
    ) -> Result<Option<String>, RecipeBookError> {
        self.recipe_book.edit_recipe(index, recipe)
    }

    pub fn delete_recipe(&mut self, index: usize) -> Result<Option<String>, RecipeBookError> {
        self.recipe_book.delete_recipe(index)
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Restocks all four ingredients; none are applied if any is invalid.
    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<(), InventoryError> {
        self.inventory.add_inventory(coffee, milk, sugar, chocolate)?;
        info!(coffee, milk, sugar, chocolate, "Inventory restocked");
        Ok(())
    }

    /// Stock listing, e.g. `Coffee: 15\nMilk: 15\nSugar: 15\nChocolate: 15\n`.
    pub fn check_inventory(&self) -> String {
        self.inventory.describe()
    }

    // =========================================================================
    // Purchases
    // =========================================================================

    /// Attempts to sell the recipe in `index` for `payment`.
    ///
    /// Funds are checked before ingredients, and the inventory is only
    /// touched once both checks pass.
    pub fn purchase(&mut self, index: usize, payment: Money) -> Purchase {
        let Some(recipe) = self.recipe_book.get(index) else {
            debug!(index, %payment, "No recipe in slot, refunding");
            return refund(RefundReason::NoRecipe, payment);
        };

        let Some(change) = payment.checked_sub(recipe.price()) else {
            debug!(index, %payment, price = %recipe.price(), "Insufficient funds, refunding");
            return refund(
                RefundReason::InsufficientFunds {
                    price: recipe.price(),
                },
                payment,
            );
        };

        if !self.inventory.enough_ingredients(recipe) {
            debug!(
                index,
                recipe = %recipe,
                short = ?self.inventory.shortfall(recipe),
                "Insufficient ingredients, refunding"
            );
            return refund(RefundReason::InsufficientIngredients, payment);
        }

        self.inventory.deduct(recipe);
        info!(index, recipe = %recipe, %payment, %change, "Dispensed");

        Purchase::Dispensed {
            recipe: recipe.name().to_string(),
            change,
        }
    }

    /// Sells the recipe in `index` and returns the money handed back:
    /// the change on success, the full payment otherwise.
    pub fn make_coffee(&mut self, index: usize, payment: Money) -> Money {
        self.purchase(index, payment).returned()
    }
}

fn refund(reason: RefundReason, payment: Money) -> Purchase {
    Purchase::Refunded {
        reason,
        refund: payment,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
