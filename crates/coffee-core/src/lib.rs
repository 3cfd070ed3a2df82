//! # coffee-core: Pure Business Logic for the CoffeeMaker
//!
//! Everything the vending machine knows about recipes, stock and selling
//! a drink, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CoffeeMaker Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console Shell (apps/console)                 │   │
//! │  │    menu ──► prompts ──► MachineState (Arc<Mutex<CoffeeMaker>>)  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ public API only                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coffee-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │  recipe   │  │ inventory │  │ recipe_book │  │ machine  │  │   │
//! │  │   │  Recipe   │  │ Inventory │  │ RecipeBook  │  │ purchase │  │   │
//! │  │   │           │  │           │  │ Slot        │  │ refunds  │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONFIG FILES • NO STDIN • NO GLOBAL STATE        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`recipe`] - `Recipe`, validated through string setters
//! - [`inventory`] - ingredient counters, sufficiency check, deduction
//! - [`recipe_book`] - fixed row of `Slot`s with unique recipe names
//! - [`machine`] - `CoffeeMaker`, the purchase transaction
//! - [`money`] - unsigned integer `Money`
//! - [`types`] - `Ingredient`
//! - [`validation`] - shared quantity parsing
//! - [`error`] - domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use coffee_core::{CoffeeMaker, Money, Recipe};
//!
//! let mut recipe = Recipe::new();
//! recipe.set_name("Coffee");
//! recipe.set_price("50").unwrap();
//! recipe.set_amount_coffee("3").unwrap();
//! recipe.set_amount_milk("1").unwrap();
//! recipe.set_amount_sugar("1").unwrap();
//!
//! let mut machine = CoffeeMaker::new();
//! assert!(machine.add_recipe(recipe));
//!
//! let change = machine.make_coffee(0, Money::from_units(75));
//! assert_eq!(change.units(), 25);
//! assert_eq!(machine.inventory().coffee(), 12);
//! ```
//!
//! ## Concurrency
//! Nothing in here locks. A purchase reads the book, checks stock and then
//! deducts, so callers that share a machine across threads must hold one
//! lock around every call (the console's `MachineState` does this).

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod machine;
pub mod money;
pub mod recipe;
pub mod recipe_book;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{
    CoreError, CoreResult, InventoryError, RecipeBookError, RecipeError, ValidationError,
};
pub use inventory::Inventory;
pub use machine::{CoffeeMaker, Purchase, RefundReason};
pub use money::Money;
pub use recipe::Recipe;
pub use recipe_book::{RecipeBook, Slot};
pub use types::Ingredient;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of recipe slots in a standard machine.
pub const RECIPE_BOOK_CAPACITY: usize = 4;

/// Units of each ingredient a standard machine starts with.
pub const DEFAULT_STARTING_STOCK: u32 = 15;
