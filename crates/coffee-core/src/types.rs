//! # Domain Types
//!
//! Small shared types used by recipes and the inventory.
//!
//! ## Ingredient Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Coffee ──► Milk ──► Sugar ──► Chocolate                                │
//! │                                                                         │
//! │  This order is used everywhere a list of ingredients is shown:         │
//! │  inventory listings, recipe prompts, add-inventory prompts.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

// =============================================================================
// Ingredient
// =============================================================================

/// One of the four ingredients the machine stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Coffee,
    Milk,
    Sugar,
    Chocolate,
}

impl Ingredient {
    /// All ingredients, in display order.
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Coffee,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Chocolate,
    ];

    /// Capitalised name used in listings ("Coffee", "Milk", ...).
    pub const fn label(&self) -> &'static str {
        match self {
            Ingredient::Coffee => "Coffee",
            Ingredient::Milk => "Milk",
            Ingredient::Sugar => "Sugar",
            Ingredient::Chocolate => "Chocolate",
        }
    }

    /// Lower-case name used as the `field` in validation errors.
    pub const fn field(&self) -> &'static str {
        match self {
            Ingredient::Coffee => "coffee",
            Ingredient::Milk => "milk",
            Ingredient::Sugar => "sugar",
            Ingredient::Chocolate => "chocolate",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let labels: Vec<_> = Ingredient::ALL.iter().map(|i| i.to_string()).collect();
        assert_eq!(labels, ["Coffee", "Milk", "Sugar", "Chocolate"]);
    }

    #[test]
    fn test_field_names_are_lower_case() {
        for ingredient in Ingredient::ALL {
            assert_eq!(ingredient.field(), ingredient.label().to_lowercase());
        }
    }
}
