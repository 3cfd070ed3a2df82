//! # Error Types
//!
//! Domain-specific error types for coffee-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coffee-core errors (this file)                                        │
//! │  ├── ValidationError  - A quantity string failed to parse              │
//! │  ├── RecipeError      - Recipe setter rejected its input               │
//! │  ├── InventoryError   - Inventory addition rejected its input          │
//! │  ├── RecipeBookError  - Bad slot index / name collision on edit        │
//! │  └── CoreError        - Umbrella for callers that don't care which     │
//! │                                                                         │
//! │  console errors (separate crate)                                       │
//! │  └── ConsoleError     - I/O, config, poisoned state                    │
//! │                                                                         │
//! │  Flow: ValidationError → RecipeError / InventoryError → CoreError      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Adding to a full book, purchasing from an empty slot, underpaying and
//! running out of milk are all normal outcomes. They come back as `false`,
//! `None` or a full refund, never as one of these types.

use thiserror::Error;

use crate::types::Ingredient;

// =============================================================================
// Validation Error
// =============================================================================

/// A raw quantity string could not be turned into a non-negative count.
///
/// `field` names what was being set ("price", "coffee", ...) so messages
/// read naturally when they reach the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input is not an integer at all.
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: String, value: String },

    /// The input parsed but is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: i64 },

    /// The input parsed but does not fit the counter.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },
}

// =============================================================================
// Recipe Error
// =============================================================================

/// Raised by the `Recipe` setters. The field keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    #[error("Invalid recipe quantity: {0}")]
    InvalidQuantity(#[from] ValidationError),
}

// =============================================================================
// Inventory Error
// =============================================================================

/// Raised by the inventory add operations. Never clamps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Invalid inventory quantity: {0}")]
    InvalidQuantity(#[from] ValidationError),

    /// Stock would wrap past the counter's maximum.
    #[error("Adding {added} {ingredient} to {current} would overflow the counter")]
    Overflow {
        ingredient: Ingredient,
        current: u32,
        added: u32,
    },
}

// =============================================================================
// Recipe Book Error
// =============================================================================

/// Programmer-style misuse of the recipe book.
///
/// An empty slot is not an error (edit/delete return `Ok(None)`); these
/// are for indexes that can never be valid and for edits that would leave
/// a slot unnamed or share a name with another slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeBookError {
    #[error("Slot {index} is out of range (book has {capacity} slots)")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("A recipe named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("A recipe needs a name")]
    UnnamedRecipe,
}

// =============================================================================
// Core Error
// =============================================================================

/// Any error the core can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    RecipeBook(#[from] RecipeBookError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotANumber {
            field: "price".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "price must be a whole number, got 'abc'");

        let err = ValidationError::Negative {
            field: "sugar".to_string(),
            value: -2,
        };
        assert_eq!(err.to_string(), "sugar must not be negative, got -2");
    }

    #[test]
    fn test_recipe_error_wraps_validation() {
        let err: RecipeError = ValidationError::Negative {
            field: "coffee".to_string(),
            value: -1,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid recipe quantity: coffee must not be negative, got -1"
        );
    }

    #[test]
    fn test_overflow_message_names_ingredient() {
        let err = InventoryError::Overflow {
            ingredient: Ingredient::Milk,
            current: u32::MAX,
            added: 1,
        };
        assert!(err.to_string().contains("Milk"));
    }

    #[test]
    fn test_book_error_converts_to_core_error() {
        let err = RecipeBookError::IndexOutOfRange {
            index: 7,
            capacity: 4,
        };
        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::RecipeBook(_)));
        assert_eq!(core.to_string(), "Slot 7 is out of range (book has 4 slots)");
    }
}
