//! # Validation Module
//!
//! Turns operator-typed quantity strings into counters.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console shell                                                │
//! │  ├── Reads a line, strips the newline                                  │
//! │  └── Hands the raw text to the core                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Integer?            no  → NotANumber                              │
//! │  ├── Below zero?         yes → Negative                                │
//! │  └── Fits in a u32?      no  → OutOfRange                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Recipe setters / Inventory adds                              │
//! │  └── Wrap into RecipeError / InventoryError, commit only on Ok         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coffee_core::validation::parse_quantity;
//!
//! assert_eq!(parse_quantity("coffee", "3").unwrap(), 3);
//! assert!(parse_quantity("coffee", "-1").is_err());
//! assert!(parse_quantity("coffee", "lots").is_err());
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest value any counter or price can hold.
pub const MAX_QUANTITY: u32 = u32::MAX;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a non-negative whole number.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - A leading `+` is accepted, as is `0`
/// - Anything that is not an integer is `NotANumber`
/// - Any negative integer is `Negative` (never clamped)
/// - Values above [`MAX_QUANTITY`] are `OutOfRange`
pub fn parse_quantity(field: &str, raw: &str) -> ValidationResult<u32> {
    let trimmed = raw.trim();

    let value = trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(field),
        _ => ValidationError::NotANumber {
            field: field.to_string(),
            value: raw.to_string(),
        },
    })?;

    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    u32::try_from(value).map_err(|_| out_of_range(field))
}

fn out_of_range(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: u64::from(MAX_QUANTITY),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_quantity_valid() {
        assert_eq!(parse_quantity("coffee", "0"), Ok(0));
        assert_eq!(parse_quantity("coffee", "15"), Ok(15));
        assert_eq!(parse_quantity("coffee", " 7 "), Ok(7));
        assert_eq!(parse_quantity("coffee", "+4"), Ok(4));
        assert_eq!(parse_quantity("coffee", "4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn test_parse_quantity_not_a_number() {
        for raw in ["", "   ", "abc", "1.5", "3 cups", "0x10"] {
            assert!(
                matches!(
                    parse_quantity("milk", raw),
                    Err(ValidationError::NotANumber { .. })
                ),
                "expected NotANumber for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_quantity_negative() {
        assert_eq!(
            parse_quantity("sugar", "-2"),
            Err(ValidationError::Negative {
                field: "sugar".to_string(),
                value: -2
            })
        );
    }

    #[test]
    fn test_parse_quantity_too_large() {
        assert!(matches!(
            parse_quantity("chocolate", "4294967296"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_quantity("chocolate", "99999999999999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_any_u32_round_trips(n in any::<u32>()) {
            prop_assert_eq!(parse_quantity("price", &n.to_string()), Ok(n));
        }

        #[test]
        fn prop_any_negative_is_rejected(n in i64::MIN..0i64) {
            let rejected = matches!(
                parse_quantity("price", &n.to_string()),
                Err(ValidationError::Negative { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn prop_alphabetic_is_not_a_number(s in "[a-zA-Z]{1,12}") {
            let rejected = matches!(
                parse_quantity("price", &s),
                Err(ValidationError::NotANumber { .. })
            );
            prop_assert!(rejected);
        }
    }
}
