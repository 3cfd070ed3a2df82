//! # Money Module
//!
//! Provides the `Money` type for prices, payments, change and refunds.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE MACHINE ONLY KNOWS WHOLE UNITS                                    │
//! │                                                                         │
//! │  • No floats: 50 means 50 minor units, always                          │
//! │  • No negatives: a price, a payment and the change are all >= 0       │
//! │  • No mixing: a milk count can't be passed where a price is expected  │
//! │                                                                         │
//! │  Subtraction is checked. The only place it happens is change, and     │
//! │  change is computed after the funds check has already passed.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coffee_core::money::Money;
//!
//! let price = Money::from_units(50);
//! let paid = Money::from_units(75);
//!
//! assert_eq!(paid.checked_sub(price), Some(Money::from_units(25)));
//! assert_eq!(price.checked_sub(paid), None);
//! ```

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::parse_quantity;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount in the machine's smallest currency unit.
///
/// ## Where Money is Used
/// ```text
/// Recipe.price ──┐
///                ├──► funds check ──► change = payment - price
/// payment ───────┘          │
///                           └──► refund = payment (on any failure)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Money(u32);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_units(units: u32) -> Self {
        Money(units)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn units(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self - other`, or `None` when `other` is larger.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// `self - other`, stopping at zero.
    #[inline]
    pub const fn saturating_sub(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain integer; the machine has no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses operator input with the same rules as ingredient quantities.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity("amount", s).map(Money)
    }
}

impl From<u32> for Money {
    fn from(units: u32) -> Self {
        Money(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(75);
        assert_eq!(money.units(), 75);
        assert!(!money.is_zero());
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(25).to_string(), "25");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_subtraction() {
        let paid = Money::from_units(50);
        let price = Money::from_units(50);
        assert_eq!(paid.checked_sub(price), Some(Money::zero()));
        assert_eq!(Money::from_units(10).checked_sub(price), None);
        assert_eq!(Money::from_units(10).saturating_sub(price), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!("100".parse::<Money>(), Ok(Money::from_units(100)));
        assert!("-5".parse::<Money>().is_err());
        assert!("ten".parse::<Money>().is_err());
    }
}
