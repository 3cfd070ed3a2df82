//! # Machine State
//!
//! The one `CoffeeMaker` the console drives, behind a lock.
//!
//! ## Thread Safety
//! A purchase checks funds and stock and then deducts. Two callers
//! interleaving those steps could both pass the stock check against the
//! same units. Every access therefore goes through a single
//! `Arc<Mutex<CoffeeMaker>>`, so each core call runs to completion before
//! the next one starts.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu action              MachineState               CoffeeMaker        │
//! │  ───────────              ────────────               ───────────        │
//! │                                                                         │
//! │  Make coffee ───────────► with_machine_mut() ──────► purchase()         │
//! │  Add inventory ─────────► with_machine_mut() ──────► add_inventory()    │
//! │  Add / edit / delete ───► with_machine_mut() ──────► *_recipe()         │
//! │  Check inventory ───────► with_machine() ──────────► check_inventory()  │
//! │                                                                         │
//! │  NOTE: Reads take the same lock. They're short.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use coffee_core::CoffeeMaker;

use crate::error::{ConsoleError, ConsoleResult};

/// Shared handle to the machine. Clones point at the same machine.
#[derive(Debug, Clone, Default)]
pub struct MachineState {
    machine: Arc<Mutex<CoffeeMaker>>,
}

impl MachineState {
    pub fn new(machine: CoffeeMaker) -> Self {
        MachineState {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    /// Executes a function with read access to the machine.
    pub fn with_machine<F, R>(&self, f: F) -> ConsoleResult<R>
    where
        F: FnOnce(&CoffeeMaker) -> R,
    {
        let machine = self
            .machine
            .lock()
            .map_err(|_| ConsoleError::StatePoisoned)?;
        Ok(f(&machine))
    }

    /// Executes a function with write access to the machine.
    ///
    /// ## Usage
    /// ```rust
    /// use coffee_core::{CoffeeMaker, Money};
    /// use coffeemaker_console::MachineState;
    ///
    /// let state = MachineState::new(CoffeeMaker::new());
    /// let change = state
    ///     .with_machine_mut(|m| m.make_coffee(0, Money::from_units(10)))
    ///     .unwrap();
    /// assert_eq!(change.units(), 10);
    /// ```
    pub fn with_machine_mut<F, R>(&self, f: F) -> ConsoleResult<R>
    where
        F: FnOnce(&mut CoffeeMaker) -> R,
    {
        let mut machine = self
            .machine
            .lock()
            .map_err(|_| ConsoleError::StatePoisoned)?;
        Ok(f(&mut machine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_core::{Money, Recipe};
    use std::thread;

    #[test]
    fn test_clones_share_one_machine() {
        let state = MachineState::new(CoffeeMaker::new());
        let other = state.clone();
        other
            .with_machine_mut(|m| m.add_inventory("5", "0", "0", "0"))
            .unwrap()
            .unwrap();
        let coffee = state.with_machine(|m| m.inventory().coffee()).unwrap();
        assert_eq!(coffee, 20);
    }

    #[test]
    fn test_concurrent_purchases_never_oversell() {
        let mut machine = CoffeeMaker::new();
        // 15 coffee at 3 per cup: exactly 5 cups
        machine.add_recipe(Recipe::from_parts("Coffee", Money::from_units(50), 3, 1, 1, 0));
        let state = MachineState::new(machine);

        let handles: Vec<_> = (0..12)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    state
                        .with_machine_mut(|m| m.purchase(0, Money::from_units(50)))
                        .unwrap()
                        .is_dispensed()
                })
            })
            .collect();

        let dispensed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        assert_eq!(dispensed, 5);
        let coffee = state.with_machine(|m| m.inventory().coffee()).unwrap();
        assert_eq!(coffee, 0);
    }

    #[test]
    fn test_poisoned_lock_is_an_error() {
        let state = MachineState::default();
        let poisoner = state.clone();
        let _ = thread::spawn(move || {
            poisoner
                .with_machine_mut(|_| panic!("boom"))
                .unwrap();
        })
        .join();

        assert!(matches!(
            state.with_machine(|m| m.check_inventory()),
            Err(ConsoleError::StatePoisoned)
        ));
    }
}
