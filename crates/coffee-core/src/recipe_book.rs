//! # Recipe Book
//!
//! The machine's fixed row of recipe slots.
//!
//! ## Slot Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Recipe Book (capacity 4)                             │
//! │                                                                         │
//! │   [0] Occupied(Coffee)  [1] Empty  [2] Occupied(Latte)  [3] Empty       │
//! │                                                                         │
//! │  add_recipe(Mocha) ────► first Empty slot ([1])           → true       │
//! │  add_recipe(Latte) ────► name already present             → false      │
//! │  add_recipe(..)    ────► no Empty slot left               → false      │
//! │  add_recipe("")    ────► unnamed                          → false      │
//! │                                                                         │
//! │  edit_recipe(0, r) ────► Occupied: replace, return old name            │
//! │  delete_recipe(0)  ────► Occupied: back to Empty, return old name      │
//! │  edit/delete(1)    ────► Empty: Ok(None), nothing changes              │
//! │  edit/delete(9)    ────► Err(IndexOutOfRange)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The number of slots never changes after construction
//! - No two occupied slots hold recipes with the same name
//! - Every occupied slot holds a named recipe

use tracing::debug;

use crate::error::RecipeBookError;
use crate::recipe::Recipe;
use crate::RECIPE_BOOK_CAPACITY;

// =============================================================================
// Slot
// =============================================================================

/// One position in the recipe book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Recipe),
}

impl Slot {
    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(recipe) => Some(recipe),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

// =============================================================================
// Recipe Book
// =============================================================================

/// Fixed-capacity collection of recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeBook {
    slots: Vec<Slot>,
}

impl RecipeBook {
    /// An empty book with [`RECIPE_BOOK_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(RECIPE_BOOK_CAPACITY)
    }

    /// An empty book with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        RecipeBook {
            slots: vec![Slot::Empty; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    /// Every slot, empty ones included, in slot order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Every slot as a recipe, with empty slots shown as `Recipe::default()`.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.slots
            .iter()
            .map(|slot| slot.recipe().cloned().unwrap_or_default())
            .collect()
    }

    /// The recipe at `index`, if that slot exists and is occupied.
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.slots.get(index).and_then(Slot::recipe)
    }

    fn contains_name(&self, name: &str, skip: Option<usize>) -> bool {
        self.slots.iter().enumerate().any(|(i, slot)| {
            Some(i) != skip && slot.recipe().is_some_and(|r| r.name() == name)
        })
    }

    fn check_index(&self, index: usize) -> Result<(), RecipeBookError> {
        if index >= self.slots.len() {
            return Err(RecipeBookError::IndexOutOfRange {
                index,
                capacity: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Places `recipe` in the first empty slot.
    ///
    /// ## Returns
    /// - `false` if the recipe has no name
    /// - `false` if a recipe with the same name is already in the book
    /// - `false` if every slot is occupied
    /// - `true` otherwise
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        if recipe.is_unnamed() {
            debug!("Unnamed recipe rejected");
            return false;
        }

        if self.contains_name(recipe.name(), None) {
            debug!(name = %recipe, "Recipe already exists");
            return false;
        }

        match self.slots.iter_mut().find(|s| s.is_empty()) {
            Some(slot) => {
                debug!(name = %recipe, "Recipe added");
                *slot = Slot::Occupied(recipe);
                true
            }
            None => {
                debug!(name = %recipe, capacity = self.slots.len(), "Recipe book is full");
                false
            }
        }
    }

    /// Replaces the recipe at `index` with `recipe`, name included.
    ///
    /// ## Returns
    /// - `Ok(Some(old_name))` when the slot was occupied
    /// - `Ok(None)` when the slot is empty (nothing changes)
    /// - `Err(UnnamedRecipe)` when the replacement has no name
    /// - `Err(DuplicateName)` when another slot already uses the new name
    /// - `Err(IndexOutOfRange)` for an index past the last slot
    pub fn edit_recipe(
        &mut self,
        index: usize,
        recipe: Recipe,
    ) -> Result<Option<String>, RecipeBookError> {
        self.check_index(index)?;

        if self.slots[index].is_empty() {
            return Ok(None);
        }

        if recipe.is_unnamed() {
            return Err(RecipeBookError::UnnamedRecipe);
        }

        if self.contains_name(recipe.name(), Some(index)) {
            return Err(RecipeBookError::DuplicateName {
                name: recipe.name().to_string(),
            });
        }

        let old = std::mem::replace(&mut self.slots[index], Slot::Occupied(recipe));
        let old_name = old.recipe().map(|r| r.name().to_string());
        debug!(index, old = ?old_name, "Recipe edited");
        Ok(old_name)
    }

    /// Clears the slot at `index`.
    ///
    /// ## Returns
    /// - `Ok(Some(old_name))` when the slot was occupied
    /// - `Ok(None)` when it was already empty
    /// - `Err(IndexOutOfRange)` for an index past the last slot
    pub fn delete_recipe(&mut self, index: usize) -> Result<Option<String>, RecipeBookError> {
        self.check_index(index)?;

        let old = std::mem::take(&mut self.slots[index]);
        let old_name = old.recipe().map(|r| r.name().to_string());
        if old_name.is_some() {
            debug!(index, old = ?old_name, "Recipe deleted");
        }
        Ok(old_name)
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
