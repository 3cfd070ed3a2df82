//! # Menu Loop
//!
//! The interactive front of the machine. Reads a menu number, prompts for
//! whatever the action needs, calls the core and prints what happened.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Welcome to the CoffeeMaker!                                           │
//! │                                                                         │
//! │  ┌──► menu ──► read choice ──┬── 0 / EOF ─────────────────► return     │
//! │  │                           ├── not 0-6 ──► "Please enter a number    │
//! │  │                           │               from 0 - 6" ──────┐       │
//! │  │                           └── 1-6 ──► prompts ──► core call │       │
//! │  │                                            │                │       │
//! │  │                              Core error ◄──┘ printed        │       │
//! │  └──────────────────────────────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can drive a whole session from a
//! `Cursor` and read the transcript back out of a `Vec<u8>`.

use std::fmt;
use std::io::{BufRead, Write};

use coffee_core::{CoreError, Ingredient, Money, Purchase, Recipe, RefundReason, Slot};
use tracing::debug;

use crate::error::{ConsoleError, ConsoleResult};
use crate::state::MachineState;

const WELCOME: &str = "Welcome to the CoffeeMaker!";
const INVALID_CHOICE: &str = "Please enter a number from 0 - 6";

// =============================================================================
// Menu Choices
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddRecipe,
    DeleteRecipe,
    EditRecipe,
    AddInventory,
    CheckInventory,
    MakeCoffee,
}

impl MenuChoice {
    /// Menu order. `Exit` is listed last but numbered 0.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddRecipe,
        MenuChoice::DeleteRecipe,
        MenuChoice::EditRecipe,
        MenuChoice::AddInventory,
        MenuChoice::CheckInventory,
        MenuChoice::MakeCoffee,
        MenuChoice::Exit,
    ];

    pub const fn number(&self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::AddRecipe => 1,
            MenuChoice::DeleteRecipe => 2,
            MenuChoice::EditRecipe => 3,
            MenuChoice::AddInventory => 4,
            MenuChoice::CheckInventory => 5,
            MenuChoice::MakeCoffee => 6,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::AddRecipe => "Add a recipe",
            MenuChoice::DeleteRecipe => "Delete a recipe",
            MenuChoice::EditRecipe => "Edit a recipe",
            MenuChoice::AddInventory => "Add inventory",
            MenuChoice::CheckInventory => "Check inventory",
            MenuChoice::MakeCoffee => "Make coffee",
        }
    }

    /// Parses a menu line. Anything but a whole number 0-6 is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let number: u8 = raw.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == number)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

// =============================================================================
// Console
// =============================================================================

pub struct Console<R, W> {
    state: MachineState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(state: MachineState, input: R, output: W) -> Self {
        Console {
            state,
            input,
            output,
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the menu until the operator picks `0` or input ends.
    ///
    /// Core errors are shown and the loop carries on. I/O failures and a
    /// poisoned machine lock end the session with an error.
    pub fn run(&mut self) -> ConsoleResult<()> {
        writeln!(self.output, "{WELCOME}")?;

        loop {
            self.print_menu()?;

            let line = match self.read_line() {
                Ok(line) => line,
                Err(ConsoleError::InputClosed) => break,
                Err(err) => return Err(err),
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "{INVALID_CHOICE}")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }

            debug!(?choice, "Menu selection");
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ConsoleError::InputClosed) => break,
                Err(err) if err.is_recoverable() => writeln!(self.output, "{err}")?,
                Err(err) => return Err(err),
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ConsoleResult<()> {
        match choice {
            MenuChoice::AddRecipe => self.add_recipe(),
            MenuChoice::DeleteRecipe => self.delete_recipe(),
            MenuChoice::EditRecipe => self.edit_recipe(),
            MenuChoice::AddInventory => self.add_inventory(),
            MenuChoice::CheckInventory => self.check_inventory(),
            MenuChoice::MakeCoffee => self.make_coffee(),
            MenuChoice::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_recipe(&mut self) -> ConsoleResult<()> {
        let recipe = self.read_recipe()?;
        let name = recipe.name().to_string();

        if self.state.with_machine_mut(|m| m.add_recipe(recipe))? {
            writeln!(self.output, "{name} successfully added.")?;
        } else {
            writeln!(self.output, "{name} could not be added.")?;
        }
        Ok(())
    }

    fn delete_recipe(&mut self) -> ConsoleResult<()> {
        let Some(index) = self.select_recipe("delete")? else {
            return Ok(());
        };

        let deleted = self
            .state
            .with_machine_mut(|m| m.delete_recipe(index))?
            .map_err(CoreError::from)?;

        match deleted {
            Some(name) => writeln!(self.output, "{name} successfully deleted.")?,
            None => writeln!(
                self.output,
                "Selected recipe doesn't exist and cannot be deleted."
            )?,
        }
        Ok(())
    }

    fn edit_recipe(&mut self) -> ConsoleResult<()> {
        let Some(index) = self.select_recipe("edit")? else {
            return Ok(());
        };

        if self.state.with_machine(|m| m.recipe_book().get(index).is_none())? {
            writeln!(
                self.output,
                "Selected recipe doesn't exist and cannot be edited."
            )?;
            return Ok(());
        }

        let recipe = self.read_recipe()?;
        let edited = self
            .state
            .with_machine_mut(|m| m.edit_recipe(index, recipe))?
            .map_err(CoreError::from)?;

        match edited {
            Some(name) => writeln!(self.output, "{name} successfully edited.")?,
            None => writeln!(
                self.output,
                "Selected recipe doesn't exist and cannot be edited."
            )?,
        }
        Ok(())
    }

    fn add_inventory(&mut self) -> ConsoleResult<()> {
        let mut amounts = Vec::with_capacity(Ingredient::ALL.len());
        for ingredient in Ingredient::ALL {
            let prompt = format!("Please enter units of {} to add: ", ingredient.field());
            amounts.push(self.prompt(&prompt)?);
        }

        self.state
            .with_machine_mut(|m| {
                m.add_inventory(&amounts[0], &amounts[1], &amounts[2], &amounts[3])
            })?
            .map_err(CoreError::from)?;

        writeln!(self.output, "Inventory successfully added")?;
        Ok(())
    }

    fn check_inventory(&mut self) -> ConsoleResult<()> {
        let listing = self.state.with_machine(|m| m.check_inventory())?;
        write!(self.output, "{listing}")?;
        Ok(())
    }

    fn make_coffee(&mut self) -> ConsoleResult<()> {
        let Some(index) = self.select_recipe("purchase")? else {
            return Ok(());
        };

        let raw = self.prompt("Please enter the amount you wish to pay: ")?;
        let payment = raw.parse::<Money>().map_err(CoreError::from)?;

        let outcome = self.state.with_machine_mut(|m| m.purchase(index, payment))?;
        match outcome {
            Purchase::Dispensed { recipe, change } => {
                writeln!(self.output, "Enjoy your {recipe}!")?;
                writeln!(self.output, "Your change is: {change}")?;
            }
            Purchase::Refunded { reason, refund } => {
                match reason {
                    RefundReason::NoRecipe => {
                        writeln!(self.output, "There is no recipe in that slot.")?
                    }
                    RefundReason::InsufficientFunds { price } => writeln!(
                        self.output,
                        "Insufficient funds: that recipe costs {price}."
                    )?,
                    RefundReason::InsufficientIngredients => writeln!(
                        self.output,
                        "Not enough ingredients to make that recipe."
                    )?,
                }
                writeln!(self.output, "Your money is returned: {refund}")?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Prompts
    // =========================================================================

    fn print_menu(&mut self) -> ConsoleResult<()> {
        writeln!(self.output)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        write!(self.output, "Please press the number that corresponds to what you would like the coffee maker to do: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts for every recipe field. Stops at the first invalid number.
    fn read_recipe(&mut self) -> ConsoleResult<Recipe> {
        let mut recipe = Recipe::new();

        let name = self.prompt("Please enter the recipe name: ")?;
        recipe.set_name(name);

        let price = self.prompt("Please enter the recipe price: ")?;
        recipe.set_price(&price).map_err(CoreError::from)?;

        for ingredient in Ingredient::ALL {
            let prompt = format!("Please enter the units of {} in the recipe: ", ingredient.field());
            let amount = self.prompt(&prompt)?;
            recipe
                .set_amount(ingredient, &amount)
                .map_err(CoreError::from)?;
        }

        Ok(recipe)
    }

    /// Lists every slot and asks for one by its 1-based number.
    ///
    /// Returns the 0-based slot index, or `None` after telling the operator
    /// their selection was unusable.
    fn select_recipe(&mut self, verb: &str) -> ConsoleResult<Option<usize>> {
        let listing: Vec<String> = self.state.with_machine(|m| {
            m.recipes()
                .iter()
                .map(|slot| match slot {
                    Slot::Occupied(recipe) => format!("{recipe} ({})", recipe.price()),
                    Slot::Empty => "(empty)".to_string(),
                })
                .collect()
        })?;

        writeln!(self.output)?;
        for (i, entry) in listing.iter().enumerate() {
            writeln!(self.output, "{}. {entry}", i + 1)?;
        }

        let raw = self.prompt(&format!(
            "Please select the number of the recipe to {verb}: "
        ))?;

        match raw.trim().parse::<usize>() {
            Ok(n) if (1..=listing.len()).contains(&n) => Ok(Some(n - 1)),
            _ => {
                writeln!(
                    self.output,
                    "Please select a recipe between 1 and {}.",
                    listing.len()
                )?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> ConsoleResult<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// One line of input without its line ending.
    fn read_line(&mut self) -> ConsoleResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_core::CoffeeMaker;
    use std::io::Cursor;

    fn session(machine: CoffeeMaker, input: &str) -> (MachineState, String) {
        let state = MachineState::new(machine);
        let mut console = Console::new(state.clone(), Cursor::new(input.to_string()), Vec::new());
        console.run().unwrap();
        let transcript = String::from_utf8(console.output().clone()).unwrap();
        (state, transcript)
    }

    fn machine_with_coffee() -> CoffeeMaker {
        let mut machine = CoffeeMaker::new();
        machine.add_recipe(Recipe::from_parts("Coffee", Money::from_units(50), 3, 1, 1, 0));
        machine
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::MakeCoffee));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("coffee"), None);
        assert_eq!(MenuChoice::AddRecipe.to_string(), "1. Add a recipe");
    }

    #[test]
    fn test_banner_menu_and_exit() {
        let (_, out) = session(CoffeeMaker::new(), "0\n");
        assert!(out.starts_with("Welcome to the CoffeeMaker!\n"));
        assert!(out.contains("1. Add a recipe\n"));
        assert!(out.contains("6. Make coffee\n"));
        assert!(out.contains("0. Exit\n"));
    }

    #[test]
    fn test_invalid_choice_reshows_menu() {
        let (_, out) = session(CoffeeMaker::new(), "9\nabc\n0\n");
        assert_eq!(out.matches(INVALID_CHOICE).count(), 2);
        assert_eq!(out.matches("0. Exit").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, out) = session(CoffeeMaker::new(), "5\n");
        assert!(out.contains("Coffee: 15\nMilk: 15\nSugar: 15\nChocolate: 15\n"));
    }

    #[test]
    fn test_add_recipe() {
        let (state, out) = session(CoffeeMaker::new(), "1\nMocha\n100\n3\n1\n1\n2\n0\n");
        assert!(out.contains("Mocha successfully added."));
        let chocolate = state
            .with_machine(|m| m.recipe_book().get(0).map(|r| r.amount_chocolate()))
            .unwrap();
        assert_eq!(chocolate, Some(2));
    }

    #[test]
    fn test_add_duplicate_recipe() {
        let (_, out) = session(machine_with_coffee(), "1\nCoffee\n10\n1\n1\n1\n1\n0\n");
        assert!(out.contains("Coffee could not be added."));
    }

    #[test]
    fn test_blank_recipe_name_is_not_added() {
        let (state, out) = session(CoffeeMaker::new(), "1\n\n50\n3\n1\n1\n0\n0\n");
        assert!(out.contains(" could not be added."));
        let count = state.with_machine(|m| m.recipe_book().len()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_invalid_recipe_field_is_reported() {
        let (state, out) = session(CoffeeMaker::new(), "1\nMocha\n-5\n0\n");
        assert!(out.contains("Invalid recipe quantity"));
        let count = state.with_machine(|m| m.recipe_book().len()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_delete_recipe() {
        let (state, out) = session(machine_with_coffee(), "2\n1\n2\n1\n0\n");
        assert!(out.contains("Coffee successfully deleted."));
        assert!(out.contains("Selected recipe doesn't exist and cannot be deleted."));
        let empty = state.with_machine(|m| m.recipe_book().is_empty()).unwrap();
        assert!(empty);
    }

    #[test]
    fn test_selection_out_of_range() {
        let (_, out) = session(machine_with_coffee(), "2\n9\n0\n");
        assert!(out.contains("Please select a recipe between 1 and 4."));
    }

    #[test]
    fn test_edit_recipe_renames() {
        let (state, out) = session(machine_with_coffee(), "3\n1\nDark Roast\n60\n4\n0\n0\n0\n0\n");
        assert!(out.contains("Coffee successfully edited."));
        let name = state
            .with_machine(|m| m.recipe_book().get(0).map(|r| r.name().to_string()))
            .unwrap();
        assert_eq!(name.as_deref(), Some("Dark Roast"));
    }

    #[test]
    fn test_edit_empty_slot() {
        let (_, out) = session(machine_with_coffee(), "3\n2\n0\n");
        assert!(out.contains("Selected recipe doesn't exist and cannot be edited."));
    }

    #[test]
    fn test_add_inventory() {
        let (state, out) = session(CoffeeMaker::new(), "4\n5\n0\n3\n7\n5\n0\n");
        assert!(out.contains("Inventory successfully added"));
        assert!(out.contains("Coffee: 20\nMilk: 15\nSugar: 18\nChocolate: 22\n"));
        let sugar = state.with_machine(|m| m.inventory().sugar()).unwrap();
        assert_eq!(sugar, 18);
    }

    #[test]
    fn test_add_inventory_rejects_negative() {
        let (state, out) = session(CoffeeMaker::new(), "4\n5\n0\n-3\n7\n0\n");
        assert!(out.contains("Invalid inventory quantity: sugar must not be negative, got -3"));
        assert!(!out.contains("Inventory successfully added"));
        let coffee = state.with_machine(|m| m.inventory().coffee()).unwrap();
        assert_eq!(coffee, 15);
    }

    #[test]
    fn test_make_coffee_gives_change() {
        let (state, out) = session(machine_with_coffee(), "6\n1\n75\n0\n");
        assert!(out.contains("Enjoy your Coffee!"));
        assert!(out.contains("Your change is: 25"));
        let coffee = state.with_machine(|m| m.inventory().coffee()).unwrap();
        assert_eq!(coffee, 12);
    }

    #[test]
    fn test_make_coffee_refunds() {
        let (_, out) = session(machine_with_coffee(), "6\n1\n10\n6\n2\n60\n0\n");
        assert!(out.contains("Insufficient funds: that recipe costs 50."));
        assert!(out.contains("Your money is returned: 10"));
        assert!(out.contains("There is no recipe in that slot."));
        assert!(out.contains("Your money is returned: 60"));
    }

    #[test]
    fn test_make_coffee_bad_payment() {
        let (state, out) = session(machine_with_coffee(), "6\n1\nfifty\n0\n");
        assert!(out.contains("amount must be a whole number, got 'fifty'"));
        let coffee = state.with_machine(|m| m.inventory().coffee()).unwrap();
        assert_eq!(coffee, 15);
    }
}
