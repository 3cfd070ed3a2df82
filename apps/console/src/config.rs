//! # Machine Configuration
//!
//! How big the machine is and what it starts with.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Loading                               │
//! │                                                                         │
//! │  1. Defaults                     4 slots, 15 of everything, no recipes │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. Config file                  --config / COFFEEMAKER_CONFIG /        │
//! │           │                      <platform config dir>/coffeemaker.toml │
//! │           ▼                                                             │
//! │  3. Environment                  COFFEEMAKER_RECIPE_SLOTS               │
//! │           │                      COFFEEMAKER_STARTING_STOCK             │
//! │           ▼                                                             │
//! │  4. validate()                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! recipe_slots = 4
//! starting_stock = 15
//!
//! [[recipes]]
//! name = "Coffee"
//! price = 50
//! coffee = 3
//! milk = 1
//! sugar = 1
//! ```
//!
//! The file is read once at startup and never written back. Recipes added
//! at the console are gone when the process exits.

use std::collections::HashSet;
use std::path::PathBuf;

use coffee_core::{CoffeeMaker, Recipe, DEFAULT_STARTING_STOCK, RECIPE_BOOK_CAPACITY};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{ConsoleError, ConsoleResult};

/// Environment variable overriding the number of recipe slots.
pub const ENV_RECIPE_SLOTS: &str = "COFFEEMAKER_RECIPE_SLOTS";

/// Environment variable overriding the starting stock of every ingredient.
pub const ENV_STARTING_STOCK: &str = "COFFEEMAKER_STARTING_STOCK";

/// Largest recipe book a configuration may ask for.
pub const MAX_RECIPE_SLOTS: usize = 64;

const CONFIG_FILE_NAME: &str = "coffeemaker.toml";

// =============================================================================
// MachineConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    /// Number of slots in the recipe book.
    #[serde(default = "default_recipe_slots")]
    pub recipe_slots: usize,

    /// Units of each ingredient the machine starts with.
    #[serde(default = "default_starting_stock")]
    pub starting_stock: u32,

    /// Recipes placed in the book at startup, in slot order.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

fn default_recipe_slots() -> usize {
    RECIPE_BOOK_CAPACITY
}

fn default_starting_stock() -> u32 {
    DEFAULT_STARTING_STOCK
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            recipe_slots: default_recipe_slots(),
            starting_stock: default_starting_stock(),
            recipes: Vec::new(),
        }
    }
}

impl MachineConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; the defaults are used.
    pub fn load(config_path: Option<PathBuf>) -> ConsoleResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading machine config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConsoleError::ConfigRead { path, source })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides from `lookup`, normally the process environment.
    ///
    /// Values that don't parse are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_RECIPE_SLOTS) {
            match raw.trim().parse::<usize>() {
                Ok(slots) => {
                    debug!(slots, "Overriding recipe slots from environment");
                    self.recipe_slots = slots;
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_RECIPE_SLOTS),
            }
        }

        if let Some(raw) = lookup(ENV_STARTING_STOCK) {
            match raw.trim().parse::<u32>() {
                Ok(stock) => {
                    debug!(stock, "Overriding starting stock from environment");
                    self.starting_stock = stock;
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid {}", ENV_STARTING_STOCK),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.recipe_slots == 0 || self.recipe_slots > MAX_RECIPE_SLOTS {
            return Err(ConsoleError::InvalidConfig(format!(
                "recipe_slots must be between 1 and {MAX_RECIPE_SLOTS}, got {}",
                self.recipe_slots
            )));
        }

        if self.recipes.len() > self.recipe_slots {
            return Err(ConsoleError::InvalidConfig(format!(
                "{} recipes configured but the book only has {} slots",
                self.recipes.len(),
                self.recipe_slots
            )));
        }

        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if recipe.is_unnamed() {
                return Err(ConsoleError::InvalidConfig(
                    "every configured recipe needs a name".into(),
                ));
            }
            if !seen.insert(recipe.name()) {
                return Err(ConsoleError::InvalidConfig(format!(
                    "recipe '{}' is configured more than once",
                    recipe.name()
                )));
            }
        }

        Ok(())
    }

    /// Builds the machine this configuration describes.
    pub fn build_machine(&self) -> ConsoleResult<CoffeeMaker> {
        self.validate()?;

        let mut machine = CoffeeMaker::with_limits(self.recipe_slots, self.starting_stock);
        for recipe in &self.recipes {
            if !machine.add_recipe(recipe.clone()) {
                return Err(ConsoleError::InvalidConfig(format!(
                    "could not preload recipe '{}'",
                    recipe.name()
                )));
            }
        }

        info!(
            slots = self.recipe_slots,
            stock = self.starting_stock,
            preloaded = self.recipes.len(),
            "Machine ready"
        );
        Ok(machine)
    }

    /// `<platform config dir>/coffeemaker.toml`, when a home directory exists.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "coffeemaker", "coffeemaker")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_core::Money;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = MachineConfig::default();
        assert_eq!(config.recipe_slots, 4);
        assert_eq!(config.starting_stock, 15);
        assert!(config.recipes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
recipe_slots = 6
starting_stock = 30

[[recipes]]
name = "Coffee"
price = 50
coffee = 3
milk = 1
sugar = 1

[[recipes]]
name = "Mocha"
price = 100
coffee = 3
milk = 1
sugar = 1
chocolate = 2
"#,
        );

        let config = MachineConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.recipe_slots, 6);
        assert_eq!(config.starting_stock, 30);
        assert_eq!(config.recipes.len(), 2);
        assert_eq!(config.recipes[1].name(), "Mocha");
        assert_eq!(config.recipes[1].amount_chocolate(), 2);
        assert_eq!(config.recipes[1].price().units(), 100);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("starting_stock = 20\n");
        let config = MachineConfig::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.recipe_slots, 4);
        assert_eq!(config.starting_stock, 20);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = MachineConfig::load(Some(path)).unwrap();
        assert_eq!(config.recipe_slots, 4);
    }

    #[test]
    fn test_negative_amount_in_file_is_rejected() {
        let file = write_config("[[recipes]]\nname = \"Bad\"\ncoffee = -1\n");
        let result = MachineConfig::load(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConsoleError::ConfigParse(_))));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_RECIPE_SLOTS, "8"),
            (ENV_STARTING_STOCK, "lots"),
        ]
        .into_iter()
        .collect();

        let mut config = MachineConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.recipe_slots, 8);
        // unparseable value leaves the default alone
        assert_eq!(config.starting_stock, 15);
    }

    #[test]
    fn test_validation() {
        let mut config = MachineConfig {
            recipe_slots: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.recipe_slots = 1;
        config.recipes = vec![
            Recipe::from_parts("Coffee", Money::from_units(50), 3, 1, 1, 0),
            Recipe::from_parts("Latte", Money::from_units(75), 2, 2, 1, 0),
        ];
        assert!(config.validate().is_err());

        config.recipe_slots = 4;
        assert!(config.validate().is_ok());

        config.recipes.push(Recipe::from_parts("Coffee", Money::from_units(10), 1, 0, 0, 0));
        assert!(config.validate().is_err());

        config.recipes = vec![Recipe::new()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_book_is_rejected() {
        let mut config = MachineConfig::default();
        config.apply_overrides(|key| {
            (key == ENV_RECIPE_SLOTS).then(|| usize::MAX.to_string())
        });
        assert_eq!(config.recipe_slots, usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::InvalidConfig(_))
        ));
        assert!(matches!(
            config.build_machine(),
            Err(ConsoleError::InvalidConfig(_))
        ));

        config.recipe_slots = MAX_RECIPE_SLOTS;
        assert!(config.validate().is_ok());
        config.recipe_slots = MAX_RECIPE_SLOTS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_machine_preloads_recipes() {
        let config = MachineConfig {
            recipe_slots: 2,
            starting_stock: 5,
            recipes: vec![Recipe::from_parts("Coffee", Money::from_units(50), 3, 1, 1, 0)],
        };

        let machine = config.build_machine().unwrap();
        assert_eq!(machine.recipes().len(), 2);
        assert_eq!(machine.recipe_book().get(0).map(|r| r.name()), Some("Coffee"));
        assert_eq!(machine.inventory().coffee(), 5);
    }
}
