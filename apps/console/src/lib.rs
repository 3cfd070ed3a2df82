//! # CoffeeMaker Console
//!
//! The operator's shell around `coffee-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Startup                                          │
//! │                                                                         │
//! │  1. init_tracing()          logs to stderr, RUST_LOG aware             │
//! │  2. MachineConfig::load()   defaults → TOML → env → validate           │
//! │  3. build_machine()         slots, stock, preloaded recipes            │
//! │  4. MachineState::new()     Arc<Mutex<CoffeeMaker>>                     │
//! │  5. Console::run()          menu on stdin / stdout until 0 or EOF      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - `MachineConfig` and its load order
//! - [`state`] - `MachineState`, the locked machine
//! - [`menu`] - `Console`, the menu loop
//! - [`error`] - `ConsoleError`

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod menu;
pub mod state;

pub use config::MachineConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use menu::{Console, MenuChoice};
pub use state::MachineState;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,coffee_core=info,coffeemaker_console=info";

/// Runs one console session on stdin/stdout.
///
/// ## Arguments
/// * `config_path` - explicit config file; `None` falls back to the
///   platform config directory
pub fn run(config_path: Option<PathBuf>) -> ConsoleResult<()> {
    init_tracing();

    let config = MachineConfig::load(config_path)?;
    let state = MachineState::new(config.build_machine()?);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting CoffeeMaker console");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(state, stdin.lock(), stdout.lock());
    console.run()?;

    info!("CoffeeMaker console exited");
    Ok(())
}

/// Installs the tracing subscriber.
///
/// Logs go to stderr so they never interleave with menu output. A second
/// call is a no-op.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
