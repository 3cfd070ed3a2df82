//! CoffeeMaker console entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "coffeemaker", version, about = "CoffeeMaker vending console")]
struct Cli {
    /// Path to a coffeemaker.toml config file
    #[arg(short, long, env = "COFFEEMAKER_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match coffeemaker_console::run(cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("coffeemaker: {e}");
            ExitCode::FAILURE
        }
    }
}
