//! Pocket calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                        # Interactive terminal calculator
//! pocket-calc press 4+3*2=           # Prints 14
//! pocket-calc press 9 / 0 Enter      # Prints the error line too
//! pocket-calc press --json 2^10=     # Snapshot as JSON
//! ```

use clap::Parser;
use pocket_calc_cli::{
    logging::init_tracing, press::run_press, terminal::run_tui, Cli, CliConfig, CliResult,
    Commands,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli)?;
    config.color.apply();

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_tracing(&config, interactive)?;

    match &cli.command {
        None | Some(Commands::Tui) => run_tui(&config),
        Some(Commands::Press(args)) => run_press(&config, args),
    }
}
