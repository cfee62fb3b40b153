//! Pocket calculator command-line front end
//!
//! `pocket-calc` runs the interactive terminal calculator; `pocket-calc press`
//! feeds keys to a fresh calculator and prints the result.

mod commands;
mod config;
mod error;
pub mod logging;
pub mod press;
pub mod terminal;

pub use commands::{Cli, ColorArg, Commands, PressArgs, ThemeArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
