//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use pocket_calc::theme::Theme;
use std::path::PathBuf;

/// Pocket calculator: immediate-execution arithmetic in the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML config file
    #[arg(long, global = true, env = "POCKET_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of history entries to keep
    #[arg(long, global = true)]
    pub history_limit: Option<usize>,

    /// Initial theme
    #[arg(long, global = true)]
    pub theme: Option<ThemeArg>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui,

    /// Press keys on a fresh calculator and print the result
    Press(PressArgs),
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Keys to press: compact strings such as `4+3*2=` or names such as `Enter`
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the state as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print the history
    #[arg(long)]
    pub history: bool,
}

/// Theme argument
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
