//! The `press` command: batch key entry on a fresh calculator

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use console::style;
use pocket_calc::core::{Calculator, Snapshot};
use pocket_calc::keypad::KeypadAction;
use pocket_calc::theme::Theme;
use std::fmt::Write as _;
use tracing::{debug, info};

/// Splits key arguments into keypad actions
///
/// An argument that names a key (`Enter`, `Escape`, `Backspace`, `Delete`)
/// or maps as a whole is one key; otherwise each character is a key and
/// whitespace is skipped.
pub fn parse_keys(args: &[String]) -> CliResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();
    for arg in args {
        if let Some(action) = KeypadAction::from_key(arg) {
            actions.push(action);
            continue;
        }
        for c in arg.chars().filter(|c| !c.is_whitespace()) {
            let key = c.to_string();
            let action = KeypadAction::from_key(&key).ok_or_else(|| CliError::unknown_key(key))?;
            actions.push(action);
        }
    }
    Ok(actions)
}

/// Applies `actions` to a calculator built from `config`
#[must_use]
pub fn evaluate(config: &CliConfig, actions: &[KeypadAction]) -> Snapshot {
    let mut calc = Calculator::with_config(&config.calculator);
    let mut theme: Theme = config.calculator.theme;
    for action in actions {
        action.apply(&mut calc, &mut theme);
    }
    debug!(presses = actions.len(), phase = ?calc.snapshot().phase(), "keys applied");
    calc.snapshot()
}

/// Human-readable report of a snapshot
#[must_use]
pub fn render_text(snapshot: &Snapshot, with_history: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style(&snapshot.current).bold());

    let expression = snapshot.expression_line();
    if !expression.is_empty() {
        let _ = writeln!(out, "{}", style(expression).dim());
    }
    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "{} {}", style("✗").red().bold(), style(error).red());
    }
    if with_history && !snapshot.history.is_empty() {
        let _ = writeln!(out, "{}", style("History").underlined());
        for line in &snapshot.history {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

/// Runs the `press` command and prints the result
pub fn run_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let actions = parse_keys(&args.keys)?;
    info!(keys = ?args.keys, "pressing keys");
    let snapshot = evaluate(config, &actions);

    if args.json {
        println!("{}", snapshot.to_json()?);
    } else if !config.verbosity.is_quiet() || snapshot.error.is_some() {
        print!("{}", render_text(&snapshot, args.history));
    } else {
        println!("{}", snapshot.current);
    }
    Ok(())
}
