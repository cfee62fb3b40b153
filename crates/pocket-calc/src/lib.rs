//! Pocket Calculator
//!
//! An immediate-execution calculator: operators apply left to right as they
//! are entered, with no precedence. The state machine in [`core`] is shared
//! by a terminal front end ([`tui`], feature `tui`) and a browser front end
//! ([`wasm`]). Both are checked by the same behaviour suite in [`driver`].
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit('4');
//! calc.choose_operator(Operator::Add);
//! calc.input_digit('3');
//! calc.choose_operator(Operator::Multiply);
//! calc.input_digit('2');
//! calc.evaluate();
//!
//! assert_eq!(calc.current(), "14");
//! assert_eq!(calc.history().latest().map(ToString::to_string).as_deref(), Some("7 × 2 = 14"));
//!
//! calc.choose_operator(Operator::Divide);
//! calc.input_digit('0');
//! calc.evaluate();
//! assert_eq!(calc.error(), Some(&CalcError::DivideByZero));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser front end; the mock DOM keeps it testable without a browser
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::number::{format_number, parse_number};
    pub use crate::core::{CalcError, CalcResult, Calculator, Operator, Phase, Snapshot};
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{KeypadAction, KeypadLayout};
    pub use crate::theme::Theme;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}
