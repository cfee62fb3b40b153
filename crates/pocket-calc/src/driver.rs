//! Unified calculator driver
//!
//! Write the behaviour checks once and run them against every front end.
//! [`CalculatorDriver`] is implemented by the terminal app ([`TuiDriver`])
//! and the mock-DOM page ([`crate::wasm::WasmDriver`]); the `verify_*`
//! functions below are the shared checks.

use crate::keypad::KeypadAction;

/// Front-end agnostic calculator interface
pub trait CalculatorDriver {
    /// Performs one keypad action
    fn press(&mut self, action: KeypadAction);

    /// Primary display text
    fn display(&self) -> String;

    /// Expression line text
    fn expression(&self) -> String;

    /// Error line text, empty when there is no error
    fn error(&self) -> String;

    /// History lines, newest first
    fn history(&self) -> Vec<String>;

    /// Returns to the initial state
    fn reset(&mut self);

    /// Presses one key per character of `keys`; unmapped characters are skipped
    fn press_sequence(&mut self, keys: &str) {
        for c in keys.chars() {
            if let Some(action) = KeypadAction::from_key(c.encode_utf8(&mut [0; 4])) {
                self.press(action);
            }
        }
    }

    /// Presses named keys such as `"Enter"` or `"Backspace"`
    fn press_keys(&mut self, keys: &[&str]) {
        for key in keys {
            if let Some(action) = KeypadAction::from_key(key) {
                self.press(action);
            }
        }
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::keypad::KeypadAction;
    use crate::tui::CalculatorApp;

    /// Driver over the terminal app state
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: KeypadAction) {
            self.app.press(action);
        }

        fn display(&self) -> String {
            self.app.snapshot().current
        }

        fn expression(&self) -> String {
            self.app.snapshot().expression_line()
        }

        fn error(&self) -> String {
            self.app.snapshot().error_line().to_string()
        }

        fn history(&self) -> Vec<String> {
            self.app.snapshot().history
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====
// Each check starts from a reset driver and leaves it reset.

/// Digits concatenate with leading-zero suppression and one decimal point
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("007");
    assert_eq!(driver.display(), "7");
    driver.press_sequence("1.2.5");
    assert_eq!(driver.display(), "71.25");
    driver.reset();

    driver.press_sequence(".5");
    assert_eq!(driver.display(), "0.5");
    driver.reset();
}

/// Single binary operations and the expression line
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, display, expression) in [
        ("2+3=", "5", "2 + 3"),
        ("10-4=", "6", "10 - 4"),
        ("6*7=", "42", "6 × 7"),
        ("9/4=", "2.25", "9 ÷ 4"),
        ("2^10=", "1024", "2 ^ 10"),
    ] {
        driver.reset();
        driver.press_sequence(keys);
        assert_eq!(driver.display(), display, "display after {keys}");
        assert_eq!(driver.expression(), expression, "expression after {keys}");
        assert_eq!(driver.error(), "");
    }
    driver.reset();
}

/// Chained operators fold left to right with no precedence
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("4+3*");
    assert_eq!(driver.expression(), "7 × ");
    driver.press_sequence("2=");
    assert_eq!(driver.display(), "14");
    driver.reset();
}

/// Errors are shown, keep state, and are dismissed by the next input
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("5/0=");
    assert_eq!(driver.error(), "Cannot divide by zero");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.expression(), "5 ÷ ");

    driver.press_keys(&["Backspace"]);
    assert_eq!(driver.error(), "");
    driver.press_sequence("2=");
    assert_eq!(driver.display(), "2.5");
    driver.reset();

    driver.press_sequence("0-8=^0.5=");
    assert_eq!(driver.error(), "Negative base with fractional exponent");
    driver.press_sequence("1");
    assert_eq!(driver.error(), "");
    driver.reset();

    driver.press_sequence("9^999=");
    assert_eq!(driver.error(), "Result too large");
    driver.reset();
}

/// History keeps the newest ten results
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    for n in 1..=11 {
        driver.press_keys(&["c"]);
        driver.press_sequence(&format!("{n}+0="));
    }
    let history = driver.history();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "11 + 0 = 11");
    assert_eq!(history[9], "2 + 0 = 2");
    driver.reset();
}

/// Clear entry keeps the pending operation; all clear resets everything
pub fn verify_clear_semantics<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("1+1=8*5");
    driver.press_keys(&["c"]);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.expression(), "28 × ");
    assert_eq!(driver.history(), vec!["1 + 1 = 2"]);

    driver.press_keys(&["Escape"]);
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.expression(), "");
    assert!(driver.history().is_empty());
    driver.reset();
}

/// Backspace and percent edit the current operand
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_sequence("123");
    driver.press_keys(&["Backspace", "Delete"]);
    assert_eq!(driver.display(), "1");
    driver.press_keys(&["Backspace"]);
    assert_eq!(driver.display(), "0");

    driver.press_sequence("50%");
    assert_eq!(driver.display(), "0.5");
    driver.reset();
}

/// Runs every unified check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_left_to_right(driver);
    verify_error_handling(driver);
    verify_history(driver);
    verify_clear_semantics(driver);
    verify_editing(driver);
}
