//! Terminal application state

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::config::CalculatorConfig;
use crate::core::{Calculator, Snapshot};
use crate::keypad::KeypadAction;
use crate::theme::Theme;

/// Calculator application state
#[derive(Debug, Clone, Default)]
pub struct CalculatorApp {
    calc: Calculator,
    theme: Theme,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            calc: Calculator::with_config(config),
            theme: config.theme,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calc
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.calc.snapshot()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Runs a keypad action and highlights its button
    pub fn press(&mut self, action: KeypadAction) {
        action.apply(&mut self.calc, &mut self.theme);
        self.keypad.highlight(action);
    }

    /// Handles an input action
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(action) => self.press(action),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Resets calculator state and highlight; the theme is kept
    pub fn reset(&mut self) {
        self.calc.all_clear();
        self.keypad.release_all();
    }
}
