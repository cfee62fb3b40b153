//! Mock-DOM driver
//!
//! Drives the page through DOM events and reads every observable value back
//! from the rendered elements, so the unified checks exercise rendering too.

use super::calculator::WasmCalculator;
use super::dom::{DomEvent, MockDom, DISPLAY_ID, ERROR_ID, EXPRESSION_ID, HISTORY_ID};
use crate::driver::CalculatorDriver;
use crate::keypad::KeypadAction;

/// Driver over a mounted page
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WasmCalculator,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(WasmCalculator::new())
    }

    /// Mounts a page for an existing controller
    #[must_use]
    pub fn with_calculator(calculator: WasmCalculator) -> Self {
        let dom = calculator.mount();
        Self { calculator, dom }
    }

    #[must_use]
    pub const fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }

    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Clicks the element with `element_id`
    pub fn click(&mut self, element_id: &str) -> Option<KeypadAction> {
        self.calculator
            .dispatch(&mut self.dom, DomEvent::click(element_id))
    }

    /// Sends a `keydown` for `key`
    pub fn key_down(&mut self, key: &str) -> Option<KeypadAction> {
        self.calculator
            .dispatch(&mut self.dom, DomEvent::key_down(key))
    }

    fn text_of(&self, id: &str) -> String {
        self.dom.get_element_text(id).unwrap_or_default().to_string()
    }
}

impl CalculatorDriver for WasmDriver {
    /// Presses go through the on-screen button, like a user click
    fn press(&mut self, action: KeypadAction) {
        self.click(&action.element_id());
    }

    fn display(&self) -> String {
        self.text_of(DISPLAY_ID)
    }

    fn expression(&self) -> String {
        self.text_of(EXPRESSION_ID)
    }

    fn error(&self) -> String {
        self.text_of(ERROR_ID)
    }

    fn history(&self) -> Vec<String> {
        self.dom.child_texts(HISTORY_ID)
    }

    fn reset(&mut self) {
        self.calculator.reset();
        self.dom.clear_event_history();
        self.calculator.render_into(&mut self.dom);
    }

    fn press_keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.key_down(key);
        }
    }
}
