//! Browser keypad
//!
//! Builds keypad button elements from the shared layout and resolves click
//! targets back to actions.

use super::dom::{DomElement, MockDom, ROOT_ID};
use crate::keypad::{KeypadAction, KeypadButton, KeypadLayout};

/// Id of the keypad container element
pub const KEYPAD_ID: &str = "calc-keypad";

/// Keypad for the browser page
#[derive(Debug, Clone, Default)]
pub struct WasmKeypad {
    layout: KeypadLayout,
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        self.layout.buttons()
    }

    /// Creates one `<button>` per keypad button
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons().iter().map(button_element).collect()
    }

    /// Creates the keypad container with all buttons as children
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements().into_iter().fold(
            DomElement::new("div").with_id(KEYPAD_ID).with_class("keypad"),
            DomElement::with_child,
        )
    }

    /// Resolves a clicked element id to its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.layout.find_by_id(element_id).map(|b| b.action)
    }
}

fn button_element(button: &KeypadButton) -> DomElement {
    let elem = DomElement::new("button")
        .with_id(&button.element_id())
        .with_text(&button.action.label())
        .with_class("keypad-btn")
        .with_class(&format!("keypad-row-{}", button.row))
        .with_class(&format!("keypad-col-{}", button.col));

    // Data attributes mirror the markup the page script binds to
    match button.action {
        KeypadAction::Digit(d) => elem.with_attr("data-digit", &d.to_string()),
        KeypadAction::Decimal => elem.with_attr("data-dot", ""),
        KeypadAction::Operator(op) => elem.with_attr("data-operator", op.symbol()),
        KeypadAction::Power => elem.with_attr("data-action", "power"),
        KeypadAction::Percent => elem.with_attr("data-action", "percent"),
        KeypadAction::Equals => elem.with_attr("data-action", "equals"),
        KeypadAction::Clear => elem.with_attr("data-action", "clear"),
        KeypadAction::AllClear => elem.with_attr("data-action", "all-clear"),
        KeypadAction::Backspace => elem.with_attr("data-action", "backspace"),
        KeypadAction::ToggleTheme => elem.with_attr("data-action", "theme"),
    }
}

/// Adds a keypad to a mock document
pub trait MockDomKeypadExt {
    /// Registers the keypad container and every button under the root
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        self.append_child(ROOT_ID, keypad.create_keypad_element());
        for elem in keypad.create_dom_elements() {
            self.register_element(elem);
        }
    }
}
