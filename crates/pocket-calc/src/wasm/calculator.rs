//! Browser-side calculator controller
//!
//! Owns the state machine and the theme, turns DOM events into keypad
//! actions, and copies snapshots into the page.

use super::dom::{
    DomElement, DomEvent, MockDom, DISPLAY_ID, ERROR_ID, EXPRESSION_ID, HISTORY_ID, ROOT_ID,
};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::config::CalculatorConfig;
use crate::core::{Calculator, Snapshot};
use crate::keypad::KeypadAction;
use crate::theme::Theme;

/// Calculator controller for the browser page
#[derive(Debug, Clone, Default)]
pub struct WasmCalculator {
    calc: Calculator,
    theme: Theme,
    keypad: WasmKeypad,
}

impl WasmCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            calc: Calculator::with_config(config),
            theme: config.theme,
            keypad: WasmKeypad::new(),
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
    pub const fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Applies a keypad action
    pub fn press(&mut self, action: KeypadAction) {
        action.apply(&mut self.calc, &mut self.theme);
    }

    /// Handles a click on `element_id`; clicks outside the keypad are ignored
    pub fn click(&mut self, element_id: &str) -> Option<KeypadAction> {
        let action = self.keypad.handle_click(element_id)?;
        self.press(action);
        Some(action)
    }

    /// Handles a `keydown` with the given key name
    pub fn key(&mut self, key: &str) -> Option<KeypadAction> {
        let action = KeypadAction::from_key(key)?;
        self.press(action);
        Some(action)
    }

    /// Routes a DOM event to [`Self::click`] or [`Self::key`]
    pub fn handle_event(&mut self, event: &DomEvent) -> Option<KeypadAction> {
        match event {
            DomEvent::Click { element_id } => self.click(element_id),
            DomEvent::KeyDown { key } => self.key(key),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.calc.snapshot()
    }

    /// Resets calculator state; the theme is kept
    pub fn reset(&mut self) {
        self.calc.all_clear();
    }

    /// Builds the full page: display lines, history list and keypad
    #[must_use]
    pub fn mount(&self) -> MockDom {
        let mut dom = MockDom::calculator();
        dom.add_keypad(&self.keypad);
        self.render_into(&mut dom);
        dom
    }

    /// Copies the current snapshot into the page
    pub fn render_into(&self, dom: &mut MockDom) {
        let snap = self.snapshot();

        dom.set_element_text(DISPLAY_ID, &snap.current);
        dom.set_element_text(EXPRESSION_ID, &snap.expression_line());
        dom.set_element_text(ERROR_ID, snap.error_line());

        dom.clear_children(HISTORY_ID);
        for line in &snap.history {
            dom.append_child(HISTORY_ID, DomElement::new("li").with_text(line));
        }

        if let Some(root) = dom.get_element_mut(ROOT_ID) {
            for theme in [Theme::Light, Theme::Dark] {
                if let Some(class) = theme.css_class() {
                    root.toggle_class(class, theme == self.theme);
                }
            }
        }
    }

    /// Handles an event, records it on the page and re-renders
    pub fn dispatch(&mut self, dom: &mut MockDom, event: DomEvent) -> Option<KeypadAction> {
        let action = self.handle_event(&event);
        dom.dispatch_event(event);
        self.render_into(dom);
        action
    }
}
