//! wasm-bindgen entry point
//!
//! Exposes [`WasmCalculator`] to page scripts and renders it into the real
//! document using the same element ids as the mock page.

use wasm_bindgen::prelude::*;
use web_sys::{console, Document};

use super::calculator::WasmCalculator;
use super::dom::{DISPLAY_ID, ERROR_ID, EXPRESSION_ID, HISTORY_ID, ROOT_ID};
use crate::theme::Theme;

/// Calculator handle owned by the page script
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WasmCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::default()
    }

    /// Handles a click on the button with `element_id`; returns whether it was a keypad button
    pub fn press_button(&mut self, element_id: &str) -> bool {
        self.inner.click(element_id).is_some()
    }

    /// Handles a `keydown`; returns whether the key was mapped
    pub fn press_key(&mut self, key: &str) -> bool {
        self.inner.key(key).is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.inner.snapshot().current
    }

    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.inner.snapshot().expression_line()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> String {
        self.inner.snapshot().error_line().to_string()
    }

    /// History lines as a JSON array, newest first
    pub fn history_json(&self) -> String {
        serde_json::to_string(&self.inner.snapshot().history).unwrap_or_else(|_| "[]".to_string())
    }

    /// History as plain text, one line per entry, newest first
    pub fn history_text(&self) -> String {
        self.inner.calculator().history().export_formatted()
    }

    /// Full state as JSON
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.inner
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn toggle_theme(&mut self) {
        self.inner.toggle_theme();
    }

    pub fn is_dark(&self) -> bool {
        self.inner.theme().is_dark()
    }

    /// Resets calculator state; the theme is kept
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Writes the current state into the page
    ///
    /// Missing elements are skipped so partial pages still work.
    pub fn render(&self) -> Result<(), JsValue> {
        let document = document()?;
        let snap = self.inner.snapshot();

        set_text(&document, DISPLAY_ID, &snap.current);
        set_text(&document, EXPRESSION_ID, &snap.expression_line());
        set_text(&document, ERROR_ID, snap.error_line());

        if let Some(list) = document.get_element_by_id(HISTORY_ID) {
            list.set_text_content(None);
            for line in &snap.history {
                let item = document.create_element("li")?;
                item.set_text_content(Some(line));
                list.append_child(&item)?;
            }
        }

        if let Some(root) = document.get_element_by_id(ROOT_ID) {
            for theme in [Theme::Light, Theme::Dark] {
                if let Some(class) = theme.css_class() {
                    root.class_list()
                        .toggle_with_force(class, theme == self.inner.theme())?;
                }
            }
        }
        Ok(())
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Pocket calculator initialized".into());
}
