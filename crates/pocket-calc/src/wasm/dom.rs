//! Mock DOM
//!
//! A small element registry standing in for the browser document, so the
//! render path can be tested without web-sys.

use std::collections::HashMap;

/// Id of the root element carrying the theme class
pub const ROOT_ID: &str = "calculator";
/// Primary display
pub const DISPLAY_ID: &str = "display";
/// Expression line
pub const EXPRESSION_ID: &str = "expression";
/// Error line
pub const ERROR_ID: &str = "error";
/// History list
pub const HISTORY_ID: &str = "history-list";

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    pub id: String,
    pub tag: String,
    pub text_content: String,
    pub attributes: HashMap<String, String>,
    pub classes: Vec<String>,
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text_content);
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes `class` depending on `on`
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Input events the calculator page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// Id of the clicked element
        element_id: String,
    },
    /// `keydown` on the document
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock document holding elements by id
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: root, display, expression and error
    /// lines, and the history list
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("display")
            .with_text("0");
        let expression = DomElement::new("div")
            .with_id(EXPRESSION_ID)
            .with_class("expression");
        let error = DomElement::new("div").with_id(ERROR_ID).with_class("error");
        let history = DomElement::new("ul")
            .with_id(HISTORY_ID)
            .with_class("history-list");

        let root = DomElement::new("div")
            .with_id(ROOT_ID)
            .with_class("calculator-app")
            .with_child(display.clone())
            .with_child(expression.clone())
            .with_child(error.clone())
            .with_child(history.clone());

        dom.register_element(root);
        dom.register_element(display);
        dom.register_element(expression);
        dom.register_element(error);
        dom.register_element(history);
        dom
    }

    /// Registers an element for id lookup; elements without an id are dropped
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// The root element, if the page has one
    #[must_use]
    pub fn root(&self) -> Option<&DomElement> {
        self.get_element(ROOT_ID)
    }

    /// Records an event for later inspection
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends `child` to the element `parent_id`
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if !child.id.is_empty() {
            self.elements.insert(child.id.clone(), child.clone());
        }
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child);
        }
    }

    /// Removes all children of `id`
    pub fn clear_children(&mut self, id: &str) {
        let child_ids: Vec<String> = self
            .elements
            .get_mut(id)
            .map(|elem| {
                elem.children
                    .drain(..)
                    .map(|c| c.id)
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        for child_id in child_ids {
            self.elements.remove(&child_id);
        }
    }

    /// Text of each child of `id`, in order
    #[must_use]
    pub fn child_texts(&self, id: &str) -> Vec<String> {
        self.elements
            .get(id)
            .map(|e| e.children.iter().map(|c| c.text_content.clone()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_element_builder() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("keypad-btn")
            .with_class("keypad-btn")
            .with_attr("data-digit", "7");

        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert_eq!(elem.classes, vec!["keypad-btn"]);
        assert_eq!(elem.get_attr("data-digit"), Some("7"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_element_toggle_class() {
        let mut elem = DomElement::default();
        elem.toggle_class("dark", true);
        assert!(elem.has_class("dark"));
        elem.toggle_class("dark", true);
        assert_eq!(elem.classes.len(), 1);
        elem.toggle_class("dark", false);
        assert!(!elem.has_class("dark"));
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-1"),
            DomEvent::Click {
                element_id: "btn-1".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown { key: "Enter".into() }
        );
    }

    // ===== MockDom tests =====

    #[test]
    fn test_calculator_page_elements() {
        let dom = MockDom::calculator();
        for id in [ROOT_ID, DISPLAY_ID, EXPRESSION_ID, ERROR_ID, HISTORY_ID] {
            assert!(dom.get_element(id).is_some(), "missing #{id}");
        }
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("0"));
        assert_eq!(dom.root().map(|r| r.children.len()), Some(4));
    }

    #[test]
    fn test_set_and_get_text() {
        let mut dom = MockDom::calculator();
        dom.set_element_text(DISPLAY_ID, "42");
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("42"));
        dom.set_element_text("nope", "x");
        assert_eq!(dom.get_element_text("nope"), None);
    }

    #[test]
    fn test_register_without_id_is_ignored() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span"));
        assert!(dom.get_element("").is_none());
    }

    #[test]
    fn test_append_and_clear_children() {
        let mut dom = MockDom::calculator();
        dom.append_child(HISTORY_ID, DomElement::new("li").with_text("1 + 1 = 2"));
        dom.append_child(
            HISTORY_ID,
            DomElement::new("li").with_id("entry-0").with_text("2 + 2 = 4"),
        );
        assert_eq!(dom.child_texts(HISTORY_ID), vec!["1 + 1 = 2", "2 + 2 = 4"]);
        assert!(dom.get_element("entry-0").is_some());

        dom.clear_children(HISTORY_ID);
        assert!(dom.child_texts(HISTORY_ID).is_empty());
        assert!(dom.get_element("entry-0").is_none());
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_down("+"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }
}
