//! Keyboard and mouse input for the terminal front end

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::keypad::Keypad;
use crate::keypad::KeypadAction;

/// What an input event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Run a keypad action
    Press(KeypadAction),
    /// Leave the application
    Quit,
    /// Ignored input
    None,
}

/// Maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(KeypadAction::AllClear),
                _ => KeyAction::None,
            };
        }

        let name = match code {
            KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            _ => return KeyAction::None,
        };

        KeypadAction::from_key(&name).map_or(KeyAction::None, KeyAction::Press)
    }

    /// Maps a left click on the keypad to the clicked button
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad: &Keypad, keypad_area: Rect) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => keypad
                .hit_test(keypad_area, event.column, event.row)
                .map_or(KeyAction::None, KeyAction::Press),
            _ => KeyAction::None,
        }
    }
}
