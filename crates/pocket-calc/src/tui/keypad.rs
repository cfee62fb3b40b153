//! Terminal keypad
//!
//! The keypad can be clicked with the mouse, and the button matching the
//! last key press is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::ui::Palette;
use crate::keypad::{KeypadAction, KeypadButton, KeypadLayout};

/// Keypad with highlight state
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    layout: KeypadLayout,
    pressed: Option<usize>,
}

impl Keypad {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Index of the highlighted button
    #[must_use]
    pub const fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Action of the highlighted button
    #[must_use]
    pub fn pressed_action(&self) -> Option<KeypadAction> {
        self.pressed
            .and_then(|i| self.layout.get_button(i))
            .map(|b| b.action)
    }

    /// Highlights the button for `action`, releasing any other
    pub fn highlight(&mut self, action: KeypadAction) {
        self.pressed = self.layout.position_of(action);
    }

    pub fn release_all(&mut self) {
        self.pressed = None;
    }

    /// Maps a click position inside `area` to the button under it
    ///
    /// `area` includes the one-cell border drawn by [`KeypadWidget`].
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<KeypadAction> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }

        let (rows, cols) = self.layout.dimensions();
        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((x - inner.x) / btn_width) as usize;
        let row = ((y - inner.y) / btn_height) as usize;
        self.layout.get_button_at(row, col).map(|b| b.action)
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Widget drawing a [`Keypad`]
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    #[must_use]
    pub const fn new(keypad: &'a Keypad, palette: Palette) -> Self {
        Self { keypad, palette }
    }

    fn button_style(&self, index: usize, button: &KeypadButton) -> Style {
        let p = &self.palette;
        if self.keypad.pressed == Some(index) {
            return Style::default()
                .fg(p.background)
                .bg(p.highlight)
                .add_modifier(Modifier::BOLD);
        }
        let fg = match button.action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => p.text,
            KeypadAction::Operator(_) | KeypadAction::Power | KeypadAction::Percent => p.operator,
            KeypadAction::Equals => p.accent,
            KeypadAction::Clear | KeypadAction::AllClear | KeypadAction::Backspace => p.error,
            KeypadAction::ToggleTheme => p.muted,
        };
        Style::default().fg(fg)
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .render(area, buf);

        let inner = inner_area(area);
        let (rows, cols) = self.keypad.layout.dimensions();
        if inner.width < cols as u16 * 3 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for (index, button) in self.keypad.layout.buttons().iter().enumerate() {
            let x = inner.x + button.col as u16 * btn_width;
            let y = inner.y + button.row as u16 * btn_height + btn_height / 2;

            let label = format!("[{}]", button.action.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;

            buf.set_span(
                label_x,
                y,
                &Span::styled(label, self.button_style(index, button)),
                btn_width,
            );
        }
    }
}
