//! Keypad actions and layout shared by every front end
//!
//! Layout (6 rows x 4 columns, two gaps in the last row):
//! ```text
//! [ AC ] [ CE ] [ ⌫ ] [ ÷ ]
//! [ 7  ] [ 8  ] [ 9 ] [ × ]
//! [ 4  ] [ 5  ] [ 6 ] [ - ]
//! [ 1  ] [ 2  ] [ 3 ] [ + ]
//! [ 0  ] [ .  ] [ % ] [ ^ ]
//! [ ◐  ]              [ = ]
//! ```

use crate::core::{Calculator, Operator};
use crate::theme::Theme;
use tracing::trace;

/// Something a button click or key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Digit 0-9
    Digit(u8),
    Decimal,
    /// One of the four arithmetic operators
    Operator(Operator),
    /// Exponentiation
    Power,
    Percent,
    Equals,
    /// Clear entry
    Clear,
    AllClear,
    Backspace,
    ToggleTheme,
}

impl KeypadAction {
    /// Label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Power => "^".to_string(),
            Self::Percent => "%".to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "CE".to_string(),
            Self::AllClear => "AC".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleTheme => "◐".to_string(),
        }
    }

    /// DOM id of the button for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        let name = match self {
            Self::Digit(d) => return format!("btn-{d}"),
            Self::Decimal => "decimal",
            Self::Operator(Operator::Add) => "plus",
            Self::Operator(Operator::Subtract) => "minus",
            Self::Operator(Operator::Multiply) => "times",
            Self::Operator(Operator::Divide) => "divide",
            Self::Operator(Operator::Power) | Self::Power => "power",
            Self::Percent => "percent",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::AllClear => "all-clear",
            Self::Backspace => "backspace",
            Self::ToggleTheme => "theme",
        };
        format!("btn-{name}")
    }

    /// Maps a `KeyboardEvent.key` name to an action
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key {
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "^" => Self::Power,
            "%" => Self::Percent,
            "Enter" | "=" => Self::Equals,
            "Escape" => Self::AllClear,
            "Backspace" | "Delete" => Self::Backspace,
            "c" | "C" => Self::Clear,
            "t" | "T" => Self::ToggleTheme,
            digit => {
                let mut chars = digit.chars();
                let d = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                Self::Digit(d as u8)
            }
        };
        Some(action)
    }

    /// Runs the action against calculator state and theme
    pub fn apply(self, calc: &mut Calculator, theme: &mut Theme) {
        trace!(action = ?self, "apply");
        match self {
            Self::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    calc.input_digit(c);
                }
            }
            Self::Decimal => calc.input_dot(),
            Self::Operator(op) => calc.choose_operator(op),
            Self::Power => calc.power(),
            Self::Percent => calc.percent(),
            Self::Equals => calc.evaluate(),
            Self::Clear => calc.clear(),
            Self::AllClear => calc.all_clear(),
            Self::Backspace => calc.backspace(),
            Self::ToggleTheme => *theme = theme.toggle(),
        }
    }
}

/// A button placed on the keypad grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub action: KeypadAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    #[must_use]
    pub const fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self { action, row, col }
    }

    #[must_use]
    pub fn element_id(&self) -> String {
        self.action.element_id()
    }
}

/// Button grid used by the terminal and browser keypads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeypadLayout {
    /// The standard calculator layout
    #[must_use]
    pub fn standard() -> Self {
        use KeypadAction as A;

        let grid: [[Option<KeypadAction>; 4]; 6] = [
            [
                Some(A::AllClear),
                Some(A::Clear),
                Some(A::Backspace),
                Some(A::Operator(Operator::Divide)),
            ],
            [
                Some(A::Digit(7)),
                Some(A::Digit(8)),
                Some(A::Digit(9)),
                Some(A::Operator(Operator::Multiply)),
            ],
            [
                Some(A::Digit(4)),
                Some(A::Digit(5)),
                Some(A::Digit(6)),
                Some(A::Operator(Operator::Subtract)),
            ],
            [
                Some(A::Digit(1)),
                Some(A::Digit(2)),
                Some(A::Digit(3)),
                Some(A::Operator(Operator::Add)),
            ],
            [
                Some(A::Digit(0)),
                Some(A::Decimal),
                Some(A::Percent),
                Some(A::Power),
            ],
            [Some(A::ToggleTheme), None, None, Some(A::Equals)],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter_map(move |(col, cell)| cell.map(|a| KeypadButton::new(a, row, col)))
            })
            .collect();

        Self {
            buttons,
            rows: 6,
            cols: 4,
        }
    }

    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button at a grid cell; gaps yield `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Index of the button at a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.row == row && b.col == col)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.element_id() == id)
    }

    /// Index of the button performing `action`
    ///
    /// `Operator(Power)` and `Power` share the `^` button.
    #[must_use]
    pub fn position_of(&self, action: KeypadAction) -> Option<usize> {
        let action = match action {
            KeypadAction::Operator(Operator::Power) => KeypadAction::Power,
            other => other,
        };
        self.buttons.iter().position(|b| b.action == action)
    }
}
