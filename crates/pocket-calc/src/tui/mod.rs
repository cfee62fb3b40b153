//! Terminal front end

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, Palette};
