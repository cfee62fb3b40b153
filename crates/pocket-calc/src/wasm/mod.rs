//! Browser front end
//!
//! Everything except [`BrowserCalculator`] runs against [`MockDom`], so the
//! page logic is tested natively without a browser.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::WasmCalculator;
pub use dom::{
    DomElement, DomEvent, MockDom, DISPLAY_ID, ERROR_ID, EXPRESSION_ID, HISTORY_ID, ROOT_ID,
};
pub use driver::WasmDriver;
pub use keypad::{MockDomKeypadExt, WasmKeypad, KEYPAD_ID};
