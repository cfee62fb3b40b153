//! Calculator core: the state machine and the pieces it is built from
//!
//! Everything in here is pure logic. Front ends (terminal, browser, CLI)
//! drive a [`Calculator`] and render its [`Snapshot`].

pub mod history;
pub mod number;
mod operations;
mod snapshot;
mod state;

pub use operations::Operator;
pub use snapshot::{Phase, Snapshot};
pub use state::Calculator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for arithmetic operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error kinds
///
/// The `Display` text is what the error line of a front end shows.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    /// Operator symbol outside `+ - * / ^`
    #[error("Unknown operator")]
    UnknownOperator(String),
    /// Division by exactly zero
    #[error("Cannot divide by zero")]
    DivideByZero,
    /// Negative base raised to a non-integer exponent
    #[error("Negative base with fractional exponent")]
    InvalidExponent,
    /// Exponentiation produced a non-finite value
    #[error("Result too large")]
    Overflow,
}

impl CalcError {
    /// Stable machine-readable name of the error kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownOperator(_) => "unknown_operator",
            Self::DivideByZero => "divide_by_zero",
            Self::InvalidExponent => "invalid_exponent",
            Self::Overflow => "overflow",
        }
    }
}
