//! Binary operators and their arithmetic

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
    /// Exponentiation (^)
    #[serde(rename = "^")]
    Power,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Returns the raw operator symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Returns the symbol shown on the expression line
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Multiply => "×",
            Self::Divide => "÷",
            _ => self.symbol(),
        }
    }

    /// Parses a raw symbol or display glyph
    pub fn from_symbol(symbol: &str) -> CalcResult<Self> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }

    /// Applies the operator to `a` and `b`
    ///
    /// Only division and exponentiation can fail. Addition, subtraction and
    /// multiplication return whatever IEEE arithmetic produces, including
    /// infinities.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(a / b)
            }
            Self::Power => Self::power(a, b),
        }
    }

    fn power(base: f64, exponent: f64) -> CalcResult<f64> {
        // NaN and infinite exponents have no integer value either
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(CalcError::InvalidExponent);
        }
        let result = base.powf(exponent);
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
