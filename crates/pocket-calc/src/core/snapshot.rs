//! Read-only view of calculator state for renderers

use crate::core::number::format_number;
use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// Coarse state of the calculator, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing typed since the last reset
    Idle,
    /// Digits are being entered
    Accumulating,
    /// An operator is waiting for its right-hand operand
    PendingOperator,
    /// The last operation failed
    Error,
}

/// Owned copy of every calculator field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub current: String,
    pub operand: Option<f64>,
    pub operator: Option<Operator>,
    /// Error message, as shown on the error line
    pub error: Option<String>,
    /// Machine-readable error kind
    pub error_kind: Option<String>,
    pub last_expression: Option<String>,
    /// History lines, newest first
    pub history: Vec<String>,
}

impl Snapshot {
    /// Text for the expression line
    ///
    /// While an operator is pending this is `"<operand> <glyph> <current>"`
    /// with `current` left blank when it is still `"0"`. Otherwise it is the
    /// last evaluated expression, or empty.
    #[must_use]
    pub fn expression_line(&self) -> String {
        match (self.operand, self.operator) {
            (Some(operand), Some(op)) => {
                let right = if self.current == "0" {
                    ""
                } else {
                    self.current.as_str()
                };
                format!("{} {} {}", format_number(operand), op.glyph(), right)
            }
            _ => self.last_expression.clone().unwrap_or_default(),
        }
    }

    /// Text for the error line, empty when there is no error
    #[must_use]
    pub fn error_line(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.operator.is_some() {
            Phase::PendingOperator
        } else if self.current != "0" {
            Phase::Accumulating
        } else {
            Phase::Idle
        }
    }

    /// Serializes the snapshot as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
