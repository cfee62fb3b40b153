//! The calculator state machine
//!
//! All state lives in [`Calculator`]; every public operation mutates it in
//! place and never returns an error. Failures are recorded on the state and
//! shown by the front end until the next input dismisses them.

use crate::config::CalculatorConfig;
use crate::core::history::{History, HistoryEntry};
use crate::core::number::{format_number, parse_finite, parse_number};
use crate::core::{CalcError, Operator, Snapshot};
use tracing::{debug, trace};

const ZERO: &str = "0";

/// Calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    current: String,
    operand: Option<f64>,
    operator: Option<Operator>,
    error: Option<CalcError>,
    last_expression: Option<String>,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the default history limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(History::DEFAULT_LIMIT)
    }

    /// Creates a calculator keeping at most `limit` history entries
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            current: ZERO.to_string(),
            operand: None,
            operator: None,
            error: None,
            last_expression: None,
            history: History::with_limit(limit),
        }
    }

    /// Creates a calculator from configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self::with_history_limit(config.history_limit)
    }

    // ===== Accessors =====

    /// Operand being typed
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Stored left-hand value
    #[must_use]
    pub const fn operand(&self) -> Option<f64> {
        self.operand
    }

    /// Pending operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Error recorded by the last operation
    #[must_use]
    pub const fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Most recently evaluated expression
    #[must_use]
    pub fn last_expression(&self) -> Option<&str> {
        self.last_expression.as_deref()
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    // ===== Input =====

    /// Appends a digit to the current operand
    ///
    /// `'.'` is forwarded to [`Self::input_dot`]. Any other non-digit is
    /// ignored.
    pub fn input_digit(&mut self, digit: char) {
        if digit == '.' {
            self.input_dot();
            return;
        }
        if !digit.is_ascii_digit() {
            trace!(?digit, "ignoring non-digit input");
            return;
        }

        self.dismiss_error();
        if self.current == ZERO {
            self.current = digit.to_string();
        } else {
            self.current.push(digit);
        }
    }

    /// Appends a decimal point unless the operand already has one
    pub fn input_dot(&mut self) {
        self.dismiss_error();
        if !self.current.contains('.') {
            self.current.push('.');
        }
    }

    /// Selects a binary operator, folding any pending operation first
    pub fn choose_operator(&mut self, op: Operator) {
        self.dismiss_error();
        let Some(value) = parse_finite(&self.current) else {
            trace!(current = %self.current, "operator ignored, operand is not finite");
            return;
        };

        let left = match (self.operand, self.operator) {
            (Some(left), Some(pending)) => match pending.apply(left, value) {
                Ok(result) => result,
                Err(err) => {
                    self.fail(err);
                    return;
                }
            },
            (Some(left), None) => left,
            (None, _) => value,
        };

        debug!(operand = left, operator = op.symbol(), "operator chosen");
        self.operand = Some(left);
        self.operator = Some(op);
        self.current = ZERO.to_string();
    }

    /// Selects an operator given as a raw symbol or glyph
    ///
    /// Unknown symbols record [`CalcError::UnknownOperator`] and leave the
    /// rest of the state untouched.
    pub fn choose_operator_symbol(&mut self, symbol: &str) {
        match Operator::from_symbol(symbol) {
            Ok(op) => self.choose_operator(op),
            Err(err) => {
                self.dismiss_error();
                self.fail(err);
            }
        }
    }

    /// Selects exponentiation
    pub fn power(&mut self) {
        self.choose_operator(Operator::Power);
    }

    /// Divides the current operand by 100
    pub fn percent(&mut self) {
        self.dismiss_error();
        if let Some(value) = parse_finite(&self.current) {
            self.current = format_number(value / 100.0);
        }
    }

    /// Completes the pending operation
    pub fn evaluate(&mut self) {
        if self.error.is_some() {
            return;
        }
        let (Some(left), Some(op)) = (self.operand, self.operator) else {
            return;
        };

        let right = parse_number(&self.current);
        let result = match op.apply(left, right) {
            Ok(result) => result,
            Err(err) => {
                self.fail(err);
                return;
            }
        };

        let expression = format!(
            "{} {} {}",
            format_number(left),
            op.glyph(),
            format_number(right)
        );
        let result_text = format_number(result);
        debug!(%expression, result = %result_text, "evaluated");

        if let Some(evicted) = self
            .history
            .record(HistoryEntry::new(expression.clone(), result_text.clone()))
        {
            debug!(entry = %evicted, "history entry evicted");
        }

        self.last_expression = Some(expression);
        self.current = result_text;
        self.operand = None;
        self.operator = None;
    }

    // ===== Clearing =====

    /// Resets the current operand and dismisses any error
    pub fn clear(&mut self) {
        self.current = ZERO.to_string();
        self.error = None;
    }

    /// Resets every field, history included
    pub fn all_clear(&mut self) {
        self.current = ZERO.to_string();
        self.operand = None;
        self.operator = None;
        self.error = None;
        self.last_expression = None;
        self.history.clear();
    }

    /// Deletes the last character, or only dismisses a shown error
    pub fn backspace(&mut self) {
        if self.error.take().is_some() {
            return;
        }
        if self.current.chars().count() <= 1 {
            self.current = ZERO.to_string();
        } else {
            self.current.pop();
        }
    }

    /// Takes an owned copy of the state for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current.clone(),
            operand: self.operand,
            operator: self.operator,
            error: self.error.as_ref().map(ToString::to_string),
            error_kind: self.error.as_ref().map(|e| e.kind().to_string()),
            last_expression: self.last_expression.clone(),
            history: self.history.lines(),
        }
    }

    fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, err: CalcError) {
        debug!(error = %err, "operation failed");
        self.error = Some(err);
    }
}
