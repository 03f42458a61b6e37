//! FILENAME: engine/src/calculator.rs
//! PURPOSE: The calculator state machine driven by button presses.
//! CONTEXT: Maintains two parallel textual buffers (display and equation),
//! accumulates digits and operators, evaluates the equation on demand, and
//! records successful calculations in the history.
//!
//! STATE INVARIANT: display and equation stay in lockstep, except that the
//! display shows "0" as a placeholder while the equation is empty, and shows
//! "Error" after a failed evaluation resets the equation.

use crate::evaluator::evaluate_equation;
use crate::history::{History, HistoryEntry};
use crate::number_format::format_result;

/// Placeholder shown when there is nothing to display.
const EMPTY_DISPLAY: &str = "0";

/// Shown after a failed evaluation.
const ERROR_DISPLAY: &str = "Error";

/// The calculator engine.
///
/// Purely synchronous; every method is total. Evaluation failures are
/// surfaced through the display value, never as a `Result`.
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    equation: String,
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            display: EMPTY_DISPLAY.to_string(),
            equation: String::new(),
            history: History::new(),
        }
    }

    /// The user-visible value: the current expression, a result, "0", or "Error".
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The internal expression buffer fed to evaluation.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Past successful calculations, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Appends a digit or decimal point to both buffers.
    ///
    /// When the display holds the "0" placeholder or "Error", the press
    /// replaces both buffers instead of appending.
    pub fn append_digit(&mut self, d: char) {
        if !(d.is_ascii_digit() || d == '.') {
            log::warn!("ignoring non-digit input: {:?}", d);
            return;
        }

        if self.display == EMPTY_DISPLAY || self.display == ERROR_DISPLAY {
            self.display = d.to_string();
            self.equation = d.to_string();
        } else {
            self.display.push(d);
            self.equation.push(d);
        }
    }

    /// Appends an operator (+ - * /) to both buffers verbatim.
    ///
    /// No-op while the display shows "Error". Consecutive operators are not
    /// validated here; the grammar decides at evaluation time.
    pub fn append_operator(&mut self, op: char) {
        if !matches!(op, '+' | '-' | '*' | '/') {
            log::warn!("ignoring unknown operator: {:?}", op);
            return;
        }

        if self.display != ERROR_DISPLAY {
            self.display.push(op);
            self.equation.push(op);
        }
    }

    /// Removes the last character from both buffers.
    ///
    /// No-op while the display shows "Error". The display falls back to the
    /// "0" placeholder rather than going empty.
    pub fn delete_last(&mut self) {
        if self.display == ERROR_DISPLAY {
            return;
        }

        self.display.pop();
        self.equation.pop();

        if self.display.is_empty() {
            self.display = EMPTY_DISPLAY.to_string();
        }
    }

    /// Resets both buffers. History is untouched.
    pub fn clear(&mut self) {
        self.display = EMPTY_DISPLAY.to_string();
        self.equation.clear();
    }

    /// Evaluates the accumulated equation.
    ///
    /// On success both buffers are set to the formatted result and a history
    /// entry is recorded, so further input keeps calculating from the result.
    /// On failure the display shows "Error", the equation is reset to empty,
    /// and history is unchanged.
    pub fn evaluate(&mut self) {
        match evaluate_equation(&self.equation) {
            Ok(value) => {
                let formatted = format_result(value);
                log::debug!("evaluated {:?} -> {}", self.equation, formatted);

                self.history
                    .push(HistoryEntry::new(self.equation.clone(), formatted.clone()));
                self.display = formatted.clone();
                self.equation = formatted;
            }
            Err(err) => {
                log::warn!("failed to evaluate {:?}: {}", self.equation, err);
                self.display = ERROR_DISPLAY.to_string();
                self.equation.clear();
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
