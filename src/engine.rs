//! The accumulator state machine.
//!
//! Keystroke symbols in, display text out. Binary operations are deferred:
//! the displayed value becomes the right-hand side when the next operator
//! (or equals) arrives, and the rounded result seeds the step after that.
//! Chaining is strictly left-to-right with no precedence: `3 + 4 * 2 =`
//! evaluates as `(3 + 4) * 2 = 14`. Division by zero enters a terminal
//! error state that only clear leaves.
//!
//! Pure state transitions, no I/O. Re-rendering after a keystroke is the
//! caller's side effect, driven by the read-only queries.

use crate::numeral::{canonical, round_result};
use crate::types::{BinaryOp, DisplayValue, Readout, Symbol};

/// Maximum characters the display projection may occupy.
///
/// The cut is textual and applied on read: the underlying buffer keeps full
/// precision for arithmetic.
pub const DISPLAY_WIDTH: usize = 10;

/// Text shown while in the error state.
pub const ERROR_TEXT: &str = "Error";

/// The calculator: one display value plus the deferred-operation registers.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Current display value — a numeral buffer, or the error state.
    value: DisplayValue,
    /// Left-hand side of a deferred binary operation.
    pending_operand: Option<f64>,
    /// The deferred operator awaiting its right-hand side.
    pending_operator: Option<BinaryOp>,
    /// When set, the next digit starts a fresh number instead of appending.
    fresh_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    /// A calculator in its initial state, displaying `0`.
    pub fn new() -> Self {
        Calculator {
            value: DisplayValue::Number("0".to_string()),
            pending_operand: None,
            pending_operator: None,
            fresh_entry: true,
        }
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Feed one keystroke.
    ///
    /// Never fails: every symbol is either applied or deliberately ignored.
    /// In the error state everything except [`Symbol::Clear`] is a no-op.
    pub fn press(&mut self, symbol: Symbol) {
        if self.is_error() {
            if symbol == Symbol::Clear {
                self.reset();
            }
            return;
        }

        match symbol {
            Symbol::Digit(digit) => self.enter_digit(digit),
            Symbol::Point => self.enter_point(),
            Symbol::Op(op) => self.resolve(Some(op)),
            Symbol::Equals => self.resolve(None),
            Symbol::Clear => self.reset(),
            Symbol::ToggleSign => self.toggle_sign(),
            Symbol::Percent => self.percent(),
        }
    }

    /// Restore the initial state. Always legal, including from the error
    /// state; pressing it twice is the same as pressing it once.
    pub fn reset(&mut self) {
        *self = Calculator::new();
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// The display text, truncated to at most [`DISPLAY_WIDTH`] characters.
    ///
    /// The truncation is a character cut, not numeric rounding, and is
    /// applied on every query — the buffer itself is never clipped.
    pub fn display(&self) -> String {
        match &self.value {
            DisplayValue::Number(buffer) => buffer.chars().take(DISPLAY_WIDTH).collect(),
            DisplayValue::Error => ERROR_TEXT.to_string(),
        }
    }

    /// The operator awaiting its right-hand side, if any.
    ///
    /// Read-only; rendering layers use it to highlight the active operator
    /// key.
    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending_operator
    }

    /// True when a division by zero has locked the display.
    pub fn is_error(&self) -> bool {
        matches!(self.value, DisplayValue::Error)
    }

    /// Snapshot of the observable state.
    pub fn readout(&self) -> Readout {
        Readout {
            display: self.display(),
            pending_operator: self.pending_operator.map(BinaryOp::symbol),
            error: self.is_error(),
        }
    }

    // ========================================================================
    // DIGIT ENTRY
    // ========================================================================

    fn enter_digit(&mut self, digit: u8) {
        if digit > 9 {
            return; // outside the alphabet, ignore
        }
        let ch = char::from(b'0' + digit);

        let DisplayValue::Number(buffer) = &mut self.value else {
            return;
        };

        if self.fresh_entry {
            *buffer = ch.to_string();
            self.fresh_entry = false;
        } else if buffer == "0" {
            // no leading-zero accumulation
            *buffer = ch.to_string();
        } else {
            buffer.push(ch);
        }
    }

    fn enter_point(&mut self) {
        let DisplayValue::Number(buffer) = &mut self.value else {
            return;
        };

        if self.fresh_entry {
            *buffer = "0.".to_string();
            self.fresh_entry = false;
        } else if !buffer.contains('.') {
            // at most one decimal point per number; extra presses are no-ops
            buffer.push('.');
        }
    }

    // ========================================================================
    // BINARY-OPERATION RESOLUTION
    // ========================================================================

    /// Resolve the deferred operation, then defer `next` (`None` = equals).
    fn resolve(&mut self, next: Option<BinaryOp>) {
        let DisplayValue::Number(buffer) = &self.value else {
            return;
        };
        // Entry rules keep the buffer a valid numeral; a failed parse is
        // treated as invalid input and ignored.
        let Ok(current) = buffer.parse::<f64>() else {
            return;
        };

        match (self.pending_operand, self.pending_operator) {
            (None, _) => {
                // First operand of a chain — nothing to compute yet.
                self.pending_operand = Some(current);
            }
            (Some(lhs), Some(op)) => {
                if op == BinaryOp::Divide && current == 0.0 {
                    self.value = DisplayValue::Error;
                    self.pending_operand = None;
                    self.pending_operator = None;
                    self.fresh_entry = true;
                    return;
                }
                let result = round_result(apply(op, lhs, current));
                self.value = DisplayValue::Number(canonical(result));
                self.pending_operand = Some(result);
            }
            (Some(_), None) => {
                // Chain closed by a previous equals: the stored result stays
                // the left operand until something replaces it.
            }
        }

        self.fresh_entry = true;
        self.pending_operator = next;
    }

    // ========================================================================
    // UNARY TRANSFORMS
    // ========================================================================

    /// Toggle the sign of the displayed value. No-op on a bare `0`.
    /// Leaves the chain registers and entry mode untouched.
    fn toggle_sign(&mut self) {
        let DisplayValue::Number(buffer) = &self.value else {
            return;
        };
        if buffer == "0" {
            return;
        }
        let Ok(value) = buffer.parse::<f64>() else {
            return;
        };
        self.value = DisplayValue::Number(canonical(-value));
    }

    /// Divide the displayed value by 100. Unconditional — `0` stays `0`.
    /// Leaves the chain registers and entry mode untouched.
    fn percent(&mut self) {
        let DisplayValue::Number(buffer) = &self.value else {
            return;
        };
        let Ok(value) = buffer.parse::<f64>() else {
            return;
        };
        self.value = DisplayValue::Number(canonical(value / 100.0));
    }
}

/// Apply a binary operator.
///
/// Division by zero is intercepted by the caller and never reaches this
/// path.
fn apply(op: BinaryOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => lhs / rhs,
    }
}

// ============================================================================
// TESTS
// ============================================================================
