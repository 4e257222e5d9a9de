//! The calculator state record.
//!
//! One instance per session, owned by the host, mutated only through
//! [`Calculator::apply`]. Field invariants:
//!
//! - `display` holds at most one decimal point and starts with `-` only
//!   when the value is negative
//! - `error.is_some()` pins `display` to `"0"`; only `Clear` leaves it
//! - `pending_op.is_some()` implies `accumulator.is_some()`
//! - `overwrite` is set by every commit-class transition and cleared
//!   exactly when the next digit/decimal is consumed

use tally_fmt::parse_display;
use tally_ir::{AngleMode, BinaryOp};

use crate::errors::ErrorKind;

/// The evaluation state machine.
#[derive(Clone, Debug)]
pub struct Calculator {
    pub(crate) display: String,
    pub(crate) accumulator: Option<f64>,
    pub(crate) pending_op: Option<BinaryOp>,
    pub(crate) last_operand: Option<f64>,
    pub(crate) overwrite: bool,
    pub(crate) error: Option<ErrorKind>,
    pub(crate) angle_mode: AngleMode,
    pub(crate) inverse_active: bool,
    pub(crate) memory: Option<f64>,
    pub(crate) history: String,
}

impl Calculator {
    /// A fresh session: display `"0"`, everything else at its identity
    /// default.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending_op: None,
            last_operand: None,
            overwrite: false,
            error: None,
            angle_mode: AngleMode::Deg,
            inverse_active: false,
            memory: None,
            history: String::new(),
        }
    }

    /// The raw display buffer (the error message is a view-model
    /// concern; while in error this is pinned to `"0"`).
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn inverse_active(&self) -> bool {
        self.inverse_active
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    /// Numeric reading of the display buffer.
    pub(crate) fn current_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Length of the display numeral, sign excluded.
    pub(crate) fn significant_len(&self) -> usize {
        self.display.strip_prefix('-').unwrap_or(&self.display).len()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
