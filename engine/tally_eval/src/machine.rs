//! Event dispatch and commit-class transitions.
//!
//! `apply` is the engine's whole surface: one event in, state mutated,
//! done. While in the error state every event except `Clear` is a
//! no-op.

use tally_fmt::format_number;
use tally_ir::{BinaryOp, Constant, Key, MemoryOp, UnaryFn};

use crate::errors::ErrorKind;
use crate::operators::evaluate_binary;
use crate::state::Calculator;
use crate::unary::evaluate_unary;

impl Calculator {
    /// Processes one input event.
    pub fn apply(&mut self, key: Key) {
        tracing::trace!(?key, display = %self.display, "apply");
        if self.error.is_some() && key != Key::Clear {
            return;
        }
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Decimal => self.press_decimal(),
            Key::ToggleSign => self.press_toggle_sign(),
            Key::Backspace => self.press_backspace(),
            Key::Clear => *self = Self::new(),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.press_equals(),
            Key::Unary(func) => self.apply_unary(func),
            Key::Constant(c) => self.insert_constant(c),
            Key::Exponent => self.press_exponent(),
            Key::ToggleAngleMode => self.angle_mode = self.angle_mode.toggled(),
            Key::ToggleInverse => self.inverse_active = !self.inverse_active,
            Key::Memory(op) => self.apply_memory(op),
        }
    }

    /// Selects a binary operator.
    ///
    /// Starts a chain when none is pending; substitutes the operator
    /// when one is pending but no new operand has been typed; otherwise
    /// evaluates the pending operation left-to-right and chains the
    /// result.
    fn choose_operator(&mut self, op: BinaryOp) {
        match self.pending_op {
            None => {
                let value = self.current_value();
                self.accumulator = Some(value);
                self.begin_chain(value, op);
            }
            Some(_) if self.overwrite => {
                self.pending_op = Some(op);
                if let Some(acc) = self.accumulator {
                    self.history = format!("{} {}", format_number(acc), op.as_symbol());
                }
            }
            Some(pending) => {
                let lhs = self.accumulator.unwrap_or(0.0);
                let rhs = self.current_value();
                if let Some(result) = self.run_binary(lhs, rhs, pending) {
                    self.display = format_number(result);
                    self.accumulator = Some(result);
                    self.begin_chain(result, op);
                }
            }
        }
    }

    fn begin_chain(&mut self, operand: f64, op: BinaryOp) {
        self.pending_op = Some(op);
        self.history = format!("{} {}", format_number(operand), op.as_symbol());
        self.overwrite = true;
    }

    /// Commits the pending operation, or repeats the last one when
    /// nothing is pending.
    fn press_equals(&mut self) {
        let Some(op) = self.pending_op.take() else {
            self.repeat_last();
            return;
        };
        let lhs = self.accumulator.unwrap_or(0.0);
        let rhs = self.current_value();
        if let Some(result) = self.run_binary(lhs, rhs, op) {
            self.history = format!(
                "{} {} {} =",
                format_number(lhs),
                op.as_symbol(),
                format_number(rhs)
            );
            self.display = format_number(result);
            self.accumulator = Some(result);
            self.last_operand = Some(rhs);
            self.overwrite = true;
        }
    }

    /// `Equals` with no pending operator re-adds the last committed
    /// operand to the displayed value, whatever the original operator
    /// was. A faithful oddity of the contract, kept deliberately.
    fn repeat_last(&mut self) {
        let Some(step) = self.last_operand else {
            return;
        };
        let value = self.current_value();
        if let Some(result) = self.run_binary(value, step, BinaryOp::Add) {
            self.display = format_number(result);
            self.accumulator = Some(result);
            self.overwrite = true;
        }
    }

    /// Applies a unary function to the displayed value. The inverse
    /// toggle rewrites the function at dispatch time; a pending binary
    /// chain is left intact (which is what percent composes with).
    fn apply_unary(&mut self, func: UnaryFn) {
        let func = if self.inverse_active {
            func.inverse()
        } else {
            func
        };
        let x = self.current_value();
        let percent_base = match (self.pending_op, self.accumulator) {
            (Some(_), Some(acc)) => Some(acc),
            _ => None,
        };
        match evaluate_unary(x, func, self.angle_mode, percent_base) {
            Ok(result) => self.commit_value(result),
            Err(err) => self.fail(err.kind()),
        }
    }

    fn insert_constant(&mut self, constant: Constant) {
        self.commit_value(constant.value());
    }

    fn apply_memory(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory = None,
            MemoryOp::Recall => {
                if let Some(value) = self.memory {
                    self.display = format_number(value);
                    self.overwrite = true;
                }
            }
            MemoryOp::Store => self.memory = Some(self.current_value()),
            MemoryOp::Add => {
                self.memory = Some(self.memory.unwrap_or(0.0) + self.current_value());
            }
            MemoryOp::Subtract => {
                self.memory = Some(self.memory.unwrap_or(0.0) - self.current_value());
            }
        }
    }

    /// Runs one binary evaluation, classifying any failure (including a
    /// defensively caught non-finite result from add/sub/mul).
    fn run_binary(&mut self, lhs: f64, rhs: f64, op: BinaryOp) -> Option<f64> {
        match evaluate_binary(lhs, rhs, op) {
            Ok(result) if result.is_finite() => Some(result),
            Ok(_) => {
                self.fail(ErrorKind::Overflow);
                None
            }
            Err(err) => {
                self.fail(err.kind());
                None
            }
        }
    }

    /// Commits a unary/constant result into the display.
    fn commit_value(&mut self, value: f64) {
        if !value.is_finite() {
            self.fail(ErrorKind::Overflow);
            return;
        }
        self.display = format_number(value);
        self.overwrite = true;
    }

    /// Transitions into the error state: display pinned to `"0"`, chain
    /// discarded, everything but `Clear` frozen.
    #[cold]
    pub(crate) fn fail(&mut self, kind: ErrorKind) {
        tracing::debug!(%kind, "entering error state");
        self.error = Some(kind);
        self.reset_display();
        self.accumulator = None;
        self.pending_op = None;
        self.overwrite = true;
        self.history.clear();
    }
}
