//! Binary operator implementations.
//!
//! Direct enum-based dispatch. The operator set is fixed, so pattern
//! matching is preferred over trait objects for exhaustiveness checking.

use tally_ir::BinaryOp;

use crate::errors::{division_by_zero, overflow, EvalResult};

/// Evaluate a binary operation.
///
/// Left-to-right chaining semantics live in the state machine; this is
/// the pure arithmetic core. Division reports a zero divisor before
/// dividing; power reports a non-finite result as overflow.
pub fn evaluate_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(a / b)
            }
        }
        BinaryOp::Pow => {
            let result = a.powf(b);
            if result.is_finite() {
                Ok(result)
            } else {
                Err(overflow())
            }
        }
    }
}
