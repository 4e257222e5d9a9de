//! Unary function implementations.
//!
//! Direct enum-based dispatch over the closed [`UnaryFn`] set. Angle
//! conversion happens here (arguments in for sin/cos/tan, results out
//! for the arc variants), so the state machine never thinks in radians.

use tally_ir::{AngleMode, UnaryFn};

use crate::errors::{division_by_zero, domain_error, overflow, EvalResult};

/// Factorial domain upper bound; 171! is not representable in `f64`.
pub const FACTORIAL_MAX: f64 = 170.0;

/// Evaluate a unary function on the displayed value.
///
/// `percent_base` carries the accumulator when a binary chain is
/// pending: percent is then relative to that operand (`200 + 10 %`
/// reads as `200 + 20`), and plain `x/100` otherwise.
pub fn evaluate_unary(
    x: f64,
    func: UnaryFn,
    angle: AngleMode,
    percent_base: Option<f64>,
) -> EvalResult {
    match func {
        UnaryFn::Square => Ok(x * x),
        UnaryFn::Cube => Ok(x * x * x),
        UnaryFn::Sqrt => {
            if x < 0.0 {
                Err(domain_error())
            } else {
                Ok(x.sqrt())
            }
        }
        UnaryFn::Cbrt => Ok(x.cbrt()),
        UnaryFn::Reciprocal => {
            if x == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(1.0 / x)
            }
        }
        UnaryFn::Abs => Ok(x.abs()),
        UnaryFn::Percent => Ok(match percent_base {
            Some(base) => base * (x / 100.0),
            None => x / 100.0,
        }),
        UnaryFn::Factorial => factorial(x),
        UnaryFn::Exp => Ok(x.exp()),
        UnaryFn::Exp10 => Ok(10.0_f64.powf(x)),
        UnaryFn::Ln => {
            if x <= 0.0 {
                Err(domain_error())
            } else {
                Ok(x.ln())
            }
        }
        UnaryFn::Log10 => {
            if x <= 0.0 {
                Err(domain_error())
            } else {
                Ok(x.log10())
            }
        }
        UnaryFn::Sin => Ok(angle.to_radians(x).sin()),
        UnaryFn::Cos => Ok(angle.to_radians(x).cos()),
        UnaryFn::Tan => {
            let result = angle.to_radians(x).tan();
            if result.is_finite() {
                Ok(result)
            } else {
                Err(domain_error())
            }
        }
        UnaryFn::Asin => arc(x, angle, f64::asin),
        UnaryFn::Acos => arc(x, angle, f64::acos),
        UnaryFn::Atan => Ok(angle.from_radians(x.atan())),
    }
}

/// Inverse sine/cosine with the shared [-1, 1] domain check.
fn arc(x: f64, angle: AngleMode, f: fn(f64) -> f64) -> EvalResult {
    if (-1.0..=1.0).contains(&x) {
        Ok(angle.from_radians(f(x)))
    } else {
        Err(domain_error())
    }
}

/// Integer factorial in `f64`, domain-checked to `[0, 170]`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "x is checked to be an integer in [0, 170] before the cast"
)]
fn factorial(x: f64) -> EvalResult {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(domain_error());
    }
    if x > FACTORIAL_MAX {
        return Err(overflow());
    }
    let n = x as u32;
    let mut product = 1.0_f64;
    for k in 2..=n {
        product *= f64::from(k);
    }
    Ok(product)
}
