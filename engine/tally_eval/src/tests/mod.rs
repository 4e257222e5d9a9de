//! Test modules for the evaluation engine.
//!
//! Scenario tests drive a `Calculator` through key sequences the way a
//! host would; the operator/unary modules test the pure dispatch
//! functions directly.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(clippy::float_cmp, reason = "Expected values are exact in f64")]

mod operators_tests;
mod unary_tests;

use tally_ir::Key;

use crate::Calculator;

/// Types a numeral digit-by-digit the way a host would.
pub(crate) fn type_number(calc: &mut Calculator, text: &str) {
    for ch in text.chars() {
        match ch {
            '.' => calc.apply(Key::Decimal),
            '-' => calc.apply(Key::ToggleSign),
            digit => {
                let d = u8::try_from(digit.to_digit(10).unwrap_or_else(|| {
                    panic!("not a digit: {digit}")
                }))
                .unwrap();
                calc.apply(Key::Digit(d));
            }
        }
    }
}

pub(crate) fn press_all(calc: &mut Calculator, keys: &[Key]) {
    for &key in keys {
        calc.apply(key);
    }
}
