//! Tests for binary operator dispatch.

use pretty_assertions::assert_eq;
use tally_ir::BinaryOp;

use crate::errors::ErrorKind;
use crate::operators::evaluate_binary;

#[test]
fn arithmetic() {
    assert_eq!(evaluate_binary(2.0, 3.0, BinaryOp::Add).unwrap(), 5.0);
    assert_eq!(evaluate_binary(5.0, 3.0, BinaryOp::Sub).unwrap(), 2.0);
    assert_eq!(evaluate_binary(2.0, 3.0, BinaryOp::Mul).unwrap(), 6.0);
    assert_eq!(evaluate_binary(7.0, 2.0, BinaryOp::Div).unwrap(), 3.5);
    assert_eq!(evaluate_binary(2.0, 10.0, BinaryOp::Pow).unwrap(), 1024.0);
}

#[test]
fn division_by_zero() {
    let err = evaluate_binary(1.0, 0.0, BinaryOp::Div).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    // Negative zero is still zero.
    assert!(evaluate_binary(1.0, -0.0, BinaryOp::Div).is_err());
}

#[test]
fn power_overflow_is_classified() {
    let err = evaluate_binary(1e200, 2.0, BinaryOp::Pow).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    // A NaN power (negative base, fractional exponent) is non-finite
    // and classifies the same way.
    assert_eq!(
        evaluate_binary(-8.0, 0.5, BinaryOp::Pow).unwrap_err().kind(),
        ErrorKind::Overflow
    );
}

#[test]
fn power_handles_negative_exponents() {
    assert_eq!(evaluate_binary(2.0, -2.0, BinaryOp::Pow).unwrap(), 0.25);
}
