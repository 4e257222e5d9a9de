//! Tests for unary function dispatch.

use pretty_assertions::assert_eq;
use tally_ir::{AngleMode, UnaryFn};

use crate::errors::ErrorKind;
use crate::unary::evaluate_unary;

const DEG: AngleMode = AngleMode::Deg;
const RAD: AngleMode = AngleMode::Rad;

fn eval(x: f64, func: UnaryFn) -> crate::EvalResult {
    evaluate_unary(x, func, DEG, None)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{actual} is not close to {expected}"
    );
}

#[test]
fn powers_and_roots() {
    assert_eq!(eval(4.0, UnaryFn::Square).unwrap(), 16.0);
    assert_eq!(eval(-3.0, UnaryFn::Cube).unwrap(), -27.0);
    assert_eq!(eval(9.0, UnaryFn::Sqrt).unwrap(), 3.0);
    assert_eq!(eval(-8.0, UnaryFn::Cbrt).unwrap(), -2.0);
}

#[test]
fn sqrt_of_negative_is_a_domain_error() {
    let err = eval(-9.0, UnaryFn::Sqrt).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainError);
}

#[test]
fn reciprocal() {
    assert_eq!(eval(4.0, UnaryFn::Reciprocal).unwrap(), 0.25);
    assert_eq!(
        eval(0.0, UnaryFn::Reciprocal).unwrap_err().kind(),
        ErrorKind::DivisionByZero
    );
}

#[test]
fn abs() {
    assert_eq!(eval(-7.5, UnaryFn::Abs).unwrap(), 7.5);
    assert_eq!(eval(7.5, UnaryFn::Abs).unwrap(), 7.5);
}

#[test]
fn percent_without_a_pending_chain_scales_by_hundred() {
    assert_eq!(eval(50.0, UnaryFn::Percent).unwrap(), 0.5);
}

#[test]
fn percent_is_relative_to_the_accumulator_when_pending() {
    let result = evaluate_unary(10.0, UnaryFn::Percent, DEG, Some(200.0)).unwrap();
    assert_eq!(result, 20.0);
}

#[test]
fn factorial_small_values() {
    assert_eq!(eval(0.0, UnaryFn::Factorial).unwrap(), 1.0);
    assert_eq!(eval(1.0, UnaryFn::Factorial).unwrap(), 1.0);
    assert_eq!(eval(5.0, UnaryFn::Factorial).unwrap(), 120.0);
    assert_eq!(eval(10.0, UnaryFn::Factorial).unwrap(), 3_628_800.0);
}

#[test]
fn factorial_domain_and_overflow_bounds() {
    assert_eq!(
        eval(-1.0, UnaryFn::Factorial).unwrap_err().kind(),
        ErrorKind::DomainError
    );
    assert_eq!(
        eval(2.5, UnaryFn::Factorial).unwrap_err().kind(),
        ErrorKind::DomainError
    );
    assert_eq!(
        eval(171.0, UnaryFn::Factorial).unwrap_err().kind(),
        ErrorKind::Overflow
    );
    let at_bound = eval(170.0, UnaryFn::Factorial).unwrap();
    assert!(at_bound.is_finite());
    assert!(at_bound > 7.25e306);
}

#[test]
fn logarithms_reject_non_positive_arguments() {
    assert_eq!(eval(0.0, UnaryFn::Ln).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(
        eval(-1.0, UnaryFn::Log10).unwrap_err().kind(),
        ErrorKind::DomainError
    );
    assert_close(eval(1000.0, UnaryFn::Log10).unwrap(), 3.0);
    assert_close(eval(1.0, UnaryFn::Ln).unwrap(), 0.0);
}

#[test]
fn exponentials() {
    assert_close(eval(0.0, UnaryFn::Exp).unwrap(), 1.0);
    assert_close(eval(2.0, UnaryFn::Exp10).unwrap(), 100.0);
    assert_close(eval(1.0, UnaryFn::Exp).unwrap(), std::f64::consts::E);
}

#[test]
fn trig_converts_degrees_in() {
    assert_close(eval(30.0, UnaryFn::Sin).unwrap(), 0.5);
    assert_close(eval(60.0, UnaryFn::Cos).unwrap(), 0.5);
    assert_close(eval(45.0, UnaryFn::Tan).unwrap(), 1.0);
}

#[test]
fn trig_in_radians_is_unconverted() {
    let x = std::f64::consts::FRAC_PI_6;
    assert_close(evaluate_unary(x, UnaryFn::Sin, RAD, None).unwrap(), 0.5);
}

#[test]
fn arc_trig_converts_degrees_out() {
    assert_close(eval(1.0, UnaryFn::Asin).unwrap(), 90.0);
    assert_close(eval(0.5, UnaryFn::Acos).unwrap(), 60.0);
    assert_close(eval(1.0, UnaryFn::Atan).unwrap(), 45.0);
}

#[test]
fn arc_sine_rejects_arguments_outside_unit_interval() {
    assert_eq!(eval(2.0, UnaryFn::Asin).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(
        eval(-1.5, UnaryFn::Acos).unwrap_err().kind(),
        ErrorKind::DomainError
    );
    // Atan is total.
    assert!(eval(1e12, UnaryFn::Atan).is_ok());
}
