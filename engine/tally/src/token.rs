//! The input handler: key tokens to engine events.
//!
//! Tokens are whitespace-separated. A numeral token (`203.5`, `-7`)
//! expands into the digit-by-digit events a keypad would deliver, so
//! the engine's entry semantics (leading-zero replacement, length cap,
//! single decimal point) apply exactly as they would interactively.

use thiserror::Error;

use tally_ir::{BinaryOp, Constant, Key, MemoryOp, UnaryFn};

/// A token that maps to no known key.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized key token: `{0}`")]
pub struct UnknownToken(pub String);

/// Translates one whitespace-separated line into engine events.
pub fn parse_line(line: &str) -> Result<Vec<Key>, UnknownToken> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        parse_token(token, &mut keys)?;
    }
    Ok(keys)
}

/// Translates a single token, appending its events to `keys`.
pub fn parse_token(token: &str, keys: &mut Vec<Key>) -> Result<(), UnknownToken> {
    if let Some(key) = simple_key(token) {
        keys.push(key);
        return Ok(());
    }
    if is_numeral(token) {
        push_numeral(token, keys);
        return Ok(());
    }
    Err(UnknownToken(token.to_string()))
}

fn simple_key(token: &str) -> Option<Key> {
    Some(match token {
        "+" | "plus" => Key::Operator(BinaryOp::Add),
        "-" | "−" | "minus" => Key::Operator(BinaryOp::Sub),
        "*" | "×" | "x" => Key::Operator(BinaryOp::Mul),
        "/" | "÷" => Key::Operator(BinaryOp::Div),
        "^" | "pow" => Key::Operator(BinaryOp::Pow),
        "=" => Key::Equals,
        "." => Key::Decimal,
        "neg" | "+/-" => Key::ToggleSign,
        "back" => Key::Backspace,
        "c" | "ac" | "clear" => Key::Clear,
        "ee" => Key::Exponent,
        "drg" => Key::ToggleAngleMode,
        "inv" => Key::ToggleInverse,
        "pi" | "π" => Key::Constant(Constant::Pi),
        "e" => Key::Constant(Constant::E),
        "mc" => Key::Memory(MemoryOp::Clear),
        "mr" => Key::Memory(MemoryOp::Recall),
        "ms" => Key::Memory(MemoryOp::Store),
        "m+" => Key::Memory(MemoryOp::Add),
        "m-" => Key::Memory(MemoryOp::Subtract),
        "sqr" | "x^2" => Key::Unary(UnaryFn::Square),
        "cube" | "x^3" => Key::Unary(UnaryFn::Cube),
        "sqrt" => Key::Unary(UnaryFn::Sqrt),
        "cbrt" => Key::Unary(UnaryFn::Cbrt),
        "recip" | "1/x" => Key::Unary(UnaryFn::Reciprocal),
        "abs" => Key::Unary(UnaryFn::Abs),
        "%" | "pct" => Key::Unary(UnaryFn::Percent),
        "!" | "fact" => Key::Unary(UnaryFn::Factorial),
        "exp" | "e^x" => Key::Unary(UnaryFn::Exp),
        "exp10" | "10^x" => Key::Unary(UnaryFn::Exp10),
        "ln" => Key::Unary(UnaryFn::Ln),
        "log" | "log10" => Key::Unary(UnaryFn::Log10),
        "sin" => Key::Unary(UnaryFn::Sin),
        "cos" => Key::Unary(UnaryFn::Cos),
        "tan" => Key::Unary(UnaryFn::Tan),
        "asin" => Key::Unary(UnaryFn::Asin),
        "acos" => Key::Unary(UnaryFn::Acos),
        "atan" => Key::Unary(UnaryFn::Atan),
        _ => return None,
    })
}

/// Digits with at most one point, optionally sign-prefixed. A bare `-`
/// is an operator, never a numeral.
fn is_numeral(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    !body.is_empty()
        && body.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && body.chars().filter(|&ch| ch == '.').count() <= 1
}

fn push_numeral(token: &str, keys: &mut Vec<Key>) {
    let negative = token.starts_with('-');
    let body = token.strip_prefix('-').unwrap_or(token);
    for ch in body.chars() {
        if ch == '.' {
            keys.push(Key::Decimal);
        } else if let Some(d) = ch.to_digit(10) {
            // `to_digit(10)` on an ASCII digit is always `0..=9`.
            keys.push(Key::Digit(d as u8));
        }
    }
    if negative {
        keys.push(Key::ToggleSign);
    }
}
