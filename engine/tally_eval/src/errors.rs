//! Error taxonomy for the evaluation engine.
//!
//! Three terminal conditions, each with a fixed user-visible message.
//! Factory functions are the canonical way to construct errors; they
//! are `#[cold]` because every caller sits on a failure path.

use std::fmt;

/// Result of a numeric evaluation step.
pub type EvalResult = Result<f64, CalcError>;

/// Typed error category.
///
/// All three are terminal per session: the engine stays in the error
/// state until a `Clear` event, and never auto-recovers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Division or reciprocal with a zero divisor.
    DivisionByZero,
    /// Invalid argument to sqrt/ln/log/asin/acos/factorial, or a
    /// non-finite tangent.
    DomainError,
    /// Non-finite result from power, or factorial above 170.
    Overflow,
}

impl ErrorKind {
    /// The fixed message shown on the display for this condition.
    pub const fn message(self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by 0",
            Self::DomainError => "Math domain error",
            Self::Overflow => "Overflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An evaluation failure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CalcError {
    kind: ErrorKind,
}

impl CalcError {
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub const fn kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for CalcError {}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> CalcError {
    CalcError::new(ErrorKind::DivisionByZero)
}

/// Invalid-argument error.
#[cold]
pub fn domain_error() -> CalcError {
    CalcError::new(ErrorKind::DomainError)
}

/// Non-finite or out-of-range result error.
#[cold]
pub fn overflow() -> CalcError {
    CalcError::new(ErrorKind::Overflow)
}
