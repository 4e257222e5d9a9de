//! Input events.
//!
//! A host translates raw keyboard/pointer input into `Key` values and
//! feeds them to the engine one at a time, in delivery order.

use crate::operators::{BinaryOp, UnaryFn};

/// A single discrete input event.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    /// A digit press, `0..=9`.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// Flip the sign of the entry (mantissa, or exponent once an
    /// exponent marker is present).
    ToggleSign,
    /// Delete the last entered character.
    Backspace,
    /// Full reset; the only exit from the error state.
    Clear,
    /// Select a binary operator.
    Operator(BinaryOp),
    /// Commit the pending operation, or repeat the last one.
    Equals,
    /// Apply a unary scientific function to the displayed value.
    Unary(UnaryFn),
    /// Write a named constant into the display.
    Constant(Constant),
    /// Begin scientific-notation entry (`EE`).
    Exponent,
    /// Flip DEG/RAD.
    ToggleAngleMode,
    /// Flip the inverse-function toggle.
    ToggleInverse,
    /// Operate on the memory register.
    Memory(MemoryOp),
}

/// Named constants insertable into the display.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }
}

/// Operations on the single scalar memory register.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemoryOp {
    /// Empty the register.
    Clear,
    /// Write the register into the display (no-op when empty).
    Recall,
    /// Overwrite the register with the displayed value.
    Store,
    /// Add the displayed value to the register (empty reads as 0).
    Add,
    /// Subtract the displayed value from the register (empty reads as 0).
    Subtract,
}
