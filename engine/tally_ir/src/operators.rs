//! Binary operators, unary functions, and the angle mode.
//!
//! The sets are fixed (not user-extensible), so downstream dispatch is
//! plain pattern matching with compile-time exhaustiveness checking.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Returns the display-level symbol for this operator.
    ///
    /// Used in the history echo and in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "−",
            Self::Mul => "×",
            Self::Div => "÷",
            Self::Pow => "^",
        }
    }
}

/// Unary scientific functions.
///
/// The inverse toggle never appears here: hosts always send the direct
/// key (`Sin`, `Ln`, ...) and the engine rewrites it through
/// [`UnaryFn::inverse`] when the toggle is active.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryFn {
    Square,
    Cube,
    Sqrt,
    Cbrt,
    Reciprocal,
    Abs,
    Percent,
    Factorial,
    Exp,
    Exp10,
    Ln,
    Log10,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl UnaryFn {
    /// Returns the human-readable name used in messages and help text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Sqrt => "√x",
            Self::Cbrt => "∛x",
            Self::Reciprocal => "1/x",
            Self::Abs => "|x|",
            Self::Percent => "%",
            Self::Factorial => "x!",
            Self::Exp => "eˣ",
            Self::Exp10 => "10ˣ",
            Self::Ln => "ln",
            Self::Log10 => "log₁₀",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
        }
    }

    /// Returns the counterpart selected by the inverse toggle.
    ///
    /// Trig pairs with its arc variant, ln/log₁₀ with their exponential
    /// counterparts, square/cube with their roots. Functions without a
    /// paired key (abs, percent, factorial) map to themselves;
    /// reciprocal is its own inverse.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Square => Self::Sqrt,
            Self::Sqrt => Self::Square,
            Self::Cube => Self::Cbrt,
            Self::Cbrt => Self::Cube,
            Self::Ln => Self::Exp,
            Self::Exp => Self::Ln,
            Self::Log10 => Self::Exp10,
            Self::Exp10 => Self::Log10,
            Self::Sin => Self::Asin,
            Self::Asin => Self::Sin,
            Self::Cos => Self::Acos,
            Self::Acos => Self::Cos,
            Self::Tan => Self::Atan,
            Self::Atan => Self::Tan,
            Self::Reciprocal => Self::Reciprocal,
            Self::Abs => Self::Abs,
            Self::Percent => Self::Percent,
            Self::Factorial => Self::Factorial,
        }
    }
}

/// Angle unit governing trigonometric conversion.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
}

impl AngleMode {
    /// Converts a displayed angle into radians for the trig intrinsics.
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            Self::Deg => x.to_radians(),
            Self::Rad => x,
        }
    }

    /// Converts a radian result back into the displayed unit.
    pub fn from_radians(self, x: f64) -> f64 {
        match self {
            Self::Deg => x.to_degrees(),
            Self::Rad => x,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inverse_is_an_involution() {
        let all = [
            UnaryFn::Square,
            UnaryFn::Cube,
            UnaryFn::Sqrt,
            UnaryFn::Cbrt,
            UnaryFn::Reciprocal,
            UnaryFn::Abs,
            UnaryFn::Percent,
            UnaryFn::Factorial,
            UnaryFn::Exp,
            UnaryFn::Exp10,
            UnaryFn::Ln,
            UnaryFn::Log10,
            UnaryFn::Sin,
            UnaryFn::Cos,
            UnaryFn::Tan,
            UnaryFn::Asin,
            UnaryFn::Acos,
            UnaryFn::Atan,
        ];
        for func in all {
            assert_eq!(func.inverse().inverse(), func, "{}", func.name());
        }
    }

    #[test]
    fn angle_conversion_round_trips() {
        let deg = AngleMode::Deg;
        assert!((deg.from_radians(deg.to_radians(90.0)) - 90.0).abs() < 1e-12);
        assert!((AngleMode::Rad.to_radians(1.5) - 1.5).abs() < f64::EPSILON);
    }
}
