//! Tally IR - Input event vocabulary for the Tally calculator engine.
//!
//! This crate defines the closed set of types the engine speaks:
//!
//! - [`Key`]: every discrete input event a host can deliver
//! - [`BinaryOp`] / [`UnaryFn`]: operator and function identifiers with
//!   enum-based dispatch downstream (no string-keyed lookup)
//! - [`AngleMode`]: DEG/RAD unit conversion for trigonometry
//! - [`Constant`] / [`MemoryOp`]: constant insertion and the scalar
//!   memory register operations
//!
//! Pure data, no dependencies. All types are `Copy` and hashable.

mod keys;
mod operators;

pub use keys::{Constant, Key, MemoryOp};
pub use operators::{AngleMode, BinaryOp, UnaryFn};
