//! Tally Eval - The calculator evaluation state machine.
//!
//! This crate interprets an ordered stream of [`tally_ir::Key`] events
//! into a running computation and exposes the result as a [`ViewModel`].
//!
//! # Architecture
//!
//! - [`Calculator`]: the single mutable state record (display buffer,
//!   accumulator, pending operator, memory register, toggles)
//! - [`evaluate_binary`]: direct enum-based binary operator dispatch
//! - [`evaluate_unary`]: direct enum-based unary function dispatch,
//!   including angle-mode conversion and percent-of-accumulator
//! - [`ErrorKind`]: the closed error taxonomy; entering the error state
//!   freezes everything except `Clear`
//!
//! Strictly synchronous: each event is processed to completion before
//! the next, in delivery order, and no operation panics or suspends.

mod entry;
pub mod errors;
mod machine;
mod operators;
mod state;
mod unary;
mod view;

#[cfg(test)]
mod tests;

pub use errors::{division_by_zero, domain_error, overflow, CalcError, ErrorKind, EvalResult};
pub use operators::evaluate_binary;
pub use state::Calculator;
pub use unary::evaluate_unary;
pub use view::ViewModel;
