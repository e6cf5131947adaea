#![warn(clippy::pedantic)]
#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]
#![allow(
    clippy::excessive_precision,
    clippy::unreadable_literal,
    reason = "we don't really want to read the mathematical constants in this file."
)]

use std::fmt;

mod units;
pub use units::*;

mod physics;
pub use physics::*;

pub mod interp;


/// Returned by the `assert_approx` family when two quantities differ by more than `epsilon`.
#[derive(Debug, thiserror::Error)]
#[error("{actual:?} is not within {epsilon:?} of {expect:?}")]
pub struct AssertApproxError<T: fmt::Debug, E: fmt::Debug> {
    pub actual:  T,
    pub expect:  T,
    pub epsilon: E,
}
