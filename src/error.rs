// SPDX-License-Identifier: MPL-2.0

//! Handling algebra errors.

use thiserror::Error;

/// Errors that may occur while combining bounds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgebraError {
    /// [and](crate::and::and) was given an empty list of bounds.
    #[error("no endless given")]
    NoEndlessGiven,

    /// The bounds can never be satisfied at the same time,
    /// e.g. `>=3` and `<2`, or `>2` and `<=2`.
    #[error("impossible interval")]
    ImpossibleInterval,

    /// An internal invariant of [and](crate::and::and) was broken.
    /// This is a bug in this crate, not in the caller's input.
    #[error("unexpected and logic")]
    UnexpectedAndLogic,
}
