//! Errors returned by the fallible algorithms in this crate.

use thiserror::Error;

/// Everything that can go wrong in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// More Fibonacci terms were requested than fit in a `u64`.
    #[error("requested {requested} fibonacci terms but only {max} fit in a u64")]
    FibonacciOverflow {
        /// How many terms the caller asked for.
        requested: usize,
        /// How many terms are representable.
        max: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
