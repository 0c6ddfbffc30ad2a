//! The Fibonacci sequence `0, 1, 1, 2, 3, 5, ...` where every term is the sum of the two before
//! it.
//!
//! Terms are `u64`s, so only the first [`MAX_TERMS`] of them are representable. Asking
//! [`fibonacci`] for more is an error rather than a silently wrapped value, and the [`Fibonacci`]
//! iterator simply ends after the last representable term.
//!
//! # Examples
//!
//! ```
//! use cs101::fibonacci::{fibonacci, Fibonacci, MAX_TERMS};
//!
//! assert_eq!(fibonacci(7), Ok(vec![0, 1, 1, 2, 3, 5, 8]));
//! assert!(fibonacci(MAX_TERMS + 1).is_err());
//!
//! let evens: Vec<u64> = Fibonacci::new().filter(|x| x % 2 == 0).take(4).collect();
//! assert_eq!(evens, vec![0, 2, 8, 34]);
//! ```

use crate::error::{Error, Result};

/// How many terms of the sequence fit in a `u64`. The last one is `F(93)`.
pub const MAX_TERMS: usize = 94;

/// Returns the first `n` terms of the sequence.
///
/// # Errors
///
/// Returns [`Error::FibonacciOverflow`] if `n` is greater than [`MAX_TERMS`].
#[tracing::instrument(level = "trace")]
pub fn fibonacci(n: usize) -> Result<Vec<u64>> {
    if n > MAX_TERMS {
        tracing::debug!(requested = n, max = MAX_TERMS, "fibonacci terms overflow u64");
        return Err(Error::FibonacciOverflow {
            requested: n,
            max: MAX_TERMS,
        });
    }

    Ok(Fibonacci::new().take(n).collect())
}

/// An iterator over the terms of the sequence. It yields exactly [`MAX_TERMS`] items.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Fibonacci {
    /// Starts the sequence at `F(0) = 0`.
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        // `next` becomes `None` once the term after it would overflow.
        let after = self.next.and_then(|next| next.checked_add(current));
        self.current = self.next;
        self.next = after;

        Some(current)
    }
}

impl std::iter::FusedIterator for Fibonacci {}
