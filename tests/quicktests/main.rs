//! Property tests exercising the public API the way a downstream crate would.

mod fibonacci;
mod merge;
mod search;

/// Returns a sorted copy of `xs` using the standard library as the reference sort.
pub fn sorted<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
    let mut sorted = xs.to_vec();
    sorted.sort();
    sorted
}
