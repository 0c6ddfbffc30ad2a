//! Binary search over a slice sorted in ascending order.
//!
//! # Examples
//!
//! ```
//! use cs101::search::binary_search;
//!
//! let primes = [2, 3, 5, 7, 11, 13];
//!
//! assert_eq!(binary_search(&primes, &7), Some(3));
//! assert_eq!(binary_search(&primes, &4), None);
//! ```

use std::cmp::Ordering;

/// Returns the index of an element equal to `target`, or `None` if there is none.
///
/// `arr` must be sorted ascending. If it contains several elements equal to `target`, any one of
/// their indices may be returned. If it isn't sorted the result is meaningless but this never
/// panics.
#[tracing::instrument(level = "trace", skip_all, fields(len = arr.len()))]
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    // Search the half open range `[low, high)`.
    let (mut low, mut high) = (0, arr.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Less => low = mid + 1,
            Ordering::Equal => return Some(mid),
            Ordering::Greater => high = mid,
        }
    }

    None
}
