//! Merging two sorted sequences into one sorted sequence.
//!
//! The merge is stable: when both inputs hold equal elements, the ones from the first input come
//! first. [`merge_sorted_arrays`] works on slices and allocates the result while
//! [`merge_sorted`] lazily merges any two sorted iterators.
//!
//! # Examples
//!
//! ```
//! use cs101::merge::{merge_sorted, merge_sorted_arrays};
//!
//! assert_eq!(merge_sorted_arrays(&[1, 3, 5], &[2, 4]), vec![1, 2, 3, 4, 5]);
//!
//! let evens = (0..).step_by(2);
//! let odds = (1..).step_by(2);
//! let first: Vec<u32> = merge_sorted(evens, odds).take(5).collect();
//! assert_eq!(first, vec![0, 1, 2, 3, 4]);
//! ```

use std::iter::{FusedIterator, Peekable};

/// Returns the stable sorted merge of two slices that are each sorted ascending.
#[tracing::instrument(level = "trace", skip_all, fields(len1 = arr1.len(), len2 = arr2.len()))]
pub fn merge_sorted_arrays<T: Ord + Clone>(arr1: &[T], arr2: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(arr1.len() + arr2.len());
    let (mut i, mut j) = (0, 0);
    while i < arr1.len() && j < arr2.len() {
        // `<=` keeps equal elements from `arr1` ahead of those from `arr2`.
        if arr1[i] <= arr2[j] {
            merged.push(arr1[i].clone());
            i += 1;
        } else {
            merged.push(arr2[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&arr1[i..]);
    merged.extend_from_slice(&arr2[j..]);

    merged
}

/// Lazily merges two iterators that each yield their items in ascending order.
pub fn merge_sorted<A, B>(a: A, b: B) -> MergeSorted<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    MergeSorted {
        a: a.into_iter().peekable(),
        b: b.into_iter().peekable(),
    }
}

/// The iterator returned by [`merge_sorted`].
pub struct MergeSorted<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    a: Peekable<A>,
    b: Peekable<B>,
}

impl<A, B> Iterator for MergeSorted<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    A::Item: Ord,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        let take_a = match (self.a.peek(), self.b.peek()) {
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if take_a {
            self.a.next()
        } else {
            self.b.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_low, a_high) = self.a.size_hint();
        let (b_low, b_high) = self.b.size_hint();
        let high = match (a_high, b_high) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };

        (a_low.saturating_add(b_low), high)
    }
}

impl<A, B> FusedIterator for MergeSorted<A, B>
where
    A: FusedIterator,
    B: FusedIterator<Item = A::Item>,
    A::Item: Ord,
{
}
