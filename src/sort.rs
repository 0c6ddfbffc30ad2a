//! Quicksort. [`quicksort`] leaves its input alone and returns a sorted copy while
//! [`quicksort_in_place`] sorts a mutable slice directly.
//!
//! # Examples
//!
//! ```
//! use cs101::sort::{quicksort, quicksort_in_place};
//!
//! let input = [5, 2, 4, 1, 3];
//!
//! // The input is untouched.
//! assert_eq!(quicksort(&input), vec![1, 2, 3, 4, 5]);
//! assert_eq!(input, [5, 2, 4, 1, 3]);
//!
//! let mut input = input;
//! quicksort_in_place(&mut input);
//! assert_eq!(input, [1, 2, 3, 4, 5]);
//! ```
//!
//! The pivot is the median of the first, middle, and last elements so already sorted input
//! doesn't degrade to quadratic time. Partitioning is three way, grouping every element equal to
//! the pivot in the middle, so inputs with many duplicates are fast too. Neither sort is stable.

use std::cmp::Ordering;
use std::mem;

/// Returns a new `Vec` with the elements of `arr` in ascending order.
#[tracing::instrument(level = "trace", skip_all, fields(len = arr.len()))]
pub fn quicksort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut sorted = arr.to_vec();
    sort_slice(&mut sorted);
    sorted
}

/// Sorts `arr` in ascending order in place.
#[tracing::instrument(level = "trace", skip_all, fields(len = arr.len()))]
pub fn quicksort_in_place<T: Ord>(arr: &mut [T]) {
    sort_slice(arr);
}

/// Recurses into the smaller partition and loops on the larger one which keeps the stack depth
/// logarithmic in the length of `arr`.
fn sort_slice<T: Ord>(arr: &mut [T]) {
    let mut arr = arr;
    while arr.len() > 1 {
        let (lt, gt) = partition(arr);
        let (rest, greater) = mem::take(&mut arr).split_at_mut(gt);
        let less = &mut rest[..lt];

        if less.len() < greater.len() {
            sort_slice(less);
            arr = greater;
        } else {
            sort_slice(greater);
            arr = less;
        }
    }
}

/// Partitions `arr` around a pivot and returns `(lt, gt)` such that everything in `arr[..lt]` is
/// less than the pivot, everything in `arr[lt..gt]` equals it, and everything in `arr[gt..]` is
/// greater. `arr` must not be empty.
fn partition<T: Ord>(arr: &mut [T]) -> (usize, usize) {
    let pivot = median_of_three(arr);
    arr.swap(0, pivot);

    // `arr[lt]` is always an element equal to the pivot, which is what we compare against.
    let (mut lt, mut i, mut gt) = (0, 1, arr.len());
    while i < gt {
        match arr[i].cmp(&arr[lt]) {
            Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                gt -= 1;
                arr.swap(i, gt);
            }
        }
    }

    (lt, gt)
}

/// Returns the index of the median of the first, middle, and last elements.
fn median_of_three<T: Ord>(arr: &[T]) -> usize {
    let (first, mid, last) = (0, arr.len() / 2, arr.len() - 1);
    if arr[first] <= arr[mid] {
        if arr[mid] <= arr[last] {
            mid
        } else if arr[first] <= arr[last] {
            last
        } else {
            first
        }
    } else if arr[first] <= arr[last] {
        first
    } else if arr[mid] <= arr[last] {
        last
    } else {
        mid
    }
}
