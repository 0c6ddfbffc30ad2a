//! This crate collects the standard textbook algorithms, mostly for
//! educational purposes.
//!
//! ## Algorithms
//!
//! Every module is independent of the others:
//!
//! 1. [`search`] - binary search over a sorted slice.
//! 2. [`sort`] - quicksort, both copying and in place.
//! 3. [`fibonacci`] - the first `n` terms of the Fibonacci sequence.
//! 4. [`palindrome`] - whether a string reads the same in both directions.
//! 5. [`tree`] - a binary tree and its inorder traversal.
//! 6. [`merge`] - the stable merge of two sorted sequences.
//!
//! > Note that "not found" is always an `Option` rather than a `-1` sentinel.
//!
//! Nothing here allocates more than its output needs and nothing recurses
//! deeper than `O(log n)` except where noted. Deep, list shaped trees are
//! walked and dropped with explicit stacks so they are safe at any size.
//!
//! ```
//! use cs101::{merge::merge_sorted_arrays, search::binary_search, sort::quicksort};
//!
//! let sorted = quicksort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! assert_eq!(binary_search(&sorted, &2), Some(1));
//! assert_eq!(merge_sorted_arrays(&sorted, &[0, 4]), vec![0, 1, 2, 3, 4]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod fibonacci;
pub mod merge;
pub mod palindrome;
pub mod search;
pub mod sort;
pub mod tree;

pub use error::{Error, Result};
