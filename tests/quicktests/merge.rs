use cs101::merge::{merge_sorted, merge_sorted_arrays};

use std::cmp::Ordering;

use quickcheck_macros::quickcheck;

use crate::sorted;

#[quickcheck]
fn merge_is_sorted_permutation(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let (xs, ys) = (sorted(&xs), sorted(&ys));
    let merged = merge_sorted_arrays(&xs, &ys);

    let mut both = xs.clone();
    both.extend_from_slice(&ys);

    merged.len() == xs.len() + ys.len()
        && merged.windows(2).all(|w| w[0] <= w[1])
        && merged == sorted(&both)
}

#[quickcheck]
fn lazy_merge_agrees(xs: Vec<i16>, ys: Vec<i16>) -> bool {
    let (xs, ys) = (sorted(&xs), sorted(&ys));
    let lazy: Vec<i16> = merge_sorted(xs.iter().copied(), ys.iter().copied()).collect();

    lazy == merge_sorted_arrays(&xs, &ys)
}

/// A value tagged with the input it came from. Ordering only looks at the value so elements from
/// different inputs tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sourced {
    value: u8,
    source: u8,
}

impl PartialOrd for Sourced {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sourced {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

fn tag(xs: &[u8], source: u8) -> Vec<Sourced> {
    sorted(xs)
        .into_iter()
        .map(|value| Sourced { value, source })
        .collect()
}

/// Within every run of equal values, everything from the first input comes first.
fn is_stable(merged: &[Sourced]) -> bool {
    merged
        .windows(2)
        .all(|w| w[0].value < w[1].value || w[0].source <= w[1].source)
}

#[quickcheck]
fn merge_is_stable(xs: Vec<u8>, ys: Vec<u8>) -> bool {
    // Small values so ties across the inputs are common.
    let xs: Vec<u8> = xs.into_iter().map(|x| x % 8).collect();
    let ys: Vec<u8> = ys.into_iter().map(|y| y % 8).collect();
    let (xs, ys) = (tag(&xs, 0), tag(&ys, 1));

    let merged = merge_sorted_arrays(&xs, &ys);
    let lazy: Vec<Sourced> = merge_sorted(xs.iter().copied(), ys.iter().copied()).collect();

    is_stable(&merged) && merged.windows(2).all(|w| w[0] <= w[1]) && lazy == merged
}

#[test]
fn merge_prefers_first_input_on_ties() {
    let xs = tag(&[1, 1], 0);
    let ys = tag(&[1], 1);
    let sources: Vec<u8> = merge_sorted_arrays(&ys, &xs)
        .iter()
        .map(|s| s.source)
        .collect();

    assert_eq!(sources, vec![1, 0, 0]);
}
