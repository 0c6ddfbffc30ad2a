use cs101::search::binary_search;
use cs101::sort::quicksort;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::sorted;

#[quickcheck]
fn finds_every_element(xs: Vec<i8>) -> bool {
    let xs = sorted(&xs);

    xs.iter()
        .all(|x| binary_search(&xs, x).map(|i| &xs[i]) == Some(x))
}

#[quickcheck]
fn misses_every_absent_value(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let xs = sorted(&xs);
    let added: HashSet<_> = xs.iter().copied().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| binary_search(&xs, x).is_none())
}

#[quickcheck]
fn searches_quicksort_output(xs: Vec<u16>, target: u16) -> bool {
    let xs = quicksort(&xs);

    binary_search(&xs, &target).is_some() == xs.contains(&target)
}
