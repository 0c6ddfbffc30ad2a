use cs101::fibonacci::{fibonacci, MAX_TERMS};
use cs101::Error;

use quickcheck_macros::quickcheck;

#[quickcheck]
fn has_requested_length(n: usize) -> bool {
    let n = n % (MAX_TERMS + 1);

    fibonacci(n).map(|terms| terms.len()) == Ok(n)
}

#[quickcheck]
fn is_prefix_of_full_sequence(n: usize) -> bool {
    let n = n % (MAX_TERMS + 1);
    let all = fibonacci(MAX_TERMS).unwrap();

    fibonacci(n).unwrap() == all[..n]
}

#[quickcheck]
fn too_many_terms_is_an_error(extra: usize) -> bool {
    let requested = MAX_TERMS.saturating_add(extra.max(1));

    fibonacci(requested)
        == Err(Error::FibonacciOverflow {
            requested,
            max: MAX_TERMS,
        })
}
