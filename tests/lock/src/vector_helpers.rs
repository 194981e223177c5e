//! Loading the committed boundary vectors and evaluating a query through
//! every adapter at once.

use std::collections::VecDeque;

use boundsearch_adapters::{array, keyed, list};
use boundsearch_harness::case::{parse_vectors, SearchCase};
use boundsearch_harness::policy::SuitePolicy;

/// The committed boundary vector file.
pub const BOUNDARY_VECTORS: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/boundary_vectors.json"
);

/// Parse [`BOUNDARY_VECTORS`].
///
/// # Panics
///
/// Panics if the fixture is missing or malformed. Test-only invariant.
#[must_use]
pub fn boundary_cases() -> Vec<SearchCase> {
    let bytes = std::fs::read(BOUNDARY_VECTORS).unwrap();
    parse_vectors(&bytes).unwrap()
}

/// Default policy with generation switched off, so a run covers exactly
/// the cases it is given.
#[must_use]
pub fn vectors_only_policy() -> SuitePolicy {
    SuitePolicy {
        generated_cases: 0,
        ..SuitePolicy::default()
    }
}

/// `[lower_bound, upper_bound, first_index, last_index]` from one adapter.
pub type Answers = [isize; 4];

/// Answers from the array adapter, the list adapter over a `Vec`, and the
/// list adapter over a `VecDeque` whose head wraps around its buffer.
#[must_use]
pub fn sequence_adapter_answers(sequence: &[i64], value: i64) -> [Answers; 3] {
    let vec = sequence.to_vec();
    let split = sequence.len() / 2;
    let mut deque: VecDeque<i64> = sequence[split..].iter().copied().collect();
    for &x in sequence[..split].iter().rev() {
        deque.push_front(x);
    }

    [
        [
            array::lower_bound(sequence, &value),
            array::upper_bound(sequence, &value),
            array::first_index(sequence, &value),
            array::last_index(sequence, &value),
        ],
        [
            list::lower_bound(&vec, &value),
            list::upper_bound(&vec, &value),
            list::first_index(&vec, &value),
            list::last_index(&vec, &value),
        ],
        [
            list::lower_bound(&deque, &value),
            list::upper_bound(&deque, &value),
            list::first_index(&deque, &value),
            list::last_index(&deque, &value),
        ],
    ]
}

/// `(lower_bound, upper_bound)` from the keyed adapter over `(key, index)`
/// pairs built from a strictly increasing `keys`.
#[must_use]
pub fn keyed_bounds(keys: &[i64], value: i64) -> (isize, isize) {
    let table: Vec<(i64, usize)> = keys.iter().copied().zip(0..).collect();
    (
        keyed::lower_bound(&table, &value),
        keyed::upper_bound(&table, &value),
    )
}
