//! Search property lock tests.
//!
//! Proves, for arbitrary sorted sequences and queries, through every
//! adapter:
//! 1. `lower_bound == upper_bound` iff the value is absent
//! 2. On a hit, `upper_bound - lower_bound` is the number of occurrences
//! 3. `first_index >= 0` iff present, and then equals `lower_bound`
//! 4. On a miss, `!first_index == lower_bound` and `!last_index == upper_bound`
//! 5. Every answer is reproduced by a repeated call
//! 6. Every adapter answers identically
//! 7. Properties 1-4 also hold under a supplied comparator

use std::collections::VecDeque;

use boundsearch_adapters::{array, list};
use boundsearch_kernel::order::{NaturalOrder, Reversed};
use lock_tests::vector_helpers::{keyed_bounds, sequence_adapter_answers, Answers};
use proptest::prelude::*;

fn sorted(mut v: Vec<i64>) -> Vec<i64> {
    v.sort_unstable();
    v
}

fn count_of(seq: &[i64], value: i64) -> isize {
    isize::try_from(seq.iter().filter(|&&x| x == value).count()).unwrap()
}

/// Answers from the array and deque adapters for a descending `seq`
/// searched under `Reversed(NaturalOrder)`.
fn descending_answers(seq: &[i64], value: i64) -> [Answers; 2] {
    let order = Reversed(NaturalOrder);
    let deque: VecDeque<i64> = seq.iter().copied().collect();
    [
        [
            array::lower_bound_by(seq, &value, &order),
            array::upper_bound_by(seq, &value, &order),
            array::first_index_by(seq, &value, &order),
            array::last_index_by(seq, &value, &order),
        ],
        [
            list::lower_bound_by(&deque, &value, &order),
            list::upper_bound_by(&deque, &value, &order),
            list::first_index_by(&deque, &value, &order),
            list::last_index_by(&deque, &value, &order),
        ],
    ]
}

proptest! {
    // -----------------------------------------------------------------------
    // 1 + 2. Bounds bracket exactly the run of equal elements
    // -----------------------------------------------------------------------

    /// ACCEPTANCE: PROP-001-BOUNDS
    #[test]
    fn bounds_bracket_equal_run(
        ref v in prop::collection::vec(-20i64..20, 1..80),
        value in -24i64..24,
    ) {
        let seq = sorted(v.clone());
        let count = count_of(&seq, value);
        for [lower, upper, _, _] in sequence_adapter_answers(&seq, value) {
            prop_assert_eq!(lower == upper, count == 0);
            prop_assert_eq!(upper - lower, count);
        }
    }

    // -----------------------------------------------------------------------
    // 3 + 4. Occurrence search agrees with the bounds
    // -----------------------------------------------------------------------

    /// ACCEPTANCE: PROP-002-OCCURRENCE
    #[test]
    fn occurrence_agrees_with_bounds(
        ref v in prop::collection::vec(-20i64..20, 1..80),
        value in -24i64..24,
    ) {
        let seq = sorted(v.clone());
        let present = seq.contains(&value);
        for [lower, upper, first, last] in sequence_adapter_answers(&seq, value) {
            prop_assert_eq!(first >= 0, present);
            prop_assert_eq!(last >= 0, present);
            if present {
                prop_assert_eq!(first, lower);
                prop_assert_eq!(last, upper - 1);
                let (f, l) = (first.unsigned_abs(), last.unsigned_abs());
                prop_assert_eq!(seq[f], value);
                prop_assert_eq!(seq[l], value);
            } else {
                prop_assert_eq!(!first, lower);
                prop_assert_eq!(!last, upper);
            }
        }
    }

    // -----------------------------------------------------------------------
    // 5. Purity
    // -----------------------------------------------------------------------

    /// ACCEPTANCE: PROP-003-PURITY
    #[test]
    fn repeated_calls_agree(
        ref v in prop::collection::vec(-8i64..8, 0..40),
        value in -10i64..10,
    ) {
        let seq = sorted(v.clone());
        prop_assert_eq!(
            sequence_adapter_answers(&seq, value),
            sequence_adapter_answers(&seq, value)
        );
    }

    // -----------------------------------------------------------------------
    // 6. Adapter parity
    // -----------------------------------------------------------------------

    /// ACCEPTANCE: PROP-004-PARITY
    #[test]
    fn sequence_adapters_agree(
        ref v in prop::collection::vec(-20i64..20, 0..80),
        value in -24i64..24,
    ) {
        let seq = sorted(v.clone());
        let [array, vec, deque] = sequence_adapter_answers(&seq, value);
        prop_assert_eq!(array, vec);
        prop_assert_eq!(array, deque);
    }

    /// ACCEPTANCE: PROP-004-PARITY
    #[test]
    fn keyed_adapter_agrees_on_unique_keys(
        ref keys in prop::collection::btree_set(-50i64..50, 0..40),
        value in -55i64..55,
    ) {
        let keys: Vec<i64> = keys.iter().copied().collect();
        let [array, _, _] = sequence_adapter_answers(&keys, value);
        prop_assert_eq!(keyed_bounds(&keys, value), (array[0], array[1]));
    }

    // -----------------------------------------------------------------------
    // 7. Supplied comparator
    // -----------------------------------------------------------------------

    /// ACCEPTANCE: PROP-006-COMPARATOR
    #[test]
    fn reversed_order_on_descending_sequence(
        ref v in prop::collection::vec(-20i64..20, 1..80),
        value in -24i64..24,
    ) {
        let mut seq = v.clone();
        seq.sort_unstable_by(|a, b| b.cmp(a));
        let count = count_of(&seq, value);
        let greater = isize::try_from(seq.iter().filter(|&&x| x > value).count()).unwrap();
        let present = count > 0;
        for [lower, upper, first, last] in descending_answers(&seq, value) {
            prop_assert_eq!(lower, greater);
            prop_assert_eq!(upper - lower, count);
            prop_assert_eq!(first >= 0, present);
            prop_assert_eq!(last >= 0, present);
            if present {
                prop_assert_eq!(first, lower);
                prop_assert_eq!(last, upper - 1);
                prop_assert_eq!(seq[first.unsigned_abs()], value);
                prop_assert_eq!(seq[last.unsigned_abs()], value);
            } else {
                prop_assert_eq!(!first, lower);
                prop_assert_eq!(!last, upper);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Empty input
// ---------------------------------------------------------------------------

/// ACCEPTANCE: PROP-005-EMPTY
#[test]
fn empty_sequence_is_minus_one_everywhere() {
    for value in [i64::MIN, -1, 0, 1, i64::MAX] {
        for answers in sequence_adapter_answers(&[], value) {
            assert_eq!(answers, [-1; 4], "value {value}");
        }
        assert_eq!(keyed_bounds(&[], value), (-1, -1));
        assert_eq!(descending_answers(&[], value), [[-1; 4]; 2]);
    }
}
