//! Linear-scan truth regime.
//!
//! Naive O(n) reference implementations of the four operations. Only the
//! result encoding is shared with the kernel; the search itself is a plain
//! count of smaller (and not-greater) elements.

use boundsearch_kernel::encoding::{complement, to_signed, EMPTY_SEQUENCE};

use crate::case::{Expectation, Operation};

/// Reference result of `op` on `sequence` for `value`.
#[must_use]
pub fn evaluate(op: Operation, sequence: &[i64], value: i64) -> isize {
    if sequence.is_empty() {
        return EMPTY_SEQUENCE;
    }
    let lower = sequence.iter().take_while(|&&x| x < value).count();
    let upper = sequence.iter().take_while(|&&x| x <= value).count();
    let present = lower < upper;
    match op {
        Operation::LowerBound => to_signed(lower),
        Operation::UpperBound => to_signed(upper),
        Operation::FirstIndex if present => to_signed(lower),
        Operation::LastIndex if present => to_signed(upper - 1),
        Operation::FirstIndex => complement(lower),
        Operation::LastIndex => complement(upper),
    }
}

/// Reference results for every operation.
#[must_use]
pub fn expectation(sequence: &[i64], value: i64) -> Expectation {
    Expectation {
        lower_bound: evaluate(Operation::LowerBound, sequence, value),
        upper_bound: evaluate(Operation::UpperBound, sequence, value),
        first_index: evaluate(Operation::FirstIndex, sequence, value),
        last_index: evaluate(Operation::LastIndex, sequence, value),
    }
}
