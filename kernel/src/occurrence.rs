//! First- and last-occurrence search.
//!
//! A hit returns the index of the leftmost (or rightmost) element equal to
//! the query. A miss returns `!insertion`, where `insertion` is the lower
//! bound for [`first_index`] and the upper bound for [`last_index`]; on a
//! miss both are the same position. An empty sequence returns `-1`.

use std::cmp::Ordering;

use crate::bound::{left_boundary, right_boundary};
use crate::encoding::{complement, to_signed, EMPTY_SEQUENCE};
use crate::order::{Comparator, NaturalOrder};
use crate::probe::{NoProbe, SearchProbe};
use crate::sequence::IndexedSequence;

/// Index of the leftmost element equal to `value`, or `!lower_bound` when
/// absent.
///
/// The sequence must be sorted ascending; this is not checked.
///
/// ```
/// use boundsearch_kernel::occurrence::first_index;
///
/// let seq = [1, 3, 3, 3, 7];
/// assert_eq!(first_index(&seq, &3), 1);
/// assert_eq!(first_index(&seq, &5), !4);
/// assert_eq!(first_index(&seq, &0), -1);
/// ```
#[must_use]
pub fn first_index<S>(seq: &S, value: &S::Item) -> isize
where
    S: IndexedSequence + ?Sized,
    S::Item: Ord,
{
    first_index_with(seq, value, &NaturalOrder, &mut NoProbe)
}

/// [`first_index`] under a caller-supplied order.
#[must_use]
pub fn first_index_by<S, C>(seq: &S, value: &S::Item, comparator: &C) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    first_index_with(seq, value, comparator, &mut NoProbe)
}

/// [`first_index_by`] reporting every loop iteration to `probe`.
#[must_use]
pub fn first_index_with<S, C, P>(
    seq: &S,
    value: &S::Item,
    comparator: &C,
    probe: &mut P,
) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    P: SearchProbe + ?Sized,
{
    if seq.is_empty() {
        return EMPTY_SEQUENCE;
    }
    let boundary = left_boundary(seq, value, comparator, probe);
    match boundary.adjacent {
        Some(Ordering::Equal) => to_signed(boundary.index),
        _ => complement(boundary.index),
    }
}

/// Index of the rightmost element equal to `value`, or `!upper_bound` when
/// absent.
///
/// The sequence must be sorted ascending; this is not checked.
///
/// ```
/// use boundsearch_kernel::occurrence::last_index;
///
/// let seq = [1, 3, 3, 3, 7];
/// assert_eq!(last_index(&seq, &3), 3);
/// assert_eq!(last_index(&seq, &9), !5);
/// ```
#[must_use]
pub fn last_index<S>(seq: &S, value: &S::Item) -> isize
where
    S: IndexedSequence + ?Sized,
    S::Item: Ord,
{
    last_index_with(seq, value, &NaturalOrder, &mut NoProbe)
}

/// [`last_index`] under a caller-supplied order.
#[must_use]
pub fn last_index_by<S, C>(seq: &S, value: &S::Item, comparator: &C) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    last_index_with(seq, value, comparator, &mut NoProbe)
}

/// [`last_index_by`] reporting every loop iteration to `probe`.
#[must_use]
pub fn last_index_with<S, C, P>(
    seq: &S,
    value: &S::Item,
    comparator: &C,
    probe: &mut P,
) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    P: SearchProbe + ?Sized,
{
    if seq.is_empty() {
        return EMPTY_SEQUENCE;
    }
    let boundary = right_boundary(seq, value, comparator, probe);
    match boundary.adjacent {
        // `adjacent` is only set when the boundary follows an element.
        Some(Ordering::Equal) => to_signed(boundary.index - 1),
        _ => complement(boundary.index),
    }
}
