//! Lower and upper bound.
//!
//! Both searches narrow a half-open window `[start, end)` and stop as soon
//! as the midpoint is provably the boundary, so a hit on a long run of
//! equal elements exits early instead of always running to `log2(n)`.
//!
//! The two boundary walks below are shared with [`crate::occurrence`]: an
//! occurrence search is a bound search that also looks at how the element
//! next to the boundary compares against the query.

use std::cmp::Ordering;

use crate::encoding::{to_signed, EMPTY_SEQUENCE};
use crate::order::{Comparator, NaturalOrder};
use crate::probe::{NoProbe, SearchProbe};
use crate::sequence::IndexedSequence;

/// Where a boundary walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Boundary {
    /// Boundary position in `[0, n]`.
    pub index: usize,
    /// Comparison of the element adjacent to the boundary against the
    /// query, when the walk confirmed the boundary on an element.
    ///
    /// For the left boundary this is `seq[index]`; for the right boundary
    /// it is `seq[index - 1]`. `None` when the walk fell off an end.
    pub adjacent: Option<Ordering>,
}

/// First position whose element is not less than `value`.
pub(crate) fn left_boundary<S, C, P>(
    seq: &S,
    value: &S::Item,
    comparator: &C,
    probe: &mut P,
) -> Boundary
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    P: SearchProbe + ?Sized,
{
    let mut start = 0;
    let mut end = seq.len();

    while start < end {
        let mid = start + (end - start) / 2;
        let ordering = comparator.compare(seq.at(mid), value);
        probe.on_probe(mid, ordering);

        if ordering == Ordering::Less {
            start = mid + 1;
        } else if mid == 0 || comparator.compare(seq.at(mid - 1), value) == Ordering::Less {
            return Boundary {
                index: mid,
                adjacent: Some(ordering),
            };
        } else {
            end = mid;
        }
    }

    // Only reachable when every element is less than `value` (start == n).
    Boundary {
        index: start,
        adjacent: None,
    }
}

/// One past the last position whose element is not greater than `value`.
pub(crate) fn right_boundary<S, C, P>(
    seq: &S,
    value: &S::Item,
    comparator: &C,
    probe: &mut P,
) -> Boundary
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
    P: SearchProbe + ?Sized,
{
    let n = seq.len();
    let mut start = 0;
    let mut end = n;

    while start < end {
        let mid = start + (end - start) / 2;
        let ordering = comparator.compare(seq.at(mid), value);
        probe.on_probe(mid, ordering);

        if ordering == Ordering::Greater {
            end = mid;
        } else if mid + 1 == n || comparator.compare(seq.at(mid + 1), value) == Ordering::Greater {
            return Boundary {
                index: mid + 1,
                adjacent: Some(ordering),
            };
        } else {
            start = mid + 1;
        }
    }

    // Only reachable when every element is greater than `value` (start == 0).
    Boundary {
        index: start,
        adjacent: None,
    }
}

/// Index of the first element `>= value`, using the element type's order.
///
/// Returns `0` when `value` is at or below the first element, `n` when it is
/// above every element, and `-1` for an empty sequence.
///
/// The sequence must be sorted ascending; this is not checked.
///
/// ```
/// use boundsearch_kernel::bound::lower_bound;
///
/// let seq = [1, 3, 3, 3, 7];
/// assert_eq!(lower_bound(&seq, &3), 1);
/// assert_eq!(lower_bound(&seq, &8), 5);
/// assert_eq!(lower_bound(&[] as &[i32], &8), -1);
/// ```
#[must_use]
pub fn lower_bound<S>(seq: &S, value: &S::Item) -> isize
where
    S: IndexedSequence + ?Sized,
    S::Item: Ord,
{
    lower_bound_with(seq, value, &NaturalOrder, &mut NoProbe)
}

/// [`lower_bound`] under a caller-supplied order.
#[must_use]
pub fn lower_bound_by<S, C>(seq: &S, value: &S::Item, comparator: &C) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    lower_bound_with(seq, value, comparator, &mut NoProbe)
}

/// [`lower_bound_by`] reporting every loop iteration to `probe`.
#[must_use]
pub fn lower_bound_with<S, C, P>(
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
    to_signed(left_boundary(seq, value, comparator, probe).index)
}

/// Index of the first element `> value`, using the element type's order.
///
/// Returns `0` when `value` is below the first element, `n` when it is at or
/// above the last element, and `-1` for an empty sequence.
///
/// The sequence must be sorted ascending; this is not checked.
///
/// ```
/// use boundsearch_kernel::bound::upper_bound;
///
/// let seq = [1, 3, 3, 3, 7];
/// assert_eq!(upper_bound(&seq, &3), 4);
/// assert_eq!(upper_bound(&seq, &0), 0);
/// ```
#[must_use]
pub fn upper_bound<S>(seq: &S, value: &S::Item) -> isize
where
    S: IndexedSequence + ?Sized,
    S::Item: Ord,
{
    upper_bound_with(seq, value, &NaturalOrder, &mut NoProbe)
}

/// [`upper_bound`] under a caller-supplied order.
#[must_use]
pub fn upper_bound_by<S, C>(seq: &S, value: &S::Item, comparator: &C) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item> + ?Sized,
{
    upper_bound_with(seq, value, comparator, &mut NoProbe)
}

/// [`upper_bound_by`] reporting every loop iteration to `probe`.
#[must_use]
pub fn upper_bound_with<S, C, P>(
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
    to_signed(right_boundary(seq, value, comparator, probe).index)
}
