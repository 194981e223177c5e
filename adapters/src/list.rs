//! Dynamically sized lists: `Vec<T>` and `VecDeque<T>`.
//!
//! A `VecDeque` is not contiguous in memory, but it is index-addressable in
//! logical order, which is all the search needs.

use std::collections::VecDeque;

use boundsearch_kernel::order::Comparator;
use boundsearch_kernel::sequence::IndexedSequence;
use boundsearch_kernel::{bound, occurrence};

/// Growable, index-addressable list types accepted by this adapter.
///
/// Fixed-length storage goes through [`crate::array`] instead.
pub trait DynamicList: IndexedSequence {}

impl<T> DynamicList for Vec<T> {}
impl<T> DynamicList for VecDeque<T> {}

/// First index whose element is `>= value`; `-1` if `list` is empty.
#[must_use]
pub fn lower_bound<L>(list: &L, value: &L::Item) -> isize
where
    L: DynamicList,
    L::Item: Ord,
{
    bound::lower_bound(list, value)
}

/// [`lower_bound`] under `comparator`.
#[must_use]
pub fn lower_bound_by<L, C>(list: &L, value: &L::Item, comparator: &C) -> isize
where
    L: DynamicList,
    C: Comparator<L::Item> + ?Sized,
{
    bound::lower_bound_by(list, value, comparator)
}

/// First index whose element is `> value`; `-1` if `list` is empty.
#[must_use]
pub fn upper_bound<L>(list: &L, value: &L::Item) -> isize
where
    L: DynamicList,
    L::Item: Ord,
{
    bound::upper_bound(list, value)
}

/// [`upper_bound`] under `comparator`.
#[must_use]
pub fn upper_bound_by<L, C>(list: &L, value: &L::Item, comparator: &C) -> isize
where
    L: DynamicList,
    C: Comparator<L::Item> + ?Sized,
{
    bound::upper_bound_by(list, value, comparator)
}

/// Leftmost index equal to `value`, else `!insertion`; `-1` if empty.
#[must_use]
pub fn first_index<L>(list: &L, value: &L::Item) -> isize
where
    L: DynamicList,
    L::Item: Ord,
{
    occurrence::first_index(list, value)
}

/// [`first_index`] under `comparator`.
#[must_use]
pub fn first_index_by<L, C>(list: &L, value: &L::Item, comparator: &C) -> isize
where
    L: DynamicList,
    C: Comparator<L::Item> + ?Sized,
{
    occurrence::first_index_by(list, value, comparator)
}

/// Rightmost index equal to `value`, else `!insertion`; `-1` if empty.
#[must_use]
pub fn last_index<L>(list: &L, value: &L::Item) -> isize
where
    L: DynamicList,
    L::Item: Ord,
{
    occurrence::last_index(list, value)
}

/// [`last_index`] under `comparator`.
#[must_use]
pub fn last_index_by<L, C>(list: &L, value: &L::Item, comparator: &C) -> isize
where
    L: DynamicList,
    C: Comparator<L::Item> + ?Sized,
{
    occurrence::last_index_by(list, value, comparator)
}
