//! Fixed-length contiguous sequences: arrays and slices.
//!
//! `&[T; N]` coerces to `&[T]` at the call site, so one signature covers
//! both.

use boundsearch_kernel::order::Comparator;
use boundsearch_kernel::{bound, occurrence};

/// First index whose element is `>= value`; `-1` if `array` is empty.
#[must_use]
pub fn lower_bound<T: Ord>(array: &[T], value: &T) -> isize {
    bound::lower_bound(array, value)
}

/// [`lower_bound`] under `comparator`.
#[must_use]
pub fn lower_bound_by<T, C>(array: &[T], value: &T, comparator: &C) -> isize
where
    C: Comparator<T> + ?Sized,
{
    bound::lower_bound_by(array, value, comparator)
}

/// First index whose element is `> value`; `-1` if `array` is empty.
#[must_use]
pub fn upper_bound<T: Ord>(array: &[T], value: &T) -> isize {
    bound::upper_bound(array, value)
}

/// [`upper_bound`] under `comparator`.
#[must_use]
pub fn upper_bound_by<T, C>(array: &[T], value: &T, comparator: &C) -> isize
where
    C: Comparator<T> + ?Sized,
{
    bound::upper_bound_by(array, value, comparator)
}

/// Leftmost index equal to `value`, else `!insertion`; `-1` if empty.
#[must_use]
pub fn first_index<T: Ord>(array: &[T], value: &T) -> isize {
    occurrence::first_index(array, value)
}

/// [`first_index`] under `comparator`.
#[must_use]
pub fn first_index_by<T, C>(array: &[T], value: &T, comparator: &C) -> isize
where
    C: Comparator<T> + ?Sized,
{
    occurrence::first_index_by(array, value, comparator)
}

/// Rightmost index equal to `value`, else `!insertion`; `-1` if empty.
#[must_use]
pub fn last_index<T: Ord>(array: &[T], value: &T) -> isize {
    occurrence::last_index(array, value)
}

/// [`last_index`] under `comparator`.
#[must_use]
pub fn last_index_by<T, C>(array: &[T], value: &T, comparator: &C) -> isize
where
    C: Comparator<T> + ?Sized,
{
    occurrence::last_index_by(array, value, comparator)
}
