//! The "indexable + sized" capability every search runs against.
//!
//! A sequence only has to answer two questions: how many elements it holds
//! and which element lives at a given position. The search algorithms never
//! ask anything else, so binding a new container shape means implementing
//! these two methods and nothing more.

use std::collections::VecDeque;

/// Random access by position plus a length query.
///
/// # Contract
///
/// - `at(i)` must return the same element for every `i < len()` for the
///   duration of one search call (stable length, stable order).
/// - The search functions only call `at` with `i < len()`; implementations
///   may panic on out-of-range indices the same way slice indexing does.
/// - For results to be meaningful the elements must be sorted ascending
///   under the comparator used for the search. This is not verified.
pub trait IndexedSequence {
    /// Element type stored at each position.
    type Item: ?Sized;

    /// Number of elements in the sequence.
    fn len(&self) -> usize;

    /// Element at position `index`.
    fn at(&self, index: usize) -> &Self::Item;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> IndexedSequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> IndexedSequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexedSequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> IndexedSequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<S: IndexedSequence + ?Sized> IndexedSequence for &S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> &S::Item {
        (**self).at(index)
    }
}
