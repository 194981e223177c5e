//! Three-way comparison capability.
//!
//! Every comparison made by a search is `comparator.compare(element, query)`:
//! the sequence element is always the left operand.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be consistent (antisymmetric, transitive). An
/// inconsistent comparator gives unspecified search results; it is never
/// detected.
pub trait Comparator<T: ?Sized> {
    /// Compare `lhs` against `rhs`.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The element type's own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Inverts a comparator. Searching a descending sequence with
/// `Reversed(NaturalOrder)` behaves like searching its ascending mirror.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
