//! Key sequence of an ordered key/value container.
//!
//! Only the bounds are offered here. Keys in a key-ordered container are
//! unique, so "first occurrence" and "last occurrence" would both reduce to
//! a plain lookup.
//!
//! Containers expose their keys through [`KeyedContainer`]; [`Keys`] binds
//! that to the kernel's sequence capability. `BTreeMap` is deliberately not
//! a `KeyedContainer`: it has no positional access, so an index-returning
//! search over it cannot be logarithmic.

use std::collections::VecDeque;

use boundsearch_kernel::bound;
use boundsearch_kernel::order::Comparator;
use boundsearch_kernel::sequence::IndexedSequence;

/// A container whose keys are addressable by position in ascending order.
pub trait KeyedContainer {
    /// Key type.
    type Key;

    /// Number of keys (equal to the number of entries).
    fn key_count(&self) -> usize;

    /// Key of the entry at `index`.
    fn key_at(&self, index: usize) -> &Self::Key;
}

impl<K, V> KeyedContainer for [(K, V)] {
    type Key = K;

    #[inline]
    fn key_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn key_at(&self, index: usize) -> &K {
        &self[index].0
    }
}

impl<K, V, const N: usize> KeyedContainer for [(K, V); N] {
    type Key = K;

    #[inline]
    fn key_count(&self) -> usize {
        N
    }

    #[inline]
    fn key_at(&self, index: usize) -> &K {
        &self[index].0
    }
}

impl<K, V> KeyedContainer for Vec<(K, V)> {
    type Key = K;

    #[inline]
    fn key_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn key_at(&self, index: usize) -> &K {
        &self[index].0
    }
}

impl<K, V> KeyedContainer for VecDeque<(K, V)> {
    type Key = K;

    #[inline]
    fn key_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn key_at(&self, index: usize) -> &K {
        &self[index].0
    }
}

/// The key sequence of a [`KeyedContainer`], viewed as an
/// [`IndexedSequence`].
#[derive(Debug)]
pub struct Keys<'a, C: ?Sized> {
    container: &'a C,
}

impl<'a, C: ?Sized> Keys<'a, C> {
    /// View the keys of `container`.
    #[must_use]
    pub fn new(container: &'a C) -> Self {
        Self { container }
    }
}

impl<C: ?Sized> Clone for Keys<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Keys<'_, C> {}

impl<C: KeyedContainer + ?Sized> IndexedSequence for Keys<'_, C> {
    type Item = C::Key;

    #[inline]
    fn len(&self) -> usize {
        self.container.key_count()
    }

    #[inline]
    fn at(&self, index: usize) -> &C::Key {
        self.container.key_at(index)
    }
}

/// Index of the first key `>= key`; `-1` if `container` is empty.
///
/// ```
/// use boundsearch_adapters::keyed::lower_bound;
///
/// let table = vec![(10, "ten"), (20, "twenty"), (30, "thirty")];
/// assert_eq!(lower_bound(&table, &20), 1);
/// assert_eq!(lower_bound(&table, &25), 2);
/// ```
#[must_use]
pub fn lower_bound<C>(container: &C, key: &C::Key) -> isize
where
    C: KeyedContainer + ?Sized,
    C::Key: Ord,
{
    bound::lower_bound(&Keys::new(container), key)
}

/// [`lower_bound`] under `comparator`.
#[must_use]
pub fn lower_bound_by<C, O>(container: &C, key: &C::Key, comparator: &O) -> isize
where
    C: KeyedContainer + ?Sized,
    O: Comparator<C::Key> + ?Sized,
{
    bound::lower_bound_by(&Keys::new(container), key, comparator)
}

/// Index of the first key `> key`; `-1` if `container` is empty.
#[must_use]
pub fn upper_bound<C>(container: &C, key: &C::Key) -> isize
where
    C: KeyedContainer + ?Sized,
    C::Key: Ord,
{
    bound::upper_bound(&Keys::new(container), key)
}

/// [`upper_bound`] under `comparator`.
#[must_use]
pub fn upper_bound_by<C, O>(container: &C, key: &C::Key, comparator: &O) -> isize
where
    C: KeyedContainer + ?Sized,
    O: Comparator<C::Key> + ?Sized,
{
    bound::upper_bound_by(&Keys::new(container), key, comparator)
}
