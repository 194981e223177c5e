//! Boundsearch Kernel: binary-search primitives over sorted sequences.
//!
//! # API Surface
//!
//! Four operations, each returning `isize`:
//!
//! - [`bound::lower_bound`] -- first index whose element is `>= value`
//! - [`bound::upper_bound`] -- first index whose element is `> value`
//! - [`occurrence::first_index`] -- leftmost equal element, else `!insertion`
//! - [`occurrence::last_index`] -- rightmost equal element, else `!insertion`
//!
//! Every operation returns `-1` for an empty sequence. Each comes in three
//! forms: natural order, `*_by` with a [`order::Comparator`], and `*_with`
//! that also reports loop iterations to a [`probe::SearchProbe`].
//!
//! # Preconditions
//!
//! Sequences must be sorted ascending under the order used for the search.
//! Unsorted input gives unspecified (but memory-safe, terminating) results;
//! it is not detected, since detection costs O(n).
//!
//! # Module Dependency Direction
//!
//! `sequence`, `order`, `probe`, `encoding` ← `bound` ← `occurrence`
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bound;
pub mod encoding;
pub mod occurrence;
pub mod order;
pub mod probe;
pub mod sequence;
