//! Boundsearch Adapters: the kernel's search operations bound to concrete
//! container shapes.
//!
//! # Crate dependency graph
//!
//! ```text
//! boundsearch_kernel  ←  boundsearch_adapters  ←  boundsearch_harness
//! (algorithms)           (container bindings)     (conformance suite)
//! ```
//!
//! # Adapters
//!
//! - [`array`] -- fixed-length contiguous sequences (`[T; N]`, `[T]`)
//! - [`list`] -- dynamically sized lists (`Vec<T>`, `VecDeque<T>`)
//! - [`keyed`] -- the key sequence of a flat ordered key/value container;
//!   lower and upper bound only
//!
//! Adapters contain no search logic. Each one forwards to the same kernel
//! function, so tie-breaking and the not-found encoding are identical across
//! every container shape. For probe-instrumented searches call the kernel's
//! `*_with` functions directly (for keyed containers, on a [`keyed::Keys`]
//! view).

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod keyed;
pub mod list;
