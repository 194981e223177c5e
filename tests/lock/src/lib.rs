//! Shared helpers for the lock tests.

pub mod vector_helpers;
