//! Boundsearch harness: conformance runs for the search adapters.
//!
//! A run takes a [`policy::SuitePolicy`] and a set of [`case::SearchCase`]s
//! (from a `vectors.v1` document, the seeded generator, or both), drives
//! every enabled adapter over every case, and cross-checks the answers
//! against the linear-scan oracle. The result is an in-memory
//! [`runner::SuiteReport`].
//!
//! ```text
//! SuiteConfig ─build_policy─→ SuitePolicy ─┐
//! vectors.v1 ─parse_vectors─→ cases ───────┼─→ runner ─→ SuiteReport
//! generate_cases(policy) ────→ cases ──────┘
//! ```
//!
//! The harness is test support. It contains no search logic of its own,
//! performs no I/O, and only calls the adapters and the kernel.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod case;
pub mod generate;
pub mod oracle;
pub mod policy;
pub mod runner;
