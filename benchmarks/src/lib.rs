//! Shared inputs for the boundsearch benchmark suites.
//!
//! Every input is derived from a fixed `SplitMix64` seed, so two runs on
//! the same machine time exactly the same searches.

use boundsearch_harness::generate::SplitMix64;

/// Fixed seed for every benchmark input.
pub const BENCH_SEED: u64 = 0xB0DE_5EED;

/// Sequence lengths the micro benchmarks sweep.
pub const SIZES: &[usize] = &[16, 1 << 10, 1 << 16, 1 << 20];

/// Queries per timed batch.
pub const QUERY_BATCH: usize = 1024;

/// Shape of a benchmark sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `0, 2, 4, ...`: every element distinct, half of all queries miss.
    Distinct,
    /// Runs of `run` equal elements.
    Runs { run: usize },
    /// Every element equal.
    Flat,
}

impl Shape {
    /// Name used in benchmark ids.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Distinct => "distinct".to_string(),
            Self::Runs { run } => format!("runs{run}"),
            Self::Flat => "flat".to_string(),
        }
    }
}

/// A sorted sequence of `len` elements with the given shape.
#[must_use]
pub fn sorted_sequence(len: usize, shape: Shape) -> Vec<i64> {
    (0..len)
        .map(|i| {
            let key = match shape {
                Shape::Distinct => i * 2,
                Shape::Runs { run } => i / run.max(1) * 2,
                Shape::Flat => 0,
            };
            i64::try_from(key).unwrap_or(i64::MAX)
        })
        .collect()
}

/// `QUERY_BATCH` queries spread over (and slightly past) `sequence`.
#[must_use]
pub fn queries(sequence: &[i64]) -> Vec<i64> {
    let low = sequence.first().copied().unwrap_or(0) - 1;
    let high = sequence.last().copied().unwrap_or(0) + 1;
    let width = (high - low + 1).unsigned_abs();
    let mut rng = SplitMix64::new(BENCH_SEED);
    (0..QUERY_BATCH)
        .map(|_| low + i64::try_from(rng.below(width)).unwrap_or(0))
        .collect()
}

/// `(key, payload)` table over a strictly increasing key sequence.
#[must_use]
pub fn keyed_table(len: usize) -> Vec<(i64, u32)> {
    sorted_sequence(len, Shape::Distinct)
        .into_iter()
        .zip(0u32..)
        .collect()
}
