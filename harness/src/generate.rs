//! Deterministic case generation.
//!
//! Cases come from a seeded `SplitMix64` stream, so the same policy always
//! yields the same cases on every platform. Generated sequences are sorted
//! by construction and deliberately rich in duplicate runs; queries range a
//! little past both ends so the "below everything" and "above everything"
//! paths are exercised.

use crate::case::SearchCase;
use crate::policy::SuitePolicy;

/// Per-element chance (out of 8) of repeating the previous value.
const REPEAT_WEIGHT: u64 = 3;

/// Queries reach this far beyond the sequence's first and last element.
const QUERY_OVERSHOOT: i64 = 2;

/// `SplitMix64` pseudo-random stream.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Seed a new stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64 random bits.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform-ish value in `[0, bound)`; `0` when `bound == 0`.
    ///
    /// Uses plain modulo reduction. The bias is irrelevant for test-case
    /// generation.
    pub fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            0
        } else {
            self.next_u64() % bound
        }
    }
}

/// Generate `policy.generated_cases` sorted cases.
#[must_use]
pub fn generate_cases(policy: &SuitePolicy) -> Vec<SearchCase> {
    let mut rng = SplitMix64::new(policy.seed);
    (0..policy.generated_cases)
        .map(|i| {
            let name = format!("gen-{:016x}-{i:06}", policy.seed);
            let sequence = sorted_sequence(&mut rng, policy.max_len, policy.value_span);
            let value = query_for(&mut rng, &sequence, policy.value_span);
            SearchCase::new(name, sequence, value)
        })
        .collect()
}

fn sorted_sequence(rng: &mut SplitMix64, max_len: usize, value_span: u32) -> Vec<i64> {
    let len = usize::try_from(rng.below(max_len as u64 + 1)).unwrap_or(max_len);
    let span = i64::from(value_span);
    let step_limit = u64::from(value_span / 4 + 1);

    let mut sequence = Vec::with_capacity(len);
    // u32 span, so this stays far from i64 overflow.
    let mut current = small(rng.below(u64::from(value_span))) - span / 2;
    for _ in 0..len {
        sequence.push(current);
        if rng.below(8) >= REPEAT_WEIGHT {
            current += 1 + small(rng.below(step_limit));
        }
    }
    sequence
}

fn query_for(rng: &mut SplitMix64, sequence: &[i64], value_span: u32) -> i64 {
    let (low, high) = match (sequence.first(), sequence.last()) {
        (Some(&first), Some(&last)) => (first - QUERY_OVERSHOOT, last + QUERY_OVERSHOOT),
        _ => (0, i64::from(value_span)),
    };
    // Bias towards values actually present so hits are common.
    if !sequence.is_empty() && rng.below(2) == 0 {
        let pick = usize::try_from(rng.below(sequence.len() as u64)).unwrap_or(0);
        return sequence[pick];
    }
    let width = (high - low + 1).unsigned_abs();
    low + small(rng.below(width))
}

/// Draws here are bounded by small widths; saturate rather than wrap.
fn small(draw: u64) -> i64 {
    i64::try_from(draw).unwrap_or(i64::MAX)
}
