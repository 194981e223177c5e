//! Search probes: optional observers of the binary-search loop.
//!
//! A probe sees every midpoint a search examines together with the result
//! of comparing that element against the query. Probes observe only; they
//! cannot influence the result. Use [`NoProbe`] when nothing is watching.

use std::cmp::Ordering;

/// Observer invoked once per loop iteration.
pub trait SearchProbe {
    /// Called with the midpoint examined and `compare(seq[mid], query)`.
    fn on_probe(&mut self, mid: usize, ordering: Ordering);
}

impl<P: SearchProbe + ?Sized> SearchProbe for &mut P {
    #[inline]
    fn on_probe(&mut self, mid: usize, ordering: Ordering) {
        (**self).on_probe(mid, ordering);
    }
}

/// A probe that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoProbe;

impl SearchProbe for NoProbe {
    #[inline(always)]
    fn on_probe(&mut self, _mid: usize, _ordering: Ordering) {}
}

/// Counts loop iterations.
///
/// The counter accumulates across searches; call [`IterationCounter::reset`]
/// between calls to measure them one by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterationCounter {
    iterations: u64,
}

impl IterationCounter {
    /// Create a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterations observed so far.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Reset to zero.
    pub fn reset(&mut self) {
        self.iterations = 0;
    }
}

impl SearchProbe for IterationCounter {
    #[inline]
    fn on_probe(&mut self, _mid: usize, _ordering: Ordering) {
        self.iterations += 1;
    }
}

/// One observed loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStep {
    /// Midpoint examined.
    pub mid: usize,
    /// `compare(seq[mid], query)`.
    pub ordering: Ordering,
}

/// Records every iteration in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeRecorder {
    steps: Vec<ProbeStep>,
}

impl ProbeRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps in the order they were observed.
    #[must_use]
    pub fn steps(&self) -> &[ProbeStep] {
        &self.steps
    }

    /// Take the recorded steps, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<ProbeStep> {
        std::mem::take(&mut self.steps)
    }
}

impl SearchProbe for ProbeRecorder {
    fn on_probe(&mut self, mid: usize, ordering: Ordering) {
        self.steps.push(ProbeStep { mid, ordering });
    }
}

/// Upper bound on loop iterations for a sequence of length `len`:
/// `floor(log2(len)) + 1`, or 0 for an empty sequence.
#[must_use]
pub fn max_iterations(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        len.ilog2() + 1
    }
}
