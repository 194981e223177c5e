//! Conformance runner: drives every enabled adapter over a set of cases.
//!
//! Each case is evaluated three ways and the answers are cross-checked:
//!
//! ```text
//! adapter call (public API)  ──┐
//! kernel `*_with` + counter  ──┼─→ compare → mismatches
//! linear-scan oracle         ──┘
//! ```
//!
//! On top of the pairwise comparisons, every adapter's four answers must be
//! consistent with each other (see [`check_consistency`]) and no search may
//! exceed `floor(log2 n) + 1` iterations.
//!
//! The runner never stops at the first mismatch. Every disagreement is
//! recorded in the [`CaseOutcome`] so a run shows the full picture.

use std::collections::VecDeque;

use boundsearch_adapters::keyed::{self, Keys};
use boundsearch_adapters::{array, list};
use boundsearch_kernel::bound::{lower_bound_with, upper_bound_with};
use boundsearch_kernel::encoding::EMPTY_SEQUENCE;
use boundsearch_kernel::occurrence::{first_index_with, last_index_with};
use boundsearch_kernel::order::NaturalOrder;
use boundsearch_kernel::probe::{max_iterations, IterationCounter};
use boundsearch_kernel::sequence::IndexedSequence;

use crate::case::{parse_vectors, AdapterKind, Operation, SearchCase, VectorError};
use crate::generate::generate_cases;
use crate::oracle;
use crate::policy::SuitePolicy;

/// Error that prevents a suite from running at all.
///
/// Wrong answers are not errors; they are [`Mismatch`]es in the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The vector file could not be parsed.
    Vectors(VectorError),
    /// A case's sequence is not sorted ascending.
    UnsortedCase { case: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vectors(e) => write!(f, "vector file rejected: {e}"),
            Self::UnsortedCase { case } => write!(f, "case {case:?} is not sorted"),
        }
    }
}

impl std::error::Error for RunError {}

/// One adapter's answer to one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub adapter: AdapterKind,
    pub op: Operation,
    /// Encoded result returned by the adapter's public function.
    pub result: isize,
    /// Loop iterations the same search took under an [`IterationCounter`].
    pub iterations: u64,
}

/// Which check a [`Mismatch`] failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MismatchSource {
    /// Disagrees with the case's stated expectation.
    Expectation,
    /// Disagrees with the linear-scan oracle.
    Oracle,
    /// The probed kernel call answered differently from the adapter.
    ProbeDivergence,
    /// The adapter's answers are inconsistent with each other.
    Consistency,
    /// The search ran more iterations than `floor(log2 n) + 1`.
    IterationBudget,
}

impl MismatchSource {
    /// Snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Expectation => "expectation",
            Self::Oracle => "oracle",
            Self::ProbeDivergence => "probe_divergence",
            Self::Consistency => "consistency",
            Self::IterationBudget => "iteration_budget",
        }
    }
}

impl std::fmt::Display for MismatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed check.
///
/// For [`MismatchSource::IterationBudget`], `expected` is the budget and
/// `actual` the iteration count. For everything else both are encoded
/// search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub adapter: AdapterKind,
    pub op: Operation,
    pub source: MismatchSource,
    pub expected: isize,
    pub actual: isize,
}

/// Everything observed while running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub name: String,
    pub len: usize,
    pub observations: Vec<Observation>,
    pub mismatches: Vec<Mismatch>,
    /// Enabled adapters that could not run this case (the keyed adapter on
    /// a sequence with duplicates).
    pub skipped: Vec<AdapterKind>,
}

impl CaseOutcome {
    /// Whether every check passed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Outcomes of a suite run, in case order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub cases: Vec<CaseOutcome>,
}

impl SuiteReport {
    /// Whether every case is clean.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.cases.iter().all(CaseOutcome::is_clean)
    }

    /// Total mismatches across all cases.
    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.cases.iter().map(|c| c.mismatches.len()).sum()
    }

    /// Total adapter answers observed across all cases.
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.cases.iter().map(|c| c.observations.len()).sum()
    }
}

/// The case's sequence in every container shape the adapters accept.
struct Views {
    list: Vec<i64>,
    deque: VecDeque<i64>,
    pairs: Vec<(i64, ())>,
}

impl Views {
    fn new(sequence: &[i64]) -> Self {
        // Split the deque across its ring buffer boundary so `at` has to
        // translate indices.
        let split = sequence.len() / 2;
        let mut deque = VecDeque::with_capacity(sequence.len());
        deque.extend(sequence[split..].iter().copied());
        for &x in sequence[..split].iter().rev() {
            deque.push_front(x);
        }
        Self {
            list: sequence.to_vec(),
            deque,
            pairs: sequence.iter().map(|&k| (k, ())).collect(),
        }
    }

    /// Result through the adapter's public function, or `None` when the
    /// adapter does not offer `op`.
    fn answer(&self, kind: AdapterKind, op: Operation, value: i64) -> Option<isize> {
        let result = match (kind, op) {
            (AdapterKind::Array, Operation::LowerBound) => array::lower_bound(&self.list, &value),
            (AdapterKind::Array, Operation::UpperBound) => array::upper_bound(&self.list, &value),
            (AdapterKind::Array, Operation::FirstIndex) => array::first_index(&self.list, &value),
            (AdapterKind::Array, Operation::LastIndex) => array::last_index(&self.list, &value),
            (AdapterKind::List, op) => list_answer(&self.list, op, value),
            (AdapterKind::Deque, op) => list_answer(&self.deque, op, value),
            (AdapterKind::Keyed, Operation::LowerBound) => keyed::lower_bound(&self.pairs, &value),
            (AdapterKind::Keyed, Operation::UpperBound) => keyed::upper_bound(&self.pairs, &value),
            (AdapterKind::Keyed, Operation::FirstIndex | Operation::LastIndex) => return None,
        };
        Some(result)
    }

    /// Result and iteration count through the kernel, on the same binding
    /// the adapter searches.
    fn probed(&self, kind: AdapterKind, op: Operation, value: i64) -> (isize, u64) {
        match kind {
            AdapterKind::Array => count(self.list.as_slice(), op, value),
            AdapterKind::List => count(&self.list, op, value),
            AdapterKind::Deque => count(&self.deque, op, value),
            AdapterKind::Keyed => count(&Keys::new(&self.pairs), op, value),
        }
    }
}

fn list_answer<L>(seq: &L, op: Operation, value: i64) -> isize
where
    L: list::DynamicList<Item = i64>,
{
    match op {
        Operation::LowerBound => list::lower_bound(seq, &value),
        Operation::UpperBound => list::upper_bound(seq, &value),
        Operation::FirstIndex => list::first_index(seq, &value),
        Operation::LastIndex => list::last_index(seq, &value),
    }
}

fn count<S>(seq: &S, op: Operation, value: i64) -> (isize, u64)
where
    S: IndexedSequence<Item = i64> + ?Sized,
{
    let mut counter = IterationCounter::new();
    let result = match op {
        Operation::LowerBound => lower_bound_with(seq, &value, &NaturalOrder, &mut counter),
        Operation::UpperBound => upper_bound_with(seq, &value, &NaturalOrder, &mut counter),
        Operation::FirstIndex => first_index_with(seq, &value, &NaturalOrder, &mut counter),
        Operation::LastIndex => last_index_with(seq, &value, &NaturalOrder, &mut counter),
    };
    (result, counter.iterations())
}

fn saturate<T: TryInto<isize>>(n: T) -> isize {
    n.try_into().unwrap_or(isize::MAX)
}

fn check(
    mismatches: &mut Vec<Mismatch>,
    observation: &Observation,
    source: MismatchSource,
    expected: isize,
    actual: isize,
) {
    if expected != actual {
        mismatches.push(Mismatch {
            adapter: observation.adapter,
            op: observation.op,
            source,
            expected,
            actual,
        });
    }
}

/// Cross-operation consistency of one adapter's answers.
///
/// - empty sequence: every answer is `-1`
/// - `lower_bound <= upper_bound`
/// - `first_index` is `lower_bound` on a hit, `!lower_bound` on a miss
/// - `last_index` is `upper_bound - 1` on a hit, `!upper_bound` on a miss
/// - unique keys: `upper_bound - lower_bound` is 0 or 1
fn check_consistency(
    observations: &[Observation],
    len: usize,
    unique_keys: bool,
    mismatches: &mut Vec<Mismatch>,
) {
    let find = |op: Operation| observations.iter().find(|o| o.op == op);
    let (Some(lower), Some(upper)) = (find(Operation::LowerBound), find(Operation::UpperBound))
    else {
        return;
    };

    if len == 0 {
        for observation in observations {
            check(
                mismatches,
                observation,
                MismatchSource::Consistency,
                EMPTY_SEQUENCE,
                observation.result,
            );
        }
        return;
    }

    if lower.result > upper.result {
        check(mismatches, upper, MismatchSource::Consistency, lower.result, upper.result);
    }
    if unique_keys && upper.result - lower.result > 1 {
        check(mismatches, upper, MismatchSource::Consistency, lower.result + 1, upper.result);
    }

    let hit = lower.result < upper.result;
    if let Some(first) = find(Operation::FirstIndex) {
        let derived = if hit { lower.result } else { !lower.result };
        check(mismatches, first, MismatchSource::Consistency, derived, first.result);
    }
    if let Some(last) = find(Operation::LastIndex) {
        let derived = if hit { upper.result - 1 } else { !upper.result };
        check(mismatches, last, MismatchSource::Consistency, derived, last.result);
    }
}

/// Run one case through every adapter `policy` enables.
///
/// The sequence must be sorted; [`run_suite`] checks this before calling.
#[must_use]
pub fn run_case(case: &SearchCase, policy: &SuitePolicy) -> CaseOutcome {
    let len = case.sequence.len();
    let unique_keys = case.has_unique_keys();
    let views = Views::new(&case.sequence);
    let truth = oracle::expectation(&case.sequence, case.value);
    let budget = saturate(max_iterations(len));

    let mut outcome = CaseOutcome {
        name: case.name.clone(),
        len,
        observations: Vec::new(),
        mismatches: Vec::new(),
        skipped: Vec::new(),
    };

    for &kind in &policy.adapters {
        if kind == AdapterKind::Keyed && !unique_keys {
            outcome.skipped.push(kind);
            continue;
        }

        let first_new = outcome.observations.len();
        for op in Operation::ALL {
            let Some(result) = views.answer(kind, op, case.value) else {
                continue;
            };
            let (probed, iterations) = views.probed(kind, op, case.value);
            let observation = Observation {
                adapter: kind,
                op,
                result,
                iterations,
            };

            let mismatches = &mut outcome.mismatches;
            if let Some(expected) = case.expected {
                let expected = expected.get(op);
                check(mismatches, &observation, MismatchSource::Expectation, expected, result);
            }
            check(mismatches, &observation, MismatchSource::Oracle, truth.get(op), result);
            check(mismatches, &observation, MismatchSource::ProbeDivergence, result, probed);
            let spent = saturate(iterations);
            if spent > budget {
                let source = MismatchSource::IterationBudget;
                check(mismatches, &observation, source, budget, spent);
            }

            outcome.observations.push(observation);
        }

        check_consistency(
            &outcome.observations[first_new..],
            len,
            unique_keys,
            &mut outcome.mismatches,
        );
    }
    outcome
}

/// Run every case.
///
/// # Errors
///
/// Returns [`RunError::UnsortedCase`] before running anything if any
/// sequence is unsorted.
pub fn run_suite(cases: &[SearchCase], policy: &SuitePolicy) -> Result<SuiteReport, RunError> {
    if let Some(bad) = cases.iter().find(|c| !c.is_sorted()) {
        return Err(RunError::UnsortedCase {
            case: bad.name.clone(),
        });
    }
    let cases = cases.iter().map(|case| run_case(case, policy)).collect();
    Ok(SuiteReport { cases })
}

/// Parse a `vectors.v1` document, then run its cases followed by the
/// generated cases `policy` asks for.
///
/// # Errors
///
/// Returns [`RunError::Vectors`] if the document is rejected, otherwise as
/// [`run_suite`].
pub fn run_vectors(bytes: &[u8], policy: &SuitePolicy) -> Result<SuiteReport, RunError> {
    let mut cases = parse_vectors(bytes).map_err(RunError::Vectors)?;
    cases.extend(generate_cases(policy));
    run_suite(&cases, policy)
}

/// Run only the generated cases.
///
/// # Errors
///
/// As [`run_suite`].
pub fn run_generated(policy: &SuitePolicy) -> Result<SuiteReport, RunError> {
    run_suite(&generate_cases(policy), policy)
}
