//! Boundary vector lock tests.
//!
//! Proves:
//! 1. The committed vector file parses and every case is sorted
//! 2. Every stated expectation holds through every sequence adapter
//! 3. Bound expectations hold through the keyed adapter on unique keys
//! 4. A full harness run over the file is clean
//! 5. Deeply duplicated runs still resolve to the outermost occurrences

use boundsearch_harness::case::{AdapterKind, Operation};
use boundsearch_harness::runner::run_suite;
use lock_tests::vector_helpers::{
    boundary_cases, keyed_bounds, sequence_adapter_answers, vectors_only_policy,
};

// ---------------------------------------------------------------------------
// 1. Fixture integrity
// ---------------------------------------------------------------------------

/// ACCEPTANCE: VEC-001-FIXTURE
#[test]
fn fixture_parses_and_is_sorted() {
    let cases = boundary_cases();
    assert!(cases.len() >= 15, "fixture lost cases: {}", cases.len());
    assert!(cases.iter().all(|c| c.is_sorted()));
    assert!(
        cases.iter().filter(|c| c.expected.is_some()).count() >= 15,
        "most cases must carry explicit expectations"
    );
}

// ---------------------------------------------------------------------------
// 2. Sequence adapters
// ---------------------------------------------------------------------------

/// ACCEPTANCE: VEC-002-EXPECT
#[test]
fn expectations_hold_for_sequence_adapters() {
    for case in boundary_cases() {
        let Some(expected) = case.expected else {
            continue;
        };
        let want = Operation::ALL.map(|op| expected.get(op));
        for (adapter, got) in ["array", "list", "deque"]
            .iter()
            .zip(sequence_adapter_answers(&case.sequence, case.value))
        {
            assert_eq!(got, want, "case {} via {adapter}", case.name);
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Keyed adapter
// ---------------------------------------------------------------------------

/// ACCEPTANCE: VEC-002-EXPECT
#[test]
fn expectations_hold_for_keyed_adapter() {
    let mut checked = 0;
    for case in boundary_cases() {
        let (Some(expected), true) = (case.expected, case.has_unique_keys()) else {
            continue;
        };
        assert_eq!(
            keyed_bounds(&case.sequence, case.value),
            (expected.lower_bound, expected.upper_bound),
            "case {}",
            case.name
        );
        checked += 1;
    }
    assert!(checked >= 5, "too few unique-key cases: {checked}");
}

// ---------------------------------------------------------------------------
// 4. Harness run
// ---------------------------------------------------------------------------

/// ACCEPTANCE: VEC-003-SUITE
#[test]
fn harness_run_is_clean() {
    let cases = boundary_cases();
    let report = run_suite(&cases, &vectors_only_policy()).unwrap();
    assert_eq!(report.cases.len(), cases.len());
    for outcome in &report.cases {
        assert!(outcome.is_clean(), "{}: {:?}", outcome.name, outcome.mismatches);
    }
    // Duplicate-bearing cases skip the keyed adapter and nothing else.
    for (case, outcome) in cases.iter().zip(&report.cases) {
        let want: Vec<AdapterKind> = if case.has_unique_keys() {
            Vec::new()
        } else {
            vec![AdapterKind::Keyed]
        };
        assert_eq!(outcome.skipped, want, "case {}", case.name);
    }
}

// ---------------------------------------------------------------------------
// 5. Long duplicate runs
// ---------------------------------------------------------------------------

/// ACCEPTANCE: VEC-004-TIEBREAK
#[test]
fn long_runs_resolve_to_outermost_occurrences() {
    for run in [1usize, 2, 3, 63, 64, 65, 4097] {
        let mut seq = vec![-1i64; 5];
        seq.resize(5 + run, 0);
        seq.resize(5 + run + 7, 1);
        let last = isize::try_from(5 + run - 1).unwrap();
        for [lower, upper, first, last_idx] in sequence_adapter_answers(&seq, 0) {
            assert_eq!((lower, first), (5, 5), "run {run}");
            assert_eq!((upper, last_idx), (last + 1, last), "run {run}");
        }
    }
}
