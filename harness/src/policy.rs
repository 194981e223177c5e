//! Suite policy: which adapters a conformance run drives and how many
//! cases the generator adds.
//!
//! Callers supply a [`SuiteConfig`] of optional overrides; [`build_policy`]
//! resolves it against the defaults and validates it into a
//! [`SuitePolicy`].

use crate::case::AdapterKind;

/// Default budget values for generated cases.
const DEFAULT_GENERATED_CASES: usize = 256;
const DEFAULT_MAX_LEN: usize = 64;
const DEFAULT_VALUE_SPAN: u32 = 16;
const DEFAULT_SEED: u64 = 0x5EED_B0DE;

/// Hard caps, independent of configuration.
const MAX_GENERATED_CASES: usize = 1 << 20;
const MAX_SEQUENCE_LEN: usize = 1 << 16;

/// Overrides for a conformance run. `None` uses the default.
#[derive(Debug, Clone, Default)]
pub struct SuiteConfig {
    /// Adapters to drive. `None` runs every adapter.
    pub adapters: Option<Vec<AdapterKind>>,
    /// Number of generated cases added to the suite.
    pub generated_cases: Option<usize>,
    /// Maximum generated sequence length.
    pub max_len: Option<usize>,
    /// Generated element values are drawn from a window this wide.
    pub value_span: Option<u32>,
    /// Generator seed.
    pub seed: Option<u64>,
}

/// Resolved, validated run policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitePolicy {
    /// Adapters to drive, sorted and deduplicated.
    pub adapters: Vec<AdapterKind>,
    pub generated_cases: usize,
    pub max_len: usize,
    pub value_span: u32,
    pub seed: u64,
}

/// Error building a [`SuitePolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The adapter list is empty.
    NoAdapters,
    /// A budget exceeds its hard cap.
    BudgetExceeded {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// `value_span` must be at least 1.
    EmptyValueSpan,
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAdapters => write!(f, "suite policy selects no adapters"),
            Self::BudgetExceeded { field, max, actual } => {
                write!(f, "{field} = {actual} exceeds the cap of {max}")
            }
            Self::EmptyValueSpan => write!(f, "value_span must be at least 1"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// Resolve `config` against the defaults and validate the result.
///
/// # Errors
///
/// Returns [`PolicyError`] if no adapter is selected, a budget exceeds its
/// cap, or the value span is zero.
pub fn build_policy(config: &SuiteConfig) -> Result<SuitePolicy, PolicyError> {
    let mut adapters = config
        .adapters
        .clone()
        .unwrap_or_else(|| AdapterKind::ALL.to_vec());
    adapters.sort();
    adapters.dedup();
    if adapters.is_empty() {
        return Err(PolicyError::NoAdapters);
    }

    let generated_cases = config.generated_cases.unwrap_or(DEFAULT_GENERATED_CASES);
    check_cap("generated_cases", generated_cases, MAX_GENERATED_CASES)?;

    let max_len = config.max_len.unwrap_or(DEFAULT_MAX_LEN);
    check_cap("max_len", max_len, MAX_SEQUENCE_LEN)?;

    let value_span = config.value_span.unwrap_or(DEFAULT_VALUE_SPAN);
    if value_span == 0 {
        return Err(PolicyError::EmptyValueSpan);
    }

    Ok(SuitePolicy {
        adapters,
        generated_cases,
        max_len,
        value_span,
        seed: config.seed.unwrap_or(DEFAULT_SEED),
    })
}

fn check_cap(field: &'static str, actual: usize, max: usize) -> Result<(), PolicyError> {
    if actual > max {
        return Err(PolicyError::BudgetExceeded { field, max, actual });
    }
    Ok(())
}

impl SuitePolicy {
    /// Whether `kind` is enabled.
    #[must_use]
    pub fn runs(&self, kind: AdapterKind) -> bool {
        self.adapters.contains(&kind)
    }
}

impl Default for SuitePolicy {
    fn default() -> Self {
        Self {
            adapters: AdapterKind::ALL.to_vec(),
            generated_cases: DEFAULT_GENERATED_CASES,
            max_len: DEFAULT_MAX_LEN,
            value_span: DEFAULT_VALUE_SPAN,
            seed: DEFAULT_SEED,
        }
    }
}
