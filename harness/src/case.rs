//! Search cases and the vector-file format.
//!
//! # Vector file (`vectors.v1`)
//!
//! ```text
//! {
//!   "schema_version": "vectors.v1",
//!   "cases": [
//!     {
//!       "name": "duplicate_run_hit",
//!       "sequence": [1, 3, 3, 3, 7],
//!       "value": 3,
//!       "expect": {"lower_bound": 1, "upper_bound": 4,
//!                  "first_index": 1, "last_index": 3}
//!     }
//!   ]
//! }
//! ```
//!
//! `expect` is optional; cases without it are checked against the oracle
//! only. Sequences must be sorted ascending, and case names must be unique.

use std::collections::BTreeSet;

/// Schema tag accepted by [`parse_vectors`].
pub const VECTORS_SCHEMA_VERSION: &str = "vectors.v1";

/// The four search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    LowerBound,
    UpperBound,
    FirstIndex,
    LastIndex,
}

impl Operation {
    /// Every operation, in outcome order.
    pub const ALL: [Operation; 4] = [
        Self::LowerBound,
        Self::UpperBound,
        Self::FirstIndex,
        Self::LastIndex,
    ];

    /// Snake-case name used in vector files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LowerBound => "lower_bound",
            Self::UpperBound => "upper_bound",
            Self::FirstIndex => "first_index",
            Self::LastIndex => "last_index",
        }
    }

    /// Whether the key/value adapter offers this operation.
    #[must_use]
    pub const fn is_bound(self) -> bool {
        matches!(self, Self::LowerBound | Self::UpperBound)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Container shapes the harness drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdapterKind {
    /// `adapters::array` over the case's slice.
    Array,
    /// `adapters::list` over a `Vec`.
    List,
    /// `adapters::list` over a `VecDeque` built with a wrapped head.
    Deque,
    /// `adapters::keyed` over `(key, ())` pairs. Only runs on cases whose
    /// sequence is strictly increasing, since keys are unique.
    Keyed,
}

impl AdapterKind {
    /// Every adapter, in outcome order.
    pub const ALL: [AdapterKind; 4] = [Self::Array, Self::List, Self::Deque, Self::Keyed];

    /// Snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::List => "list",
            Self::Deque => "deque",
            Self::Keyed => "keyed",
        }
    }

    /// Parse a name produced by [`AdapterKind::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether this adapter offers `op`.
    #[must_use]
    pub const fn supports(self, op: Operation) -> bool {
        match self {
            Self::Keyed => op.is_bound(),
            Self::Array | Self::List | Self::Deque => true,
        }
    }
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Expected results for all four operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub lower_bound: isize,
    pub upper_bound: isize,
    pub first_index: isize,
    pub last_index: isize,
}

impl Expectation {
    /// Expected result of `op`.
    #[must_use]
    pub fn get(&self, op: Operation) -> isize {
        match op {
            Operation::LowerBound => self.lower_bound,
            Operation::UpperBound => self.upper_bound,
            Operation::FirstIndex => self.first_index,
            Operation::LastIndex => self.last_index,
        }
    }
}

/// One query against one sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCase {
    pub name: String,
    pub sequence: Vec<i64>,
    pub value: i64,
    pub expected: Option<Expectation>,
}

impl SearchCase {
    /// Build a case without a stated expectation.
    #[must_use]
    pub fn new(name: impl Into<String>, sequence: Vec<i64>, value: i64) -> Self {
        Self {
            name: name.into(),
            sequence,
            value,
            expected: None,
        }
    }

    /// Attach an expectation.
    #[must_use]
    pub fn expecting(mut self, expected: Expectation) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Whether the sequence is sorted ascending.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sequence.windows(2).all(|w| w[0] <= w[1])
    }

    /// Whether the sequence is strictly increasing (usable as unique keys).
    #[must_use]
    pub fn has_unique_keys(&self) -> bool {
        self.sequence.windows(2).all(|w| w[0] < w[1])
    }
}

/// Error parsing a vector file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Input is not valid JSON.
    Parse { detail: String },
    /// `schema_version` missing or not [`VECTORS_SCHEMA_VERSION`].
    SchemaVersion { found: String },
    /// A required field is missing or has the wrong type.
    Field { case: String, field: String },
    /// An expected result does not fit in `isize`.
    OutOfRange { case: String, field: String },
    /// A case's sequence is not sorted ascending.
    Unsorted { case: String },
    /// Two cases share a name.
    DuplicateName { case: String },
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { detail } => write!(f, "vector file is not valid JSON: {detail}"),
            Self::SchemaVersion { found } => {
                write!(f, "unsupported vector schema version: {found:?}")
            }
            Self::Field { case, field } => {
                write!(f, "case {case:?}: missing or invalid field {field:?}")
            }
            Self::OutOfRange { case, field } => {
                write!(f, "case {case:?}: field {field:?} out of range")
            }
            Self::Unsorted { case } => write!(f, "case {case:?}: sequence is not sorted"),
            Self::DuplicateName { case } => write!(f, "duplicate case name {case:?}"),
        }
    }
}

impl std::error::Error for VectorError {}

/// Parse a `vectors.v1` file.
///
/// # Errors
///
/// Returns [`VectorError`] on malformed JSON, an unknown schema version, a
/// missing or mistyped field, an unsorted sequence, or a duplicate name.
pub fn parse_vectors(bytes: &[u8]) -> Result<Vec<SearchCase>, VectorError> {
    let root: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| VectorError::Parse {
            detail: e.to_string(),
        })?;

    let version = root["schema_version"].as_str().unwrap_or("");
    if version != VECTORS_SCHEMA_VERSION {
        return Err(VectorError::SchemaVersion {
            found: version.to_string(),
        });
    }

    let entries = root["cases"].as_array().ok_or_else(|| VectorError::Field {
        case: String::new(),
        field: "cases".into(),
    })?;

    let mut seen = BTreeSet::new();
    let mut cases = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let case = parse_case(position, entry)?;
        if !seen.insert(case.name.clone()) {
            return Err(VectorError::DuplicateName { case: case.name });
        }
        cases.push(case);
    }
    Ok(cases)
}

fn parse_case(position: usize, entry: &serde_json::Value) -> Result<SearchCase, VectorError> {
    let name = entry["name"]
        .as_str()
        .map_or_else(|| format!("#{position}"), str::to_string);

    let field_err = |field: &str| VectorError::Field {
        case: name.clone(),
        field: field.to_string(),
    };

    if !entry["name"].is_string() {
        return Err(field_err("name"));
    }

    let sequence = entry["sequence"]
        .as_array()
        .ok_or_else(|| field_err("sequence"))?
        .iter()
        .map(serde_json::Value::as_i64)
        .collect::<Option<Vec<i64>>>()
        .ok_or_else(|| field_err("sequence"))?;

    let value = entry["value"].as_i64().ok_or_else(|| field_err("value"))?;

    let expected = match &entry["expect"] {
        serde_json::Value::Null => None,
        expect => Some(parse_expectation(&name, expect)?),
    };

    let case = SearchCase {
        name,
        sequence,
        value,
        expected,
    };
    if !case.is_sorted() {
        return Err(VectorError::Unsorted { case: case.name });
    }
    Ok(case)
}

fn parse_expectation(name: &str, expect: &serde_json::Value) -> Result<Expectation, VectorError> {
    let read = |op: Operation| -> Result<isize, VectorError> {
        let raw = expect[op.name()].as_i64().ok_or_else(|| VectorError::Field {
            case: name.to_string(),
            field: format!("expect.{op}"),
        })?;
        isize::try_from(raw).map_err(|_| VectorError::OutOfRange {
            case: name.to_string(),
            field: format!("expect.{op}"),
        })
    };
    Ok(Expectation {
        lower_bound: read(Operation::LowerBound)?,
        upper_bound: read(Operation::UpperBound)?,
        first_index: read(Operation::FirstIndex)?,
        last_index: read(Operation::LastIndex)?,
    })
}
