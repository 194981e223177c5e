//! Result encoding: signed indices and the one's-complement not-found form.
//!
//! Every search returns an `isize`:
//!
//! - `-1` for an empty sequence ([`EMPTY_SEQUENCE`]),
//! - a non-negative index for a bound or a found element,
//! - `!insertion` (`-(insertion + 1)`) when an occurrence search misses.
//!
//! `!0 == -1`, so "not found, insert at the front" and "empty sequence" share
//! a bit pattern. Both mean "insert at 0", which keeps [`Location::decode`]
//! total.

/// Sentinel returned by every operation on an empty sequence.
pub const EMPTY_SEQUENCE: isize = -1;

/// Convert an index to the signed result type.
///
/// Saturates at `isize::MAX`; only sequences of zero-sized elements can be
/// that long.
#[inline]
#[must_use]
pub fn to_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// Encode a miss whose insertion point is `insertion`.
#[inline]
#[must_use]
pub fn complement(insertion: usize) -> isize {
    !to_signed(insertion)
}

/// Decoded form of an occurrence-search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// The value occurs at this index.
    Found(usize),
    /// The value is absent; inserting it at `insertion` keeps the order.
    Absent { insertion: usize },
}

impl Location {
    /// Decode a value returned by `first_index` or `last_index`.
    #[must_use]
    pub fn decode(encoded: isize) -> Self {
        if encoded >= 0 {
            Self::Found(encoded.unsigned_abs())
        } else {
            Self::Absent {
                insertion: (!encoded).unsigned_abs(),
            }
        }
    }

    /// Re-encode into the signed form.
    #[must_use]
    pub fn encode(self) -> isize {
        match self {
            Self::Found(index) => to_signed(index),
            Self::Absent { insertion } => complement(insertion),
        }
    }

    /// Whether the value was found.
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Where the value sits, or would sit if inserted.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Found(index) | Self::Absent { insertion: index } => index,
        }
    }

    /// Map to the standard library's `binary_search` convention:
    /// `Ok(index)` when found, `Err(insertion)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Err(insertion)` when the value is absent.
    pub fn into_result(self) -> Result<usize, usize> {
        match self {
            Self::Found(index) => Ok(index),
            Self::Absent { insertion } => Err(insertion),
        }
    }
}

impl From<Location> for Result<usize, usize> {
    fn from(location: Location) -> Self {
        location.into_result()
    }
}
