//! Migration sort keys

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque, totally ordered migration identifier
///
/// Timestamp-like (`YYYYMMDDhhmm`, e.g. `201708110930`), unique within a
/// registry. Registration assigns no meaning to the digits beyond their
/// ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MigrationKey(u64);

impl MigrationKey {
    /// Smallest possible key; use as the exclusive lower bound when
    /// applying every migration from the beginning
    pub const MIN: Self = Self(0);

    /// Create a key from its numeric form
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The numeric form
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for MigrationKey {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for MigrationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
