//! Supported product versions
//!
//! A fixed enumerated set; anything else fails fast with
//! [`MigrateError::UnsupportedVersion`] before any migration unit runs.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::MigrateError;

/// Product version a migration run may target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SupportedVersion {
    V1_5,
    V1_6,
    V1_7,
    V1_8,
}

impl SupportedVersion {
    /// The full supported set, ascending
    pub const ALL: [Self; 4] = [Self::V1_5, Self::V1_6, Self::V1_7, Self::V1_8];

    /// Symbolic form, e.g. `"1.6"`
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_5 => "1.5",
            Self::V1_6 => "1.6",
            Self::V1_7 => "1.7",
            Self::V1_8 => "1.8",
        }
    }
}

impl Display for SupportedVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SupportedVersion {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|version| version.as_str() == s)
            .copied()
            .ok_or_else(|| MigrateError::UnsupportedVersion(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_version_parses() {
        for version in SupportedVersion::ALL {
            let parsed: SupportedVersion = version.as_str().parse().unwrap();
            assert_eq!(parsed, version);
        }
    }

    #[test]
    fn unknown_version_is_rejected_verbatim() {
        let err = "2.0".parse::<SupportedVersion>().unwrap_err();
        match err {
            MigrateError::UnsupportedVersion(raw) => assert_eq!(raw, "2.0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn near_miss_strings_are_rejected() {
        assert!("1.6.0".parse::<SupportedVersion>().is_err());
        assert!(" 1.6".parse::<SupportedVersion>().is_err());
        assert!("".parse::<SupportedVersion>().is_err());
    }
}
