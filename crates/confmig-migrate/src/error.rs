//! Error types for the migration core
//!
//! Three non-retryable conditions:
//! - [`MigrateError::UnsupportedVersion`]: requested version outside the
//!   recognized set, or a unit-specific restriction violated
//! - [`MigrateError::MissingField`]: a unit's required input path was
//!   absent, surfaced with the unit's key and description
//! - [`RegistryError::DuplicateKey`]: registry construction invariant
//!   violated; fatal at startup, never per-document

use crate::key::MigrationKey;

/// Failure raised by a single migration unit's transform
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A documented required input path was absent
    #[error("required field {field} is absent")]
    MissingField {
        /// Full dotted path of the missing field
        field: String,
    },
}

impl TransformError {
    /// Create a missing-field failure for the given dotted path
    #[inline]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Registry construction failure
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two units were registered under the same key
    #[error("duplicate migration key {0}")]
    DuplicateKey(MigrationKey),
}

/// Failure of a whole engine invocation
///
/// Any of these aborts the call; no partially-migrated document is ever
/// returned, and there is no retry — the transforms are deterministic, so
/// retrying without fixing the input is pointless.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// Requested version is not in the supported set, or a unit in range
    /// restricts itself to a different version
    #[error("version \"{0}\" is not supported")]
    UnsupportedVersion(String),

    /// A unit's required input path was absent; carries the originating
    /// unit's key and description for operator diagnosis
    #[error("migration {key} ({description}): required field {field} is absent")]
    MissingField {
        /// Key of the failing unit
        key: MigrationKey,
        /// Description of the failing unit
        description: &'static str,
        /// Full dotted path of the missing field
        field: String,
    },

    /// Registry construction failed
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_carries_the_string_verbatim() {
        let err = MigrateError::UnsupportedVersion("2.0".to_owned());
        assert_eq!(err.to_string(), "version \"2.0\" is not supported");
    }

    #[test]
    fn missing_field_names_unit_and_field() {
        let err = MigrateError::MissingField {
            key: MigrationKey::new(201708251040),
            description: "rewrap the notifications encryption password",
            field: ".notifications.encryption_credentials.value.password".to_owned(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("201708251040"));
        assert!(rendered.contains("rewrap the notifications encryption password"));
        assert!(rendered.contains(".notifications.encryption_credentials.value.password"));
    }

    #[test]
    fn duplicate_key_converts_into_migrate_error() {
        let err: MigrateError = RegistryError::DuplicateKey(MigrationKey::new(7)).into();
        assert_eq!(err.to_string(), "duplicate migration key 7");
    }
}
