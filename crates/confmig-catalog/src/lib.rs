//! Built-in migration catalog
//!
//! The concrete migration units shipped with the product, one module per
//! unit, keyed by the release stamp that introduced them:
//!
//! - [`ContainerNetworkingFlatten`] (201708110930)
//! - [`CredhubSimpleCredentials`] (201708241712)
//! - [`NotificationsEncryptionKeyType`] (201708251040)
//! - [`MetronAgentDeploymentName`] (201809181044)
//!
//! [`builtin_registry`] wires them into a ready [`MigrationRegistry`].

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod container_networking;
mod credhub;
mod metron;
mod notifications;

pub use container_networking::ContainerNetworkingFlatten;
pub use credhub::CredhubSimpleCredentials;
pub use metron::MetronAgentDeploymentName;
pub use notifications::NotificationsEncryptionKeyType;

use confmig_migrate::{Migration, MigrationRegistry, RegistryError};

/// Every built-in unit, in key order
#[must_use]
pub fn builtin_migrations() -> Vec<Box<dyn Migration>> {
    vec![
        Box::new(ContainerNetworkingFlatten),
        Box::new(CredhubSimpleCredentials),
        Box::new(NotificationsEncryptionKeyType),
        Box::new(MetronAgentDeploymentName),
    ]
}

/// Registry holding every built-in unit
///
/// # Errors
/// Returns [`RegistryError::DuplicateKey`] if the catalog itself is
/// inconsistent — a programming error caught at startup.
pub fn builtin_registry() -> Result<MigrationRegistry, RegistryError> {
    MigrationRegistry::with_units(builtin_migrations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use confmig_migrate::MigrationKey;

    #[test]
    fn builtin_keys_are_unique_and_ascending() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.len(), 4);

        let keys: Vec<_> = registry.all().map(Migration::key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert_eq!(keys.first(), Some(&MigrationKey::new(201708110930)));
        assert_eq!(keys.last(), Some(&MigrationKey::new(201809181044)));
    }

    #[test]
    fn no_builtin_unit_is_version_restricted() {
        for unit in builtin_migrations() {
            assert_eq!(unit.restricted_to(), None, "{}", unit.key());
        }
    }
}
