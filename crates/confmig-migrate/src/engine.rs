//! Migration engine
//!
//! Provides [`MigrationEngine`], which folds an ordered range of units over
//! a configuration document and collects the relocation directives they
//! append.

use confmig_document::{ConfigDocument, RelocationDirective};
use serde::Serialize;

use crate::error::{MigrateError, TransformError};
use crate::key::MigrationKey;
use crate::registry::MigrationRegistry;
use crate::unit::Migration;
use crate::version::SupportedVersion;

/// Result of a successful engine invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationOutcome {
    /// The fully migrated document, with no directives left pending on it
    pub document: ConfigDocument,

    /// Every directive appended during the run (plus any that were already
    /// pending on the input document), in append order
    pub relocations: Vec<RelocationDirective>,
}

/// Applies registry ranges to documents
///
/// Owns no state beyond a borrow of the registry; each invocation works on
/// a private clone of the caller's document, so a failed call leaves the
/// caller's copy untouched and concurrent invocations over different
/// documents share nothing mutable.
#[derive(Debug, Clone, Copy)]
pub struct MigrationEngine<'r> {
    registry: &'r MigrationRegistry,
}

impl<'r> MigrationEngine<'r> {
    /// Create an engine over a registry
    #[inline]
    #[must_use]
    pub const fn new(registry: &'r MigrationRegistry) -> Self {
        Self { registry }
    }

    /// Apply every unit with key in `(after, up_to]`, ascending
    ///
    /// Version resolution has already happened: both bounds are registry
    /// keys. An empty range is the identity — the outcome holds a deep-equal
    /// document and no directives.
    ///
    /// # Errors
    /// [`MigrateError::MissingField`] if a unit's required input path is
    /// absent. The call aborts at the failing unit and the partial result
    /// is discarded.
    pub fn apply_range(
        &self,
        document: &ConfigDocument,
        after: MigrationKey,
        up_to: MigrationKey,
    ) -> Result<MigrationOutcome, MigrateError> {
        self.fold(document, self.registry.range(after, up_to), None)
    }

    /// Same as [`Self::apply_range`], under version-gated dispatch
    ///
    /// `target` must already have passed the supported-set gate (it exists,
    /// being a [`SupportedVersion`]). Each unit's own restriction is checked
    /// immediately before that unit runs.
    ///
    /// # Errors
    /// [`MigrateError::UnsupportedVersion`] if a unit in range restricts
    /// itself to a version other than `target`; [`MigrateError::MissingField`]
    /// as for [`Self::apply_range`].
    pub fn apply_range_for(
        &self,
        document: &ConfigDocument,
        after: MigrationKey,
        up_to: MigrationKey,
        target: SupportedVersion,
    ) -> Result<MigrationOutcome, MigrateError> {
        self.fold(document, self.registry.range(after, up_to), Some(target))
    }

    /// Apply every registered unit from the beginning
    ///
    /// # Errors
    /// As for [`Self::apply_range`].
    pub fn apply_all(&self, document: &ConfigDocument) -> Result<MigrationOutcome, MigrateError> {
        self.fold(document, self.registry.all(), None)
    }

    fn fold<'u>(
        &self,
        document: &ConfigDocument,
        units: impl Iterator<Item = &'u dyn Migration>,
        target: Option<SupportedVersion>,
    ) -> Result<MigrationOutcome, MigrateError> {
        let mut working = document.clone();
        let mut applied = 0usize;

        for unit in units {
            if let Some(target) = target {
                check_restriction(unit, target)?;
            }

            tracing::debug!(
                key = %unit.key(),
                description = unit.description(),
                "applying migration"
            );
            unit.migrate(&mut working).map_err(|err| {
                tracing::error!(
                    key = %unit.key(),
                    description = unit.description(),
                    %err,
                    "migration aborted"
                );
                unit_failure(unit, err)
            })?;
            applied += 1;
        }

        let relocations = working.take_relocations();
        tracing::info!(
            applied,
            relocations = relocations.len(),
            "migration range complete"
        );
        Ok(MigrationOutcome {
            document: working,
            relocations,
        })
    }
}

/// Reject a unit restricted to a version other than the dispatch target
fn check_restriction(unit: &dyn Migration, target: SupportedVersion) -> Result<(), MigrateError> {
    match unit.restricted_to() {
        Some(required) if required != target => {
            tracing::error!(
                key = %unit.key(),
                %required,
                %target,
                "migration restricted to a different version"
            );
            Err(MigrateError::UnsupportedVersion(target.to_string()))
        }
        _ => Ok(()),
    }
}

fn unit_failure(unit: &dyn Migration, err: TransformError) -> MigrateError {
    match err {
        TransformError::MissingField { field } => MigrateError::MissingField {
            key: unit.key(),
            description: unit.description(),
            field,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    /// Writes a marker field other units can observe.
    #[derive(Debug)]
    struct Writer {
        key: u64,
        field: &'static str,
        value: &'static str,
    }

    impl Migration for Writer {
        fn key(&self) -> MigrationKey {
            MigrationKey::new(self.key)
        }

        fn description(&self) -> &'static str {
            "write a marker field"
        }

        fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
            document.set(self.field, json!(self.value));
            Ok(())
        }
    }

    /// Derives a field from one an earlier unit wrote; fails if it is
    /// absent.
    #[derive(Debug)]
    struct Reader {
        key: u64,
        source: &'static str,
        derived: &'static str,
    }

    impl Migration for Reader {
        fn key(&self) -> MigrationKey {
            MigrationKey::new(self.key)
        }

        fn description(&self) -> &'static str {
            "derive from an earlier unit's field"
        }

        fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
            let value = document
                .get(self.source)
                .cloned()
                .ok_or_else(|| TransformError::missing_field(self.source))?;
            document.set(self.derived, value);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Restricted {
        key: u64,
        version: SupportedVersion,
    }

    impl Migration for Restricted {
        fn key(&self) -> MigrationKey {
            MigrationKey::new(self.key)
        }

        fn description(&self) -> &'static str {
            "restricted unit"
        }

        fn restricted_to(&self) -> Option<SupportedVersion> {
            Some(self.version)
        }

        fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
            document.set(".properties.restricted_ran", json!(true));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Relocator {
        key: u64,
    }

    impl Migration for Relocator {
        fn key(&self) -> MigrationKey {
            MigrationKey::new(self.key)
        }

        fn description(&self) -> &'static str {
            "append one directive"
        }

        fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError> {
            document.push_relocation(RelocationDirective::new(
                json!("moved"),
                "some-variable",
            ));
            Ok(())
        }
    }

    fn pair_registry() -> MigrationRegistry {
        MigrationRegistry::with_units(vec![
            Box::new(Writer {
                key: 100,
                field: ".properties.marker",
                value: "from-a",
            }),
            Box::new(Reader {
                key: 200,
                source: ".properties.marker",
                derived: ".properties.derived",
            }),
        ])
        .unwrap()
    }

    #[test]
    fn units_apply_in_ascending_key_order() {
        let registry = pair_registry();
        let engine = MigrationEngine::new(&registry);

        let outcome = engine
            .apply_range(&ConfigDocument::new(), MigrationKey::MIN, MigrationKey::new(200))
            .unwrap();

        // Unit 200 saw the field unit 100 wrote.
        assert_eq!(
            outcome.document.get(".properties.derived"),
            Some(&json!("from-a"))
        );
    }

    #[test]
    fn empty_range_is_identity() {
        let registry = pair_registry();
        let engine = MigrationEngine::new(&registry);
        let mut document = ConfigDocument::new();
        document.set(".properties.x", json!({"value": 1}));

        let outcome = engine
            .apply_range(&document, MigrationKey::new(200), MigrationKey::new(200))
            .unwrap();

        assert_eq!(outcome.document, document);
        assert!(outcome.relocations.is_empty());
    }

    #[test]
    fn missing_field_aborts_and_leaves_input_untouched() {
        // Only the reader in range, and nothing wrote its source.
        let registry = pair_registry();
        let engine = MigrationEngine::new(&registry);
        let mut document = ConfigDocument::new();
        document.set(".properties.x", json!("before"));
        let before = document.clone();

        let err = engine
            .apply_range(&document, MigrationKey::new(100), MigrationKey::new(200))
            .unwrap_err();

        match err {
            MigrateError::MissingField {
                key,
                description,
                field,
            } => {
                assert_eq!(key, MigrationKey::new(200));
                assert_eq!(description, "derive from an earlier unit's field");
                assert_eq!(field, ".properties.marker");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(document, before);
    }

    #[test]
    fn restricted_unit_rejects_other_versions() {
        let registry = MigrationRegistry::with_units(vec![Box::new(Restricted {
            key: 100,
            version: SupportedVersion::V1_6,
        })])
        .unwrap();
        let engine = MigrationEngine::new(&registry);

        let err = engine
            .apply_range_for(
                &ConfigDocument::new(),
                MigrationKey::MIN,
                MigrationKey::new(100),
                SupportedVersion::V1_7,
            )
            .unwrap_err();

        match err {
            MigrateError::UnsupportedVersion(raw) => assert_eq!(raw, "1.7"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn restricted_unit_runs_on_its_own_version() {
        let registry = MigrationRegistry::with_units(vec![Box::new(Restricted {
            key: 100,
            version: SupportedVersion::V1_6,
        })])
        .unwrap();
        let engine = MigrationEngine::new(&registry);

        let outcome = engine
            .apply_range_for(
                &ConfigDocument::new(),
                MigrationKey::MIN,
                MigrationKey::new(100),
                SupportedVersion::V1_6,
            )
            .unwrap();

        assert_eq!(
            outcome.document.get(".properties.restricted_ran"),
            Some(&json!(true))
        );
    }

    #[test]
    fn unrestricted_units_ignore_the_dispatch_target() {
        let registry = pair_registry();
        let engine = MigrationEngine::new(&registry);

        let outcome = engine
            .apply_range_for(
                &ConfigDocument::new(),
                MigrationKey::MIN,
                MigrationKey::new(200),
                SupportedVersion::V1_5,
            )
            .unwrap();

        assert!(outcome.document.contains(".properties.derived"));
    }

    #[test]
    fn directives_are_collected_off_the_document() {
        let registry =
            MigrationRegistry::with_units(vec![Box::new(Relocator { key: 100 })]).unwrap();
        let engine = MigrationEngine::new(&registry);

        let outcome = engine
            .apply_all(&ConfigDocument::new())
            .unwrap();

        assert_eq!(outcome.relocations.len(), 1);
        assert_eq!(outcome.relocations[0].from, Value::String("moved".into()));
        // The outcome document carries no pending directives of its own.
        assert!(outcome.document.relocations().is_empty());
    }

    #[test]
    fn preexisting_directives_are_carried_through() {
        let registry =
            MigrationRegistry::with_units(vec![Box::new(Relocator { key: 100 })]).unwrap();
        let engine = MigrationEngine::new(&registry);
        let mut document = ConfigDocument::new();
        document.push_relocation(RelocationDirective::new(json!("old"), "older-variable"));

        let outcome = engine.apply_all(&document).unwrap();

        assert_eq!(outcome.relocations.len(), 2);
        assert_eq!(outcome.relocations[0].to_variable, "older-variable");
        assert_eq!(outcome.relocations[1].to_variable, "some-variable");
    }

    #[test]
    fn reapplying_from_current_version_is_a_no_op() {
        let registry = pair_registry();
        let engine = MigrationEngine::new(&registry);

        let migrated = engine
            .apply_range(&ConfigDocument::new(), MigrationKey::MIN, MigrationKey::new(200))
            .unwrap();
        let again = engine
            .apply_range(&migrated.document, MigrationKey::new(200), MigrationKey::new(200))
            .unwrap();

        assert_eq!(again.document, migrated.document);
        assert!(again.relocations.is_empty());
    }
}
