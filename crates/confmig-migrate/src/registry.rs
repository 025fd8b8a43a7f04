//! Migration registry
//!
//! Provides [`MigrationRegistry`], the ordered collection of every known
//! migration unit. Built explicitly at process start and passed by
//! reference into the engine; immutable afterwards, so unsynchronized
//! concurrent reads are safe.

use std::collections::btree_map::{BTreeMap, Entry};
use std::ops::Bound;

use crate::error::RegistryError;
use crate::key::MigrationKey;
use crate::unit::Migration;

/// Ordered set of migration units, unique by key
///
/// The registry performs no transformation itself; it only answers ordered
/// lookups for the engine.
#[derive(Debug, Default)]
pub struct MigrationRegistry {
    units: BTreeMap<MigrationKey, Box<dyn Migration>>,
}

impl MigrationRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a unit list
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateKey`] if two units share a key.
    pub fn with_units(units: Vec<Box<dyn Migration>>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for unit in units {
            registry.register(unit)?;
        }
        Ok(registry)
    }

    /// Add a unit
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateKey`] if the key is already
    /// present. This is a programming error, fatal at startup.
    pub fn register(&mut self, unit: Box<dyn Migration>) -> Result<(), RegistryError> {
        match self.units.entry(unit.key()) {
            Entry::Occupied(occupied) => Err(RegistryError::DuplicateKey(*occupied.key())),
            Entry::Vacant(vacant) => {
                vacant.insert(unit);
                Ok(())
            }
        }
    }

    /// Look up a unit by exact key
    #[inline]
    #[must_use]
    pub fn get(&self, key: MigrationKey) -> Option<&dyn Migration> {
        self.units.get(&key).map(|unit| unit.as_ref())
    }

    /// Whether the key is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, key: MigrationKey) -> bool {
        self.units.contains_key(&key)
    }

    /// Number of registered units
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the registry holds no units
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units with key in the half-open-to-closed range `(after, up_to]`,
    /// ascending
    ///
    /// Lazy and restartable; an empty or inverted range yields an empty
    /// sequence, not an error.
    pub fn range(
        &self,
        after: MigrationKey,
        up_to: MigrationKey,
    ) -> impl Iterator<Item = &dyn Migration> + '_ {
        let bounds = if after < up_to {
            Some((Bound::Excluded(after), Bound::Included(up_to)))
        } else {
            None
        };
        bounds
            .into_iter()
            .flat_map(move |bounds| self.units.range(bounds))
            .map(|(_, unit)| unit.as_ref())
    }

    /// Every unit, ascending by key
    pub fn all(&self) -> impl Iterator<Item = &dyn Migration> + '_ {
        self.units.values().map(|unit| unit.as_ref())
    }
}
