//! The configuration document
//!
//! Provides [`ConfigDocument`], the in-memory form of a persisted product
//! configuration that migrations transform.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::directive::RelocationDirective;
use crate::error::DocumentError;
use crate::key::PropertyKey;

/// The versioned property tree being migrated
///
/// A flat namespace of dotted keys over a logically nested document, plus
/// the pending variable-relocation directives appended during a migration
/// run. Insertion order of properties is preserved across parse and
/// serialize, matching the persisted form.
///
/// # Invariants
/// - Properties are only ever added or overwritten, never deleted.
/// - `variable_migrations` is append-only while a run is in flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    properties: IndexMap<PropertyKey, Value>,

    /// Pending relocation directives; absent in documents persisted before
    /// the variable store existed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    variable_migrations: Vec<RelocationDirective>,
}

impl ConfigDocument {
    /// Create an empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a JSON string
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidJson`] if the input is not valid JSON
    /// in the expected shape.
    #[inline]
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(DocumentError::InvalidJson)
    }

    /// Parse from a YAML string
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidYaml`] if the input is not valid YAML
    /// in the expected shape.
    #[inline]
    pub fn from_yaml(yaml: &str) -> Result<Self, DocumentError> {
        serde_yaml::from_str(yaml).map_err(DocumentError::InvalidYaml)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    /// Returns [`DocumentError::Serialization`] if serialization fails
    /// (rare for JSON).
    #[inline]
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialization(e.to_string()))
    }

    /// Read a property
    ///
    /// Returns `None` for absent keys. A present key holding JSON `null`
    /// still returns `Some`; use [`Self::get_non_null`] where null and
    /// absent mean the same thing.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Read a property, treating JSON `null` as absent
    #[inline]
    #[must_use]
    pub fn get_non_null(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|value| !value.is_null())
    }

    /// Whether the key is present (even if null)
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Insert or overwrite a property
    #[inline]
    pub fn set(&mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    /// The full property mapping, in insertion order
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &IndexMap<PropertyKey, Value> {
        &self.properties
    }

    /// Append a pending relocation directive
    #[inline]
    pub fn push_relocation(&mut self, directive: RelocationDirective) {
        self.variable_migrations.push(directive);
    }

    /// The pending relocation directives, in append order
    #[inline]
    #[must_use]
    pub fn relocations(&self) -> &[RelocationDirective] {
        &self.variable_migrations
    }

    /// Move the pending directives out, leaving the document's list empty
    #[inline]
    #[must_use]
    pub fn take_relocations(&mut self) -> Vec<RelocationDirective> {
        std::mem::take(&mut self.variable_migrations)
    }
}
