//! Migration units
//!
//! Provides the [`Migration`] trait, the contract every versioned
//! transformation step implements, and [`RelocationTable`] for units whose
//! whole effect is a declared list of value relocations.

use confmig_document::{ConfigDocument, RelocationDirective};

use crate::error::TransformError;
use crate::key::MigrationKey;
use crate::version::SupportedVersion;

/// One named, versioned, forward-only transformation step
///
/// Pure with respect to its declared inputs: a unit reads zero or more
/// properties, conditionally writes zero or more properties, and may append
/// relocation directives. It never deletes unrelated fields, performs no
/// I/O, and relies on no randomness or wall-clock time.
///
/// # Invariants
/// - `migrate` must be safe to invoke on a document that has already passed
///   through every unit with a smaller key.
/// - Optional fields written by conditionally-skipped earlier units must
///   not be assumed present; read them with explicit presence checks.
pub trait Migration: Send + Sync + std::fmt::Debug {
    /// Sort key, unique within a registry
    fn key(&self) -> MigrationKey;

    /// Human-readable description (non-functional, used in diagnostics)
    fn description(&self) -> &'static str;

    /// Single version this unit restricts itself to, if any
    ///
    /// Most units apply to the whole supported set and return `None`.
    /// Version-gated dispatch checks this immediately before invoking the
    /// unit; see [`MigrationEngine::apply_range_for`].
    ///
    /// [`MigrationEngine::apply_range_for`]: crate::MigrationEngine::apply_range_for
    fn restricted_to(&self) -> Option<SupportedVersion> {
        None
    }

    /// Apply the transformation to the document, in place
    ///
    /// # Errors
    /// Returns [`TransformError::MissingField`] only when a documented
    /// required input path is absent. Absent optional fields mean "does not
    /// apply", never an error.
    fn migrate(&self, document: &mut ConfigDocument) -> Result<(), TransformError>;
}

/// One declared relocation: a source property and the variable that
/// receives its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocationPair {
    /// Dotted key of the inline value being moved out
    pub source: &'static str,

    /// Name of the receiving external variable
    pub variable: &'static str,
}

impl RelocationPair {
    /// Create a pair
    #[inline]
    #[must_use]
    pub const fn new(source: &'static str, variable: &'static str) -> Self {
        Self { source, variable }
    }
}

/// Declarative bulk-relocation data attached to a unit
///
/// A unit whose effect is "move these values to the variable store"
/// declares its pairs as static data; the skip rule lives here, once,
/// instead of being restated inside every such unit: a source that
/// resolves to JSON `null` or is absent produces no directive, silently.
#[derive(Debug, Clone, Copy)]
pub struct RelocationTable {
    pairs: &'static [RelocationPair],
}

impl RelocationTable {
    /// Create a table over a static pair list
    #[inline]
    #[must_use]
    pub const fn new(pairs: &'static [RelocationPair]) -> Self {
        Self { pairs }
    }

    /// The declared pairs, in order
    #[inline]
    #[must_use]
    pub const fn pairs(&self) -> &'static [RelocationPair] {
        self.pairs
    }

    /// Append one directive per pair whose source resolves to a non-null
    /// value, in declaration order
    pub fn apply(&self, document: &mut ConfigDocument) {
        for pair in self.pairs {
            let value = document.get_non_null(pair.source).cloned();
            if let Some(value) = value {
                document.push_relocation(RelocationDirective::new(value, pair.variable));
            }
        }
    }
}
