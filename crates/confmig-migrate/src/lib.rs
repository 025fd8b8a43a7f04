//! Versioned migration core
//!
//! Ordered registry and engine that bring a persisted configuration
//! document from one known version to another, one forward-only
//! transformation at a time.
//!
//! # Core Concepts
//!
//! - [`Migration`]: one named, versioned transformation unit
//! - [`MigrationKey`]: monotonic, timestamp-like sort key
//! - [`MigrationRegistry`]: immutable ordered collection with range lookup
//! - [`MigrationEngine`]: folds a key range over a document and collects
//!   relocation directives
//! - [`RelocationTable`]: declarative bulk-relocation data with a uniform
//!   null/absent skip rule
//! - [`SupportedVersion`]: the fixed set a run may target
//!
//! # Example
//!
//! ```rust,ignore
//! use confmig_migrate::{MigrationEngine, MigrationKey, MigrationRegistry};
//!
//! let registry = MigrationRegistry::with_units(units)?;
//! let engine = MigrationEngine::new(&registry);
//!
//! // Bring a 1.5-era document up to the 1.6 cut.
//! let outcome = engine.apply_range(&document, from_key, to_key)?;
//! persist(outcome.document);
//! relocate(outcome.relocations);
//! ```
//!
//! Failure in any unit aborts the whole call; the caller's document is
//! never left partially migrated.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod engine;
mod error;
mod key;
mod registry;
mod unit;
mod version;

pub use engine::{MigrationEngine, MigrationOutcome};
pub use error::{MigrateError, RegistryError, TransformError};
pub use key::MigrationKey;
pub use registry::MigrationRegistry;
pub use unit::{Migration, RelocationPair, RelocationTable};
pub use version::SupportedVersion;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
