//! Configuration document model
//!
//! In-memory representation of a persisted product configuration: a flat,
//! insertion-ordered mapping from dotted property keys to JSON values, plus
//! the pending list of variable-relocation directives a migration run
//! produces.
//!
//! # Core Concepts
//!
//! - [`ConfigDocument`]: the property tree being migrated
//! - [`PropertyKey`]: dotted string key into the flat namespace
//! - [`RelocationDirective`]: "move this value to the external variable
//!   store" record, append-only during a run
//!
//! Migrations only ever add or overwrite properties and append directives;
//! the document deliberately exposes no removal API.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod directive;
mod document;
mod error;
mod key;

pub use directive::RelocationDirective;
pub use document::ConfigDocument;
pub use error::DocumentError;
pub use key::PropertyKey;
