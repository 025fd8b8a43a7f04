//! Variable-relocation directives

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record instructing that a value be moved out of the inline document
/// and into the external variable store
///
/// Created at most once per source field per migration run and never
/// mutated afterwards; an external relocation service consumes the list
/// after the engine returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelocationDirective {
    /// The value (or value-holding structure) being moved out
    pub from: Value,

    /// Name of the external variable that receives it
    pub to_variable: String,
}

impl RelocationDirective {
    /// Create a new directive
    #[inline]
    #[must_use]
    pub fn new(from: impl Into<Value>, to_variable: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to_variable: to_variable.into(),
        }
    }
}
