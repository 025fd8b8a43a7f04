//! Dotted property keys
//!
//! Provides [`PropertyKey`] for addressing properties in the flat document
//! namespace.

use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Key into the flat property namespace of a configuration document
///
/// Keys are dotted identifiers as they appear in the persisted document,
/// e.g. `.properties.container_networking.value`. The namespace is
/// schemaless: migrations may introduce arbitrary new keys at runtime, so
/// no segment validation is enforced beyond the string form itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Create a key from its dotted string form
    #[inline]
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The dotted string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the non-empty dot-separated segments
    ///
    /// A leading dot (the common form in persisted documents) yields no
    /// empty first segment.
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PropertyKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for PropertyKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl Borrow<str> for PropertyKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_display_is_raw_form() {
        let key = PropertyKey::from(".properties.container_networking.value");
        assert_eq!(key.to_string(), ".properties.container_networking.value");
    }

    #[test]
    fn key_segments_skip_leading_dot() {
        let key = PropertyKey::from(".mysql.uaadb_credentials");
        let segments: Vec<_> = key.segments().collect();
        assert_eq!(segments, vec!["mysql", "uaadb_credentials"]);
    }

    #[test]
    fn key_segments_without_leading_dot() {
        let key = PropertyKey::from("a.b.c");
        assert_eq!(key.segments().count(), 3);
    }

    #[test]
    fn key_borrow_matches_str() {
        let key = PropertyKey::from(".x");
        let borrowed: &str = key.borrow();
        assert_eq!(borrowed, ".x");
    }

    #[test]
    fn key_serde_is_transparent() {
        let key = PropertyKey::from(".properties.enable_cf_metric_name");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\".properties.enable_cf_metric_name\"");
    }
}
