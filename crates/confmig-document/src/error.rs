//! Document error types

/// Errors raised by document parsing and serialization
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Input was not valid JSON in the expected shape
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Input was not valid YAML in the expected shape
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Serialization failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigDocument;

    #[test]
    fn invalid_json_display_names_the_cause() {
        let err = ConfigDocument::from_json("{").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidJson(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn invalid_yaml_display_names_the_cause() {
        let err = ConfigDocument::from_yaml("[unclosed").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidYaml(_)));
    }
}
