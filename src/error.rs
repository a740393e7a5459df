use thiserror::Error;

/// Main error type for Quarry operations
///
/// Query parsing itself never fails — malformed user input degrades the
/// query and is reported through diagnostics. This type covers the crate's
/// genuinely fallible edges.
#[derive(Error, Debug)]
pub enum QuarryError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Quarry operations
pub type Result<T> = std::result::Result<T, QuarryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuarryError::InvalidQuery("unexpected ':'".to_string());
        assert_eq!(err.to_string(), "Invalid query: unexpected ':'");

        let err = QuarryError::Config("empty key".to_string());
        assert_eq!(err.to_string(), "Configuration error: empty key");
    }
}
