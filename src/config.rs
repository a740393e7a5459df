use serde::{Deserialize, Serialize};

use crate::error::{QuarryError, Result};

/// Query parsing configuration
///
/// Carries the allow-list of facet keys the query language recognizes as
/// specifications. The grammar itself is key-agnostic; the allow-list is
/// supplied by the caller and applied by the query model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryConfig {
    pub specification_keys: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        // Facets of the research-project portal index
        Self {
            specification_keys: vec![
                "country".to_string(),
                "programme".to_string(),
                "subprogramme".to_string(),
                "coordinator".to_string(),
                "participant".to_string(),
                "year".to_string(),
            ],
        }
    }
}

impl QueryConfig {
    /// Replace the recognized specification keys
    pub fn with_specification_keys(mut self, keys: Vec<String>) -> Self {
        self.specification_keys = keys;
        self
    }

    /// Whether a key is a recognized specification
    pub fn recognizes(&self, key: &str) -> bool {
        self.specification_keys.iter().any(|k| k == key)
    }

    /// Check that every configured key can actually be written in a query
    ///
    /// A key containing a separator, quote or backslash could never match a
    /// parsed term, so such configurations are rejected up front.
    pub fn validate(&self) -> Result<()> {
        for key in &self.specification_keys {
            if key.is_empty() {
                return Err(QuarryError::Config(
                    "specification key must not be empty".to_string(),
                ));
            }
            if key
                .chars()
                .any(|c| matches!(c, ':' | '"' | '\\') || c.is_whitespace())
            {
                return Err(QuarryError::Config(format!(
                    "specification key '{}' contains reserved characters",
                    key
                )));
            }
        }
        Ok(())
    }
}
