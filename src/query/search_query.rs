//! Structured query model
//!
//! Wraps the parsed `(term, specifier)` elements into the shape the index
//! layer consumes: an ordered keyword list, a specification map validated
//! against the recognized facet keys, and a validity flag. A `SearchQuery`
//! is built once per request and is immutable afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::diagnostic::Diagnostic;
use super::parser::QueryStringParser;
use crate::config::QueryConfig;
use crate::error::{QuarryError, Result};

/// A parsed and validated search query
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchQuery {
    keywords: Vec<String>,
    specifications: HashMap<String, String>,
    valid: bool,
    diagnostics: Vec<Diagnostic>,
}

impl SearchQuery {
    /// Parse a raw query string against the configured facet keys
    ///
    /// Never fails: malformed input produces a best-effort query with
    /// `is_valid() == false` and diagnostics describing what went wrong.
    ///
    /// A blank input is a deliberate sentinel: it yields a single empty
    /// keyword so downstream filter building always has a keyword list to
    /// join.
    pub fn parse(input: &str, config: &QueryConfig) -> SearchQuery {
        if input.trim().is_empty() {
            return SearchQuery {
                keywords: vec![String::new()],
                specifications: HashMap::new(),
                valid: true,
                diagnostics: Vec::new(),
            };
        }

        let output = QueryStringParser::new(input).parse();
        let mut diagnostics = output.diagnostics;

        let mut keywords = Vec::new();
        let mut specifications = HashMap::new();

        for element in output.elements {
            match element.specifier {
                None => {
                    if !element.term.is_empty() {
                        keywords.push(element.term);
                    }
                }
                Some(value) => {
                    if config.recognizes(&element.term) {
                        // Later occurrences of the same key overwrite
                        // earlier ones; an empty value is not stored.
                        if !value.is_empty() {
                            specifications.insert(element.term, value);
                        }
                    } else {
                        // The rejected pair is dropped entirely: it becomes
                        // neither a specification nor a keyword.
                        diagnostics.push(Diagnostic::error(
                            format!("unrecognized specification key '{}'", element.term),
                            element.line,
                            element.column,
                        ));
                    }
                }
            }
        }

        let valid = !diagnostics.iter().any(Diagnostic::is_error);
        if valid {
            debug!(
                "parsed query string: {} keyword(s), {} specification(s)",
                keywords.len(),
                specifications.len()
            );
        } else {
            warn!(
                "query string parsed with errors: {}",
                diagnostics
                    .iter()
                    .filter(|d| d.is_error())
                    .map(Diagnostic::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            );
        }

        SearchQuery {
            keywords,
            specifications,
            valid,
            diagnostics,
        }
    }

    /// Keywords in appearance order, duplicates preserved
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Look up the value of a recognized specification key
    pub fn specification(&self, key: &str) -> Option<&str> {
        self.specifications.get(key).map(String::as_str)
    }

    /// All stored specifications, for bulk consumption by filter building
    pub fn specifications(&self) -> &HashMap<String, String> {
        &self.specifications
    }

    /// Whether the query parsed without lexical, syntactic or validation
    /// errors
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Diagnostics collected during parsing and validation
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Convert into a hard failure for callers that refuse invalid queries
    pub fn ensure_valid(&self) -> Result<()> {
        if self.valid {
            return Ok(());
        }
        let detail = self
            .diagnostics
            .iter()
            .filter(|d| d.is_error())
            .map(Diagnostic::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(QuarryError::InvalidQuery(detail))
    }
}
