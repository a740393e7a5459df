//! Structured parse diagnostics
//!
//! The lexer and parser never abort on malformed user input. Instead they
//! collect diagnostics describing what was skipped or misparsed, and the
//! caller decides how to surface them (log, HTTP warning, ignore).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How severe a diagnostic is
///
/// `Warning` diagnostics are fully recovered from and do not affect the
/// query's validity. `Error` diagnostics mark the query as invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single diagnostic emitted while parsing a query string
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// 1-based line of the offending input
    pub line: u32,
    /// 1-based column of the offending input
    pub column: u32,
}

impl Diagnostic {
    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line,
            column,
        }
    }

    /// Whether this diagnostic invalidates the query
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(
            f,
            "{} at {}:{}: {}",
            kind, self.line, self.column, self.message
        )
    }
}
