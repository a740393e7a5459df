//! Faceted search query language
//!
//! This module parses user-entered search strings containing free-text
//! keywords and `key:value` facet specifications:
//!
//! - `nuclear waste` — two keywords
//! - `programme:fp7` — a facet specification
//! - `country:"Czech Republic"` — quoting keeps whitespace and colons literal
//! - `a\:b` — escaping embeds a literal colon in a keyword
//!
//! Parsing is best-effort: malformed input is reported through a structured
//! diagnostics list and degrades the query's validity instead of failing
//! the call.
//!
//! # Example
//!
//! ```rust
//! use quarry::{QueryConfig, SearchQuery};
//!
//! let query = SearchQuery::parse("nuclear programme:fp7", &QueryConfig::default());
//! assert!(query.is_valid());
//! assert_eq!(query.keywords(), ["nuclear"]);
//! assert_eq!(query.specification("programme"), Some("fp7"));
//! ```

pub mod diagnostic;
pub mod escape;
pub mod lexer;
pub mod parser;
pub mod search_query;

pub use diagnostic::{Diagnostic, Severity};
pub use escape::{escape, quote};
pub use lexer::{Lexer, Token};
pub use parser::{ParseOutput, QueryElement, QueryStringParser};
pub use search_query::SearchQuery;
