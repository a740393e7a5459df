//! Recursive descent parser for faceted query strings
//!
//! # Grammar
//!
//! ```text
//! query    := qelem (ELEM_SEPARATOR qelem)*
//! qelem    := string spec_opt
//! spec_opt := ε | SPEC_SEPARATOR string
//! string   := chars | QUOTE chars QUOTE
//! chars    := char+
//! char     := UNESCAPED | ESCAPE <any character>
//! ```
//!
//! Colon-splitting happens once, at the top level of each element; colons
//! inside quoted or escaped content are literal.
//!
//! A syntax error discards the current element, records a diagnostic and
//! resumes at the next element separator, so one bad element does not take
//! down the rest of the query. Callers inspect the returned diagnostics
//! rather than matching on an error value.

use super::diagnostic::Diagnostic;
use super::lexer::{Lexer, Spanned, Token};

/// One parsed query element: a term with an optional facet specifier
#[derive(Debug, Clone, PartialEq)]
pub struct QueryElement {
    /// Literal (unescaped) term text
    pub term: String,
    /// Literal text after the top-level colon, if any
    pub specifier: Option<String>,
    /// 1-based line of the element's first token
    pub line: u32,
    /// 1-based column of the element's first token
    pub column: u32,
}

/// Result of parsing a query string
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub elements: Vec<QueryElement>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// Whether any diagnostic invalidates the parse
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Parser for faceted query strings
///
/// Holds the lexer and one token of lookahead. A parser is built fresh per
/// parse call; it is consumed by [`parse`](QueryStringParser::parse).
pub struct QueryStringParser {
    lexer: Lexer,
    current: Spanned,
    diagnostics: Vec<Diagnostic>,
}

impl QueryStringParser {
    /// Create a new parser for the given query string
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the query string into a list of `(term, specifier)` elements
    pub fn parse(mut self) -> ParseOutput {
        let mut elements = Vec::new();

        self.skip_separators();
        while self.current.token != Token::Eof {
            if let Some(element) = self.parse_element() {
                elements.push(element);
            } else {
                self.recover();
            }

            match self.current.token {
                Token::Eof => break,
                Token::ElemSeparator => self.skip_separators(),
                _ => {
                    self.syntax_error(format!(
                        "unexpected {} after query element",
                        self.current.token.describe()
                    ));
                    self.recover();
                }
            }
        }

        let mut diagnostics = self.lexer.take_diagnostics();
        diagnostics.append(&mut self.diagnostics);
        ParseOutput {
            elements,
            diagnostics,
        }
    }

    /// Parse: qelem := string spec_opt
    fn parse_element(&mut self) -> Option<QueryElement> {
        let (line, column) = (self.current.line, self.current.column);
        let term = self.parse_string()?;

        let specifier = if self.current.token == Token::SpecSeparator {
            self.advance();
            Some(self.parse_string()?)
        } else {
            None
        };

        Some(QueryElement {
            term,
            specifier,
            line,
            column,
        })
    }

    /// Parse: string := chars | QUOTE chars QUOTE
    fn parse_string(&mut self) -> Option<String> {
        if self.current.token == Token::Quote {
            return self.parse_quoted();
        }

        let mut text = String::new();
        let mut matched = false;
        loop {
            match &self.current.token {
                Token::Unescaped(s) => {
                    text.push_str(s);
                    matched = true;
                    self.advance();
                }
                Token::Escaped(c) => {
                    text.push(*c);
                    matched = true;
                    self.advance();
                }
                _ => break,
            }
        }

        if matched {
            Some(text)
        } else {
            self.syntax_error(format!(
                "expected a term, found {}",
                self.current.token.describe()
            ));
            None
        }
    }

    /// Parse the body of a quoted string, after the opening quote
    fn parse_quoted(&mut self) -> Option<String> {
        self.advance(); // consume opening quote

        let mut text = String::new();
        loop {
            match &self.current.token {
                Token::Unescaped(s) => {
                    text.push_str(s);
                    self.advance();
                }
                Token::Escaped(c) => {
                    text.push(*c);
                    self.advance();
                }
                Token::Quote => {
                    self.advance();
                    return Some(text);
                }
                // Only Eof can appear here; the lexer has already reported
                // the unterminated quote. Keep the recovered content.
                _ => return Some(text),
            }
        }
    }

    /// Skip past the rest of a malformed element
    fn recover(&mut self) {
        while !matches!(self.current.token, Token::ElemSeparator | Token::Eof) {
            self.advance();
        }
    }

    fn skip_separators(&mut self) {
        while self.current.token == Token::ElemSeparator {
            self.advance();
        }
    }

    fn syntax_error(&mut self, message: String) {
        self.diagnostics.push(Diagnostic::error(
            message,
            self.current.line,
            self.current.column,
        ));
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }
}
