//! Lexer for faceted query strings
//!
//! Tokenizes user-entered search strings into a stream of tokens. The lexer
//! runs in one of three contexts tracked on a mode stack: the default
//! context, the quoted-string context entered by `"`, and the escaped
//! context entered by `\` (which makes exactly one character literal and
//! then pops back to the context beneath it).
//!
//! Malformed input never aborts the lexer: unrecognized characters are
//! skipped with a diagnostic, and an unterminated quote or escape at end of
//! input is reported and tokenization ends at `Eof`.

use super::diagnostic::Diagnostic;

/// Token types for query string parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A maximal run of literal characters
    Unescaped(String),
    /// A single character made literal by a preceding backslash
    Escaped(char),
    /// A quotation mark opening or closing a quoted string
    Quote,
    /// Colon separating a term from its facet value
    SpecSeparator,
    /// A run of whitespace separating query elements
    ElemSeparator,
    /// End of input
    Eof,
}

impl Token {
    /// Human-readable description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            Token::Unescaped(s) => format!("'{}'", s),
            Token::Escaped(c) => format!("escaped '{}'", c),
            Token::Quote => "'\"'".to_string(),
            Token::SpecSeparator => "':'".to_string(),
            Token::ElemSeparator => "whitespace".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// A token together with the 1-based position of its first character
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub line: u32,
    pub column: u32,
}

/// Lexing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    Quoted,
    Escaped,
}

/// Lexer for tokenizing query strings
///
/// A lexer holds its mode stack on the instance, so a fresh one is built
/// per parse call rather than shared across queries.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    modes: Vec<Mode>,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given input string
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            modes: vec![Mode::Default],
            diagnostics: Vec::new(),
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Spanned {
        loop {
            let (line, column) = (self.line, self.column);

            if self.position >= self.input.len() {
                if self.mode() == Mode::Quoted {
                    self.diagnostics.push(Diagnostic::error(
                        "unterminated quoted string",
                        line,
                        column,
                    ));
                    self.modes.pop();
                }
                return Spanned {
                    token: Token::Eof,
                    line,
                    column,
                };
            }

            let ch = self.current_char();

            if self.mode() == Mode::Quoted {
                match ch {
                    '"' => {
                        self.advance();
                        self.modes.pop();
                        return Spanned {
                            token: Token::Quote,
                            line,
                            column,
                        };
                    }
                    '\\' => {
                        if let Some(spanned) = self.read_escaped(line, column) {
                            return spanned;
                        }
                    }
                    // Everything except the closing quote and backslash is
                    // literal inside quotes, whitespace and colons included.
                    _ => return self.read_run(line, column),
                }
                continue;
            }

            match ch {
                ':' => {
                    self.advance();
                    return Spanned {
                        token: Token::SpecSeparator,
                        line,
                        column,
                    };
                }
                '"' => {
                    self.advance();
                    self.modes.push(Mode::Quoted);
                    return Spanned {
                        token: Token::Quote,
                        line,
                        column,
                    };
                }
                '\\' => {
                    if let Some(spanned) = self.read_escaped(line, column) {
                        return spanned;
                    }
                }
                c if c.is_whitespace() => {
                    while self.position < self.input.len()
                        && self.current_char().is_whitespace()
                    {
                        self.advance();
                    }
                    return Spanned {
                        token: Token::ElemSeparator,
                        line,
                        column,
                    };
                }
                c if c.is_control() => {
                    self.diagnostics.push(Diagnostic::warning(
                        format!("unrecognized character {:?}", c),
                        line,
                        column,
                    ));
                    self.advance();
                }
                _ => return self.read_run(line, column),
            }
        }
    }

    /// Drain the diagnostics collected so far
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Consume a backslash and the single character it makes literal
    ///
    /// Returns `None` when the backslash is the last character of the
    /// input; the dangling escape is reported and lexing continues at Eof.
    fn read_escaped(&mut self, line: u32, column: u32) -> Option<Spanned> {
        self.advance(); // consume '\'
        self.modes.push(Mode::Escaped);

        if self.position >= self.input.len() {
            self.diagnostics.push(Diagnostic::error(
                "unterminated escape at end of input",
                line,
                column,
            ));
            self.modes.pop();
            return None;
        }

        let ch = self.current_char();
        self.advance();
        self.modes.pop();

        Some(Spanned {
            token: Token::Escaped(ch),
            line,
            column,
        })
    }

    /// Read a maximal run of literal characters for the current mode
    fn read_run(&mut self, line: u32, column: u32) -> Spanned {
        let quoted = self.mode() == Mode::Quoted;
        let mut text = String::new();

        while self.position < self.input.len() {
            let ch = self.current_char();
            let literal = if quoted {
                ch != '"' && ch != '\\'
            } else {
                ch != ':' && ch != '"' && ch != '\\' && !ch.is_whitespace() && !ch.is_control()
            };
            if !literal {
                break;
            }
            text.push(ch);
            self.advance();
        }

        Spanned {
            token: Token::Unescaped(text),
            line,
            column,
        }
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn advance(&mut self) {
        if self.current_char() == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn mode(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Default)
    }
}
