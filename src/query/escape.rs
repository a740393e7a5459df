//! Escaping helpers for query syntax
//!
//! Inverse of the lexer's escape rules: text produced here parses back to
//! the same literal term or value.

/// Escape a literal term for use in a query string
///
/// Backslash-escapes the characters the lexer treats specially in the
/// default context (`\`, `"`, `:`, whitespace) as well as control
/// characters, so the result always round-trips through the parser.
pub fn escape(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '"' | ':') || ch.is_whitespace() || ch.is_control() {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Render a literal value as a quoted string
///
/// Inside quotes only `"` and `\` need escaping; whitespace and colons are
/// literal there.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if matches!(ch, '\\' | '"') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
