//! Integration tests for the faceted query language
//!
//! Exercises the full path from raw query string through the query model to
//! the filter seam the index layer consumes.

use quarry::query::{escape, quote};
use quarry::{Filter, QueryConfig, SearchQuery};

fn parse(input: &str) -> SearchQuery {
    SearchQuery::parse(input, &QueryConfig::default())
}

#[test]
fn test_plain_keyword_query() {
    let query = parse("nuclear");
    assert!(query.is_valid());
    assert_eq!(query.keywords(), ["nuclear"]);
    assert!(query.specifications().is_empty());
}

#[test]
fn test_plain_strings_parse_to_themselves() {
    for s in ["nuclear", "fp7", "a.b-c_d", "Ünïcödé", "2012"] {
        let query = parse(s);
        assert!(query.is_valid(), "{:?} should be valid", s);
        assert_eq!(query.keywords(), [s]);
        assert!(query.specifications().is_empty());
    }
}

#[test]
fn test_full_portal_query() {
    let query = parse("nuclear programme:fp7 country:\"Czech Republic\" \"subprogramme\":PEOPLE");
    assert!(query.is_valid());
    assert_eq!(query.keywords(), ["nuclear"]);
    assert_eq!(query.specification("programme"), Some("fp7"));
    assert_eq!(query.specification("country"), Some("Czech Republic"));
    assert_eq!(query.specification("subprogramme"), Some("PEOPLE"));
    assert_eq!(query.specifications().len(), 3);
}

#[test]
fn test_escaped_colon_yields_literal_keyword() {
    let query = parse("a\\:b");
    assert!(query.is_valid());
    assert_eq!(query.keywords(), ["a:b"]);
    assert!(query.specifications().is_empty());
}

#[test]
fn test_quoted_value_with_embedded_colon() {
    let query = parse("k:\"a:b\"");
    // `k` is not a recognized facet of the default config
    assert!(!query.is_valid());

    let config = QueryConfig::default().with_specification_keys(vec!["k".to_string()]);
    let query = SearchQuery::parse("k:\"a:b\"", &config);
    assert!(query.is_valid());
    assert_eq!(query.specification("k"), Some("a:b"));
}

#[test]
fn test_empty_query_sentinel() {
    let query = parse("");
    assert!(query.is_valid());
    assert_eq!(query.keywords(), [""]);
    assert!(query.specifications().is_empty());
}

#[test]
fn test_unrecognized_specification_key() {
    let query = parse("foo:bar");
    assert!(!query.is_valid());
    assert!(query.keywords().is_empty());
    assert!(query.specifications().is_empty());
}

#[test]
fn test_unterminated_quote_is_not_fatal() {
    let query = parse("country:\"Czech");
    assert!(!query.is_valid());
    assert_eq!(query.specification("country"), Some("Czech"));
}

#[test]
fn test_unterminated_escape_is_not_fatal() {
    let query = parse("nuclear\\");
    assert!(!query.is_valid());
    assert_eq!(query.keywords(), ["nuclear"]);
}

#[test]
fn test_escape_roundtrip_law() {
    let terms = ["a:b", "Czech Republic", "say \"hi\"", "back\\slash", "x"];
    for term in terms {
        let query = parse(&escape(term));
        assert!(query.is_valid(), "escape({:?}) should reparse cleanly", term);
        assert_eq!(query.keywords(), [term]);
    }
}

#[test]
fn test_specifier_roundtrip_law() {
    for value in ["fp7", "Czech Republic", "a:b", "quo\"ted"] {
        let input = format!("year:{}", quote(value));
        let query = parse(&input);
        assert!(query.is_valid(), "{:?} should reparse cleanly", input);
        assert_eq!(query.specification("year"), Some(value));
    }
}

#[test]
fn test_diagnostics_carry_positions() {
    let query = parse("nuclear foo:bar");
    assert!(!query.is_valid());
    assert_eq!(query.diagnostics().len(), 1);
    assert_eq!(query.diagnostics()[0].line, 1);
    assert_eq!(query.diagnostics()[0].column, 9);
}

#[test]
fn test_filters_from_query() {
    let query = parse("nuclear waste country:cz year:2012");
    let filters = Filter::from_query(&query);
    assert_eq!(
        filters,
        vec![
            Filter::keyword("nuclear"),
            Filter::keyword("waste"),
            Filter::facet("country", "cz"),
            Filter::facet("year", "2012"),
        ]
    );
}

#[test]
fn test_filters_from_blank_query() {
    let filters = Filter::from_query(&parse(""));
    assert_eq!(filters, vec![Filter::keyword("")]);
}

#[test]
fn test_partial_result_survives_bad_elements() {
    let query = parse("nuclear year: waste country:cz");
    assert!(!query.is_valid());
    assert_eq!(query.keywords(), ["nuclear", "waste"]);
    assert_eq!(query.specification("country"), Some("cz"));
}

#[test]
fn test_query_serializes_for_http_layer() {
    let query = parse("nuclear year:2012");
    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json["valid"], serde_json::json!(true));
    assert_eq!(json["keywords"], serde_json::json!(["nuclear"]));
    assert_eq!(json["specifications"]["year"], serde_json::json!("2012"));
    assert_eq!(json["diagnostics"], serde_json::json!([]));
}

#[test]
fn test_torture_inputs_never_panic() {
    let inputs = [
        "\\",
        "\"",
        ":",
        "::",
        ":::",
        "a:b:c:d",
        "\"\"\"",
        "\\\"",
        ":\"",
        "a\u{0}b",
        "\"unterminated with spaces and : colons",
        "k1:v1 k2:\"v 2\" trailing\\",
    ];
    for input in inputs {
        // Must return a result and a status, never panic or error out.
        let _ = parse(input);
    }
}
