use serde::{Deserialize, Serialize};

use crate::query::SearchQuery;

/// Filter handed to the index layer's filter building
///
/// The index client joins `Keyword` filters into a full-text clause and
/// applies each `Facet` as an exact-match refinement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Free-text keyword
    Keyword(String),

    /// Facet refinement on a recognized specification key
    Facet { key: String, value: String },
}

impl Filter {
    /// Create a keyword filter
    pub fn keyword(term: impl Into<String>) -> Self {
        Filter::Keyword(term.into())
    }

    /// Create a facet filter
    pub fn facet(key: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Facet {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Build the filter list for a parsed query
    ///
    /// Keywords come first in appearance order (the blank-query sentinel
    /// included), followed by facets sorted by key so the output is
    /// deterministic.
    pub fn from_query(query: &SearchQuery) -> Vec<Filter> {
        let mut filters: Vec<Filter> = query
            .keywords()
            .iter()
            .cloned()
            .map(Filter::Keyword)
            .collect();

        let mut facets: Vec<(&String, &String)> = query.specifications().iter().collect();
        facets.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in facets {
            filters.push(Filter::facet(key.clone(), value.clone()));
        }

        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryConfig;

    #[test]
    fn test_filter_constructors() {
        let keyword = Filter::keyword("nuclear");
        assert!(matches!(keyword, Filter::Keyword(_)));

        let facet = Filter::facet("year", "2012");
        assert!(matches!(facet, Filter::Facet { .. }));
    }

    #[test]
    fn test_from_query() {
        let query = SearchQuery::parse(
            "nuclear waste year:2012 country:cz",
            &QueryConfig::default(),
        );
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
    fn test_from_blank_query_keeps_sentinel() {
        let query = SearchQuery::parse("", &QueryConfig::default());
        let filters = Filter::from_query(&query);
        assert_eq!(filters, vec![Filter::keyword("")]);
    }
}
