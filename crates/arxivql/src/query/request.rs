//! Search request parameters.
//!
//! A [`SearchRequest`] collects everything a transport needs to call the
//! arXiv `query` endpoint and renders it as key/value pairs. Sending the
//! request is left to the caller's HTTP client.

use std::fmt;

use super::Query;
use crate::error::QueryResult;

/// Default page size of the arXiv API.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Sort criterion for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortBy {
    /// Relevance to the query (API default).
    #[default]
    Relevance,
    /// Date of the latest version.
    LastUpdatedDate,
    /// Date of the first version.
    SubmittedDate,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Relevance => write!(f, "relevance"),
            SortBy::LastUpdatedDate => write!(f, "lastUpdatedDate"),
            SortBy::SubmittedDate => write!(f, "submittedDate"),
        }
    }
}

/// Sort direction for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    /// Oldest or least relevant first.
    Ascending,
    /// Newest or most relevant first (API default).
    #[default]
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// Parameters of one call to the arXiv `query` endpoint.
///
/// # Example
///
/// ```rust
/// use arxivql::{Query, SearchRequest, SortBy, SortOrder};
///
/// let request = SearchRequest::builder()
///     .with_query(Query::category("cs.LG").unwrap())
///     .with_max_results(50)
///     .with_sort(SortBy::SubmittedDate, SortOrder::Descending)
///     .build();
///
/// let pairs = request.to_query_pairs().unwrap();
/// assert_eq!(pairs[0], ("search_query", "cat:cs.LG".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Boolean search expression (None = filter by `id_list` only).
    pub query: Option<Query>,
    /// Article identifiers to restrict the search to.
    pub id_list: Vec<String>,
    /// Offset of the first result.
    pub start: usize,
    /// Page size.
    pub max_results: usize,
    /// Sort criterion and direction (None = server default).
    pub sort: Option<(SortBy, SortOrder)>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            id_list: Vec::new(),
            start: 0,
            max_results: DEFAULT_MAX_RESULTS,
            sort: None,
        }
    }
}

impl SearchRequest {
    /// Creates a new builder for SearchRequest.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    /// Renders the request as URL query parameters, in a stable order.
    ///
    /// Fails if the query is a standalone negation.
    pub fn to_query_pairs(&self) -> QueryResult<Vec<(&'static str, String)>> {
        let mut pairs = Vec::with_capacity(6);
        if let Some(ref query) = self.query {
            pairs.push(("search_query", query.to_query_string()?));
        }
        if !self.id_list.is_empty() {
            pairs.push(("id_list", self.id_list.join(",")));
        }
        pairs.push(("start", self.start.to_string()));
        pairs.push(("max_results", self.max_results.to_string()));
        if let Some((by, order)) = self.sort {
            pairs.push(("sortBy", by.to_string()));
            pairs.push(("sortOrder", order.to_string()));
        }
        Ok(pairs)
    }
}

/// Builder for SearchRequest.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Sets the search expression.
    pub fn with_query(mut self, query: Query) -> Self {
        self.request.query = Some(query);
        self
    }

    /// Restricts the search to the given identifiers.
    pub fn with_id_list<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.request.id_list = ids.into_iter().map(|id| id.to_string()).collect();
        self
    }

    /// Sets the offset of the first result.
    pub fn with_start(mut self, start: usize) -> Self {
        self.request.start = start;
        self
    }

    /// Sets the page size.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.request.max_results = max_results;
        self
    }

    /// Sets the sort criterion and direction.
    pub fn with_sort(mut self, by: SortBy, order: SortOrder) -> Self {
        self.request.sort = Some((by, order));
        self
    }

    /// Builds the SearchRequest.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryError;

    #[test]
    fn test_search_request_default() {
        let request = SearchRequest::default();
        assert!(request.query.is_none());
        assert!(request.id_list.is_empty());
        assert_eq!(request.start, 0);
        assert_eq!(request.max_results, DEFAULT_MAX_RESULTS);
        assert!(request.sort.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let request = SearchRequest::builder()
            .with_query(Query::title("transformer").unwrap())
            .with_start(20)
            .with_max_results(5)
            .with_sort(SortBy::LastUpdatedDate, SortOrder::Ascending)
            .build();

        let pairs = request.to_query_pairs().unwrap();
        assert_eq!(
            pairs,
            vec![
                ("search_query", "ti:transformer".to_string()),
                ("start", "20".to_string()),
                ("max_results", "5".to_string()),
                ("sortBy", "lastUpdatedDate".to_string()),
                ("sortOrder", "ascending".to_string()),
            ]
        );
    }

    #[test]
    fn test_id_list_only() {
        let request = SearchRequest::builder()
            .with_id_list(["2303.08774", "1706.03762v7"])
            .build();
        let pairs = request.to_query_pairs().unwrap();
        assert_eq!(pairs[0], ("id_list", "2303.08774,1706.03762v7".to_string()));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_negated_query_is_rejected() {
        let request = SearchRequest::builder()
            .with_query(Query::title("x").unwrap().negate())
            .build();
        assert_eq!(request.to_query_pairs(), Err(QueryError::StandaloneNegation));
    }

    #[test]
    fn test_sort_display() {
        assert_eq!(SortBy::default().to_string(), "relevance");
        assert_eq!(SortBy::SubmittedDate.to_string(), "submittedDate");
        assert_eq!(SortOrder::default().to_string(), "descending");
    }
}
