//! Search entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_NUM_RESULTS: u8 = 1;
pub const MAX_NUM_RESULTS: u8 = 10;
pub const DEFAULT_NUM_RESULTS: u8 = 5;

/// A single web search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
        }
    }
}

/// Result of one search invocation.
///
/// A failed search is still an outcome: `results` is empty and `error`
/// carries a short message. Callers degrade to an uncited answer instead of
/// aborting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchHit>,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl SearchOutcome {
    pub fn success(query: impl Into<String>, results: Vec<SearchHit>) -> Self {
        Self {
            results,
            query: query.into(),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn unavailable(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            query: query.into(),
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.error.is_some()
    }

    /// Non-empty result URLs, in the order the search API returned them.
    pub fn source_urls(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|hit| !hit.url.trim().is_empty())
            .map(|hit| hit.url.clone())
            .collect()
    }

    /// Clamp a requested result count into the supported range.
    pub fn clamp_num_results(requested: i64) -> u8 {
        requested.clamp(MIN_NUM_RESULTS as i64, MAX_NUM_RESULTS as i64) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_urls_skip_empty() {
        let outcome = SearchOutcome::success(
            "rust",
            vec![
                SearchHit::new("A", "a", "https://example.com/a"),
                SearchHit::new("B", "b", ""),
                SearchHit::new("C", "c", "https://example.com/c"),
            ],
        );
        assert_eq!(
            outcome.source_urls(),
            vec!["https://example.com/a", "https://example.com/c"]
        );
    }

    #[test]
    fn test_unavailable_outcome() {
        let outcome = SearchOutcome::unavailable("rust", "Failed to perform web search");
        assert!(outcome.is_unavailable());
        assert!(outcome.results.is_empty());
        assert!(outcome.source_urls().is_empty());
    }

    #[test]
    fn test_clamp_num_results() {
        assert_eq!(SearchOutcome::clamp_num_results(0), 1);
        assert_eq!(SearchOutcome::clamp_num_results(5), 5);
        assert_eq!(SearchOutcome::clamp_num_results(42), 10);
        assert_eq!(SearchOutcome::clamp_num_results(-3), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let outcome = SearchOutcome::success("q", vec![SearchHit::new("t", "s", "u")]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["query"], "q");
        assert_eq!(json["results"][0]["url"], "u");
        assert!(json.get("error").is_none());
        assert!(json["timestamp"].is_string());
    }
}
