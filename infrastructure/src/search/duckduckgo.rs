//! `web_search` backend using the DuckDuckGo Instant Answer API.
//!
//! The Instant Answer API does not return a real result listing; the
//! `RelatedTopics` array is the closest thing, so that is what becomes
//! [`SearchHit`]s. Topic groups (entries with a nested `Topics` array
//! instead of `Text`) are flattened in order.
//!
//! A failed search never fails the caller. Transport errors, non-success
//! statuses and unparsable bodies are logged and turned into
//! [`SearchOutcome::unavailable`].

use async_trait::async_trait;
use searchmind_application::SearchTool;
use searchmind_domain::{SearchHit, SearchOutcome};
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// The only error text callers ever see.
const UNAVAILABLE: &str = "Failed to perform web search";

#[derive(Error, Debug)]
enum SearchError {
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search API returned error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse search results: {0}")]
    Parse(String),
}

/// DuckDuckGo Instant Answer client.
#[derive(Debug, Clone)]
pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    base_url: String,
}

impl DuckDuckGoSearch {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("SearchMind/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Value, SearchError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status()));
        }

        // DuckDuckGo labels its JSON as `application/x-javascript`, so parse
        // the text instead of relying on the content type.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SearchTool for DuckDuckGoSearch {
    async fn search(&self, query: &str, num_results: u8) -> SearchOutcome {
        let start = Instant::now();
        let num_results = SearchOutcome::clamp_num_results(num_results as i64);

        match self.fetch(query).await {
            Ok(body) => {
                let hits = extract_hits(&body, num_results as usize);
                debug!(
                    "web_search returned {} hits in {}ms",
                    hits.len(),
                    start.elapsed().as_millis()
                );
                SearchOutcome::success(query, hits)
            }
            Err(e) => {
                warn!("web_search failed: {}", e);
                SearchOutcome::unavailable(query, UNAVAILABLE)
            }
        }
    }
}

/// Turn `RelatedTopics` into at most `limit` hits.
fn extract_hits(data: &Value, limit: usize) -> Vec<SearchHit> {
    let Some(topics) = data["RelatedTopics"].as_array() else {
        return Vec::new();
    };

    let mut flat: Vec<&Value> = Vec::new();
    for topic in topics {
        match topic["Topics"].as_array() {
            Some(group) if topic.get("Text").is_none() => flat.extend(group.iter()),
            _ => flat.push(topic),
        }
    }

    flat.into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, topic)| to_hit(index, topic))
        .collect()
}

fn to_hit(index: usize, topic: &Value) -> SearchHit {
    let text = topic["Text"].as_str().filter(|t| !t.is_empty());

    let title = text
        .and_then(|t| t.split(" - ").next())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Result {}", index + 1));
    let snippet = text.unwrap_or("No description available");
    let url = topic["FirstURL"].as_str().unwrap_or("");

    SearchHit::new(title, snippet, url)
}
