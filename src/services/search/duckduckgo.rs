use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::SearchError;

const DEFAULT_BASE_URL: &str = "https://api.duckduckgo.com";
const DEFAULT_MAX_RESULTS: usize = 3;

/// Best-effort text search against DuckDuckGo's instant-answer API.
///
/// Used only to enrich stage prompts; never required for correctness.
/// Every failure mode collapses into a displayable placeholder string so
/// a broken or slow search can never abort a pipeline run.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
    max_results: usize,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Point the client at a different endpoint. Used in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Run a text search and return newline-joined snippets.
    ///
    /// Infallible by contract: any provider failure is downgraded to a
    /// `"Search error: ..."` placeholder string.
    pub async fn search(&self, query: &str) -> String {
        match self.try_search(query).await {
            Ok(snippets) => snippets,
            Err(e) => {
                warn!(%query, error = %e, "search degraded to placeholder");
                format!("Search error: {e}")
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<String, SearchError> {
        debug!(%query, "querying DuckDuckGo");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Request(format!("HTTP {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(collect_snippets(&body, self.max_results).join("\n"))
    }
}

/// Pull up to `max` displayable snippets out of an instant-answer payload:
/// the abstract first, then related-topic texts (including nested topic
/// groups).
fn collect_snippets(body: &Value, max: usize) -> Vec<String> {
    let mut snippets = Vec::new();

    if let Some(abstract_text) = body.get("AbstractText").and_then(|v| v.as_str()) {
        if !abstract_text.is_empty() {
            let heading = body.get("Heading").and_then(|v| v.as_str()).unwrap_or("");
            if heading.is_empty() {
                snippets.push(abstract_text.to_string());
            } else {
                snippets.push(format!("{heading}: {abstract_text}"));
            }
        }
    }

    if let Some(topics) = body.get("RelatedTopics").and_then(|v| v.as_array()) {
        push_topic_texts(topics, max, &mut snippets);
    }

    snippets
}

fn push_topic_texts(topics: &[Value], max: usize, out: &mut Vec<String>) {
    for topic in topics {
        if out.len() >= max {
            return;
        }
        if let Some(text) = topic.get("Text").and_then(|v| v.as_str()) {
            if !text.is_empty() {
                out.push(text.to_string());
            }
        } else if let Some(nested) = topic.get("Topics").and_then(|v| v.as_array()) {
            push_topic_texts(nested, max, out);
        }
    }
}
