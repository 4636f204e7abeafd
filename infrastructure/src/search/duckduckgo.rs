//! DuckDuckGo-backed search enhancer (`web-tools` feature).
//!
//! Uses the [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/),
//! which needs no API key. The decision itself stays with the keyword
//! heuristic; only positive decisions trigger a request.
//!
//! The lookup query is the user query followed by the specialist's
//! expertise label, so each specialist gets results from its own angle.

use async_trait::async_trait;
use council_application::ports::collaborator::CollaboratorError;
use council_application::ports::search_enhancer::SearchEnhancer;
use council_domain::{
    MAX_CONTEXT_HITS, SearchDecision, SearchHit, SpecialistId, decide_by_keywords,
    format_search_context,
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// DuckDuckGo Instant Answer API endpoint (no API key required).
const DDG_API_URL: &str = "https://api.duckduckgo.com/";

const USER_AGENT: &str = "ExpertCouncil/0.4 (Search Enhancer)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Characters of a related-topic text used as its title
const TITLE_CHARS: usize = 80;

#[derive(Debug, Clone)]
pub struct DuckDuckGoSearchEnhancer {
    client: reqwest::Client,
    max_results: usize,
}

impl DuckDuckGoSearchEnhancer {
    pub fn new(max_results: usize) -> Result<Self, CollaboratorError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CollaboratorError::Unavailable(e.to_string()))?;
        Ok(Self::with_client(client, max_results))
    }

    pub fn with_client(client: reqwest::Client, max_results: usize) -> Self {
        Self {
            client,
            max_results: max_results.clamp(1, MAX_CONTEXT_HITS),
        }
    }

    async fn lookup(&self, search_query: &str) -> Result<Value, CollaboratorError> {
        let response = self
            .client
            .get(DDG_API_URL)
            .query(&[
                ("q", search_query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CollaboratorError::Timeout
                } else {
                    CollaboratorError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(CollaboratorError::RequestFailed(format!(
                "Search API returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CollaboratorError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SearchEnhancer for DuckDuckGoSearchEnhancer {
    async fn decide(
        &self,
        query: &str,
        _expertise: &str,
        _specialist: &SpecialistId,
    ) -> Result<SearchDecision, CollaboratorError> {
        Ok(decide_by_keywords(query))
    }

    async fn context(
        &self,
        query: &str,
        expertise: &str,
        decision: &SearchDecision,
    ) -> Result<String, CollaboratorError> {
        let search_query = format!("{} {}", query, expertise);
        let body = self.lookup(&search_query).await?;
        let hits = parse_hits(&body, self.max_results);
        debug!("DuckDuckGo returned {} hits for '{}'", hits.len(), search_query);
        Ok(format_search_context(&hits, query, decision.search_type))
    }
}

/// Extract hits from an Instant Answer response: the abstract first, then
/// related topics. Nested topic groups are skipped.
fn parse_hits(data: &Value, max_results: usize) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    if let Some(abstract_text) = data["AbstractText"].as_str()
        && !abstract_text.is_empty()
    {
        let title = data["Heading"]
            .as_str()
            .filter(|h| !h.is_empty())
            .or_else(|| data["AbstractSource"].as_str())
            .unwrap_or("Summary");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        hits.push(SearchHit::new(title, url, abstract_text));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        for topic in topics {
            let (Some(text), Some(url)) = (topic["Text"].as_str(), topic["FirstURL"].as_str())
            else {
                continue;
            };
            if text.is_empty() {
                continue;
            }
            let title: String = text
                .split(" - ")
                .next()
                .unwrap_or(text)
                .chars()
                .take(TITLE_CHARS)
                .collect();
            hits.push(SearchHit::new(title, url, text));
        }
    }

    hits.truncate(max_results);
    hits
}
