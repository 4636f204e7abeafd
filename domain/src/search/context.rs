//! Search hits and the text block handed to specialists

use super::decision::SearchType;
use serde::{Deserialize, Serialize};

/// Hits included in a formatted context block
pub const MAX_CONTEXT_HITS: usize = 3;

/// One search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default)]
    pub relevance: f64,
}

impl SearchHit {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            relevance: 0.0,
        }
    }
}

/// Format hits as a numbered context block. No hits gives an empty string.
pub fn format_search_context(hits: &[SearchHit], query: &str, search_type: SearchType) -> String {
    if hits.is_empty() {
        return String::new();
    }

    let mut context = format!("{} '{}':\n\n", search_type.context_header(), query);
    for (i, hit) in hits.iter().take(MAX_CONTEXT_HITS).enumerate() {
        context.push_str(&format!("{}. {}\n", i + 1, hit.title));
        context.push_str(&format!("   {}\n", hit.snippet));
        context.push_str(&format!("   Source: {}\n\n", hit.url));
    }
    context
}
