//! Search decision value objects and the keyword fallback heuristic

use crate::core::string::{contains_any, normalize};
use serde::{Deserialize, Serialize};

const FRESH_DATA_TRIGGERS: &[&str] = &["latest", "recent", "current", "2024", "2025", "today", "now"];
const DEEP_EXPERTISE_TRIGGERS: &[&str] = &["advanced", "cutting-edge", "state-of-the-art", "research"];

/// Kind of search a specialist would benefit from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    FreshData,
    DeepExpertise,
    Comprehensive,
    None,
}

impl SearchType {
    pub fn as_str(&self) -> &str {
        match self {
            SearchType::FreshData => "fresh_data",
            SearchType::DeepExpertise => "deep_expertise",
            SearchType::Comprehensive => "comprehensive",
            SearchType::None => "none",
        }
    }

    /// Header used when formatting search context
    pub fn context_header(&self) -> &str {
        match self {
            SearchType::FreshData => "Recent developments relevant to",
            SearchType::DeepExpertise => "Current research and advanced insights on",
            SearchType::Comprehensive => "Comprehensive current information about",
            SearchType::None => "Additional context for",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether (and how) to search on behalf of a specialist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDecision {
    pub should_search: bool,
    pub search_type: SearchType,
    pub confidence: f64,
    pub reasoning: String,
}

impl SearchDecision {
    /// Decision used whenever the collaborator is unavailable
    pub fn skip(reasoning: impl Into<String>) -> Self {
        Self {
            should_search: false,
            search_type: SearchType::None,
            confidence: 1.0,
            reasoning: reasoning.into(),
        }
    }
}

/// Keyword heuristic: time-sensitive wording first, then advanced-expertise wording.
pub fn decide_by_keywords(query: &str) -> SearchDecision {
    let lowered = normalize(query);

    if contains_any(&lowered, FRESH_DATA_TRIGGERS) {
        SearchDecision {
            should_search: true,
            search_type: SearchType::FreshData,
            confidence: 0.7,
            reasoning: "Query contains time-sensitive keywords".to_string(),
        }
    } else if contains_any(&lowered, DEEP_EXPERTISE_TRIGGERS) {
        SearchDecision {
            should_search: true,
            search_type: SearchType::DeepExpertise,
            confidence: 0.7,
            reasoning: "Query requests advanced expertise".to_string(),
        }
    } else {
        SearchDecision {
            should_search: false,
            search_type: SearchType::None,
            confidence: 0.8,
            reasoning: "Agent knowledge should be sufficient".to_string(),
        }
    }
}
