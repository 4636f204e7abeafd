//! Keyword-based requirement scorer

use super::profile::RequirementProfile;
use crate::core::query::Query;
use crate::core::string::{contains_any, match_ratio, normalize};

/// Indicators that a query needs more than a surface answer.
pub const COMPLEXITY_INDICATORS: &[&str] = &[
    "analyze",
    "compare",
    "predict",
    "model",
    "correlate",
    "statistical",
    "trend",
    "pattern",
    "optimize",
    "recommend",
];

/// Indicators of a quantitative, data-centred query.
pub const DATA_INDICATORS: &[&str] = &[
    "data",
    "dataset",
    "numbers",
    "statistics",
    "metrics",
    "measurement",
    "quantify",
    "calculate",
    "estimate",
];

/// Indicators of an academic or evidence-seeking query.
pub const RESEARCH_INDICATORS: &[&str] = &[
    "research",
    "study",
    "literature",
    "evidence",
    "theory",
    "hypothesis",
    "methodology",
    "peer-reviewed",
    "academic",
];

const MODELING_TERMS: &[&str] = &["model", "predict", "forecast"];
const COMPARISON_TERMS: &[&str] = &["compare", "versus", "difference"];
const OPTIMIZATION_TERMS: &[&str] = &["optimize", "improve", "maximize", "minimize"];

/// Scores query text against the fixed indicator sets.
///
/// Pure and total: no I/O, never fails. Matching is position-independent
/// substring containment on the lower-cased text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementScorer;

impl RequirementScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a validated query
    pub fn score(&self, query: &Query) -> RequirementProfile {
        self.score_text(query.text())
    }

    /// Score raw text
    pub fn score_text(&self, text: &str) -> RequirementProfile {
        let lowered = normalize(text);

        RequirementProfile {
            complexity: match_ratio(&lowered, COMPLEXITY_INDICATORS),
            data_focus: match_ratio(&lowered, DATA_INDICATORS),
            research_focus: match_ratio(&lowered, RESEARCH_INDICATORS),
            requires_modeling: contains_any(&lowered, MODELING_TERMS),
            requires_comparison: contains_any(&lowered, COMPARISON_TERMS),
            requires_optimization: contains_any(&lowered, OPTIMIZATION_TERMS),
        }
    }
}
