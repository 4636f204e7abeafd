//! Requirement profile value object

use serde::{Deserialize, Serialize};

/// Topical emphasis of a query (Value Object)
///
/// All scores lie in `[0, 1]`. Built once by
/// [`RequirementScorer`](super::RequirementScorer) and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RequirementProfile {
    /// Share of complexity indicators present
    pub complexity: f64,
    /// Share of data indicators present
    pub data_focus: f64,
    /// Share of research indicators present
    pub research_focus: f64,
    /// Query asks for modeling, prediction or forecasting
    pub requires_modeling: bool,
    /// Query asks for a comparison
    pub requires_comparison: bool,
    /// Query asks for optimization or improvement
    pub requires_optimization: bool,
}

impl RequirementProfile {
    pub fn with_complexity(mut self, complexity: f64) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_data_focus(mut self, data_focus: f64) -> Self {
        self.data_focus = data_focus;
        self
    }

    pub fn with_research_focus(mut self, research_focus: f64) -> Self {
        self.research_focus = research_focus;
        self
    }

    pub fn with_modeling(mut self, requires: bool) -> Self {
        self.requires_modeling = requires;
        self
    }

    pub fn with_comparison(mut self, requires: bool) -> Self {
        self.requires_comparison = requires;
        self
    }

    pub fn with_optimization(mut self, requires: bool) -> Self {
        self.requires_optimization = requires;
        self
    }
}
