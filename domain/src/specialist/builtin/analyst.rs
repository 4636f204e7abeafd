//! Business analyst: the general specialist, always consulted.

use super::owned;
use crate::core::string::{contains_any, normalize};
use crate::specialist::capability::{
    ConfidenceCell, Specialist, SpecialistDescriptor, SpecialistRole, append_search_context,
    keyword_relevance,
};

pub const ANALYST_ID: &str = "analyst";

const KEYWORDS: &[&str] = &[
    "analysis",
    "strategic",
    "business",
    "insights",
    "trends",
    "optimization",
    "efficiency",
    "performance",
    "metrics",
    "kpi",
    "dashboard",
    "reporting",
    "stakeholder",
    "requirements",
    "process",
    "workflow",
    "improvement",
    "recommendations",
];

const INSIGHTS: &[&str] = &[
    "Align analysis with strategic business objectives",
    "Consider both short-term impacts and long-term implications",
    "Stakeholder buy-in is crucial for successful implementation",
    "Use data visualization to communicate complex insights effectively",
];

const RECOMMENDATIONS: &[&str] = &[
    "Define clear success metrics before beginning implementation",
    "Engage stakeholders early in the analysis process",
    "Develop phased implementation plans with regular checkpoints",
    "Create dashboards for ongoing monitoring and adjustment",
];

pub struct AnalystSpecialist {
    descriptor: SpecialistDescriptor,
    confidence: ConfidenceCell,
}

impl AnalystSpecialist {
    pub fn new() -> Self {
        Self {
            descriptor: SpecialistDescriptor::new(
                ANALYST_ID,
                "Business Analyst",
                "Strategic Analysis & Insights",
                SpecialistRole::General,
            ),
            confidence: ConfidenceCell::new(),
        }
    }
}

impl Default for AnalystSpecialist {
    fn default() -> Self {
        Self::new()
    }
}

impl Specialist for AnalystSpecialist {
    fn descriptor(&self) -> &SpecialistDescriptor {
        &self.descriptor
    }

    fn relevance(&self, query: &str) -> f64 {
        let relevance = keyword_relevance(query, KEYWORDS);
        self.confidence.set(relevance);
        relevance
    }

    fn respond(&self, query: &str, search_context: &str) -> String {
        let lowered = normalize(query);

        let base = if contains_any(&lowered, &["strategic", "business", "optimization"]) {
            "From a strategic analysis perspective, this requires understanding \
             stakeholder needs, current state assessment, and identification of \
             improvement opportunities. Consider both quantitative metrics and \
             qualitative factors. Develop actionable recommendations with clear \
             success criteria and implementation roadmaps."
        } else if contains_any(&lowered, &["performance", "metrics", "kpi"]) {
            "Performance analysis should focus on key performance indicators (KPIs) \
             that align with organizational objectives. Establish baselines, set \
             realistic targets, and implement regular monitoring. Consider leading \
             and lagging indicators to provide comprehensive performance insights."
        } else if contains_any(&lowered, &["process", "workflow", "improvement"]) {
            "Process analysis requires mapping current workflows, identifying \
             bottlenecks and inefficiencies, and designing improved processes. \
             Use process mapping techniques, gather stakeholder feedback, and \
             consider both technological and organizational factors in optimization."
        } else {
            "From a business analysis standpoint, this requires systematic evaluation \
             of current state, identification of gaps and opportunities, and \
             development of data-driven recommendations. Focus on measurable outcomes \
             and stakeholder value creation."
        };

        append_search_context(base.to_string(), "Relevant context:", search_context)
    }

    fn insights(&self, _query: &str) -> Vec<String> {
        owned(INSIGHTS)
    }

    fn recommendations(&self, _query: &str) -> Vec<String> {
        owned(RECOMMENDATIONS)
    }

    fn last_confidence(&self) -> f64 {
        self.confidence.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let analyst = AnalystSpecialist::new();
        assert_eq!(analyst.id().as_str(), ANALYST_ID);
        assert_eq!(analyst.descriptor().role, SpecialistRole::General);
    }

    #[test]
    fn test_relevance_updates_last_confidence() {
        let analyst = AnalystSpecialist::new();
        // strategic, business: 2 / 18 * 2
        let relevance = analyst.relevance("A strategic business question");
        assert!((relevance - 4.0 / 18.0).abs() < 1e-9);
        assert_eq!(analyst.last_confidence(), relevance);
    }

    #[test]
    fn test_respond_branches() {
        let analyst = AnalystSpecialist::new();
        assert!(analyst.respond("business plan", "").starts_with("From a strategic"));
        assert!(analyst.respond("our KPI targets", "").starts_with("Performance analysis"));
        assert!(analyst.respond("workflow redesign", "").starts_with("Process analysis"));
        assert!(analyst.respond("anything else", "").starts_with("From a business analysis"));
    }

    #[test]
    fn test_respond_appends_context() {
        let analyst = AnalystSpecialist::new();
        let text = analyst.respond("anything", "1. Headline");
        assert!(text.ends_with("\n\nRelevant context:\n1. Headline"));
    }

    #[test]
    fn test_lists_non_empty() {
        let analyst = AnalystSpecialist::new();
        assert_eq!(analyst.insights("q").len(), 4);
        assert_eq!(analyst.recommendations("q").len(), 4);
    }
}
