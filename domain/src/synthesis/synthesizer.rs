//! Confidence-weighted synthesis of specialist results

use super::value_objects::{CoordinatedAnswer, SpecialistResult};
use crate::requirement::RequirementProfile;
use std::time::Duration;

/// Fixed header introducing the lower-ranked analyses
pub const ADDITIONAL_PERSPECTIVES_HEADER: &str = "Additional perspectives:";
/// Primary analysis when no specialist produced usable text
pub const FALLBACK_ANALYSIS: &str =
    "Unable to provide comprehensive analysis due to processing limitations.";
/// Lower-ranked analyses appended after the lead paragraph
pub const MAX_ADDITIONAL_PERSPECTIVES: usize = 2;
/// Cap on merged insights and on merged recommendations
pub const MAX_LIST_ENTRIES: usize = 5;

/// Merges per-specialist results into one [`CoordinatedAnswer`].
///
/// Input order is dispatch order. Ranking only affects the primary analysis;
/// insights and recommendations keep dispatch order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Build the answer. `elapsed` and `sources` are left for the caller to fill.
    pub fn synthesize(
        &self,
        results: &[SpecialistResult],
        profile: &RequirementProfile,
    ) -> CoordinatedAnswer {
        CoordinatedAnswer {
            primary_analysis: self.primary_analysis(results),
            insights: Self::merge_lists(results.iter().map(|r| &r.insights)),
            recommendations: Self::merge_lists(results.iter().map(|r| &r.recommendations)),
            aggregate_confidence: Self::aggregate_confidence(results),
            specialists_used: results.iter().map(|r| r.specialist.clone()).collect(),
            query_complexity: profile.complexity,
            elapsed: Duration::ZERO,
            sources: Vec::new(),
        }
    }

    /// Lead with the highest-confidence usable analysis, then up to two more
    /// as bulleted perspectives, in descending confidence.
    pub fn primary_analysis(&self, results: &[SpecialistResult]) -> String {
        let mut ranked: Vec<&SpecialistResult> = results
            .iter()
            .filter(|r| r.is_success() && !r.analysis.is_empty())
            .collect();
        // stable: ties keep dispatch order
        ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let Some((lead, rest)) = ranked.split_first() else {
            return FALLBACK_ANALYSIS.to_string();
        };

        let mut combined = lead.analysis.clone();
        if !rest.is_empty() {
            combined.push_str("\n\n");
            combined.push_str(ADDITIONAL_PERSPECTIVES_HEADER);
            combined.push('\n');
            for result in rest.iter().take(MAX_ADDITIONAL_PERSPECTIVES) {
                combined.push_str(&format!("• {}\n", result.analysis));
            }
        }
        combined
    }

    /// Arithmetic mean over all results; failures count as `0.0`.
    pub fn aggregate_confidence(results: &[SpecialistResult]) -> f64 {
        if results.is_empty() {
            return 0.0;
        }
        results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64
    }

    fn merge_lists<'a>(lists: impl Iterator<Item = &'a Vec<String>>) -> Vec<String> {
        lists.flatten().take(MAX_LIST_ENTRIES).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specialist::SpecialistId;
    use crate::synthesis::value_objects::SpecialistFailure;

    fn ok(id: &str, analysis: &str, confidence: f64) -> SpecialistResult {
        SpecialistResult::success(SpecialistId::from(id), id, analysis, confidence)
    }

    fn failed(id: &str) -> SpecialistResult {
        SpecialistResult::failure(SpecialistId::from(id), id, SpecialistFailure::panicked("x"))
    }

    fn items(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn test_ranked_primary_analysis() {
        let results = vec![ok("low", "LOW", 0.1), ok("high", "HIGH", 0.9), ok("mid", "MID", 0.5)];
        let text = Synthesizer::new().primary_analysis(&results);
        assert_eq!(text, "HIGH\n\nAdditional perspectives:\n• MID\n• LOW\n");
    }

    #[test]
    fn test_at_most_two_additional_perspectives() {
        let results = vec![
            ok("a", "A", 0.9),
            ok("b", "B", 0.8),
            ok("c", "C", 0.7),
            ok("d", "D", 0.6),
        ];
        let text = Synthesizer::new().primary_analysis(&results);
        assert!(text.starts_with("A"));
        assert!(text.contains("• B\n• C\n"));
        assert!(!text.contains("D"));
    }

    #[test]
    fn test_single_result_has_no_header() {
        let text = Synthesizer::new().primary_analysis(&[ok("a", "Only", 0.3)]);
        assert_eq!(text, "Only");
    }

    #[test]
    fn test_ties_keep_dispatch_order() {
        let results = vec![ok("first", "FIRST", 0.5), ok("second", "SECOND", 0.5)];
        let text = Synthesizer::new().primary_analysis(&results);
        assert!(text.starts_with("FIRST"));
    }

    #[test]
    fn test_failed_results_excluded_from_text() {
        let results = vec![failed("broken"), ok("a", "A", 0.2)];
        let text = Synthesizer::new().primary_analysis(&results);
        assert_eq!(text, "A");
    }

    #[test]
    fn test_all_failed_uses_fallback() {
        let results = vec![failed("a"), failed("b")];
        let answer = Synthesizer::new().synthesize(&results, &RequirementProfile::default());
        assert_eq!(answer.primary_analysis, FALLBACK_ANALYSIS);
        assert_eq!(answer.aggregate_confidence, 0.0);
        assert!(answer.insights.is_empty());
        assert!(answer.recommendations.is_empty());
        assert_eq!(answer.specialists_used.len(), 2);
    }

    #[test]
    fn test_aggregate_includes_failures() {
        let results = vec![ok("a", "A", 0.9), failed("b"), ok("c", "C", 0.3)];
        let mean = Synthesizer::aggregate_confidence(&results);
        assert!((mean - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_lists_in_dispatch_order_truncated() {
        let results = vec![
            ok("low", "L", 0.1).with_insights(items("low-", 4)),
            ok("high", "H", 0.9).with_insights(items("high-", 4)),
        ];
        let answer = Synthesizer::new().synthesize(&results, &RequirementProfile::default());
        assert_eq!(
            answer.insights,
            vec!["low-1", "low-2", "low-3", "low-4", "high-1"]
        );
    }

    #[test]
    fn test_recommendations_independent_of_insights() {
        let results = vec![
            ok("a", "A", 0.5).with_insights(items("i", 1)),
            ok("b", "B", 0.5).with_recommendations(items("r", 7)),
        ];
        let answer = Synthesizer::new().synthesize(&results, &RequirementProfile::default());
        assert_eq!(answer.insights, vec!["i1"]);
        assert_eq!(answer.recommendations, items("r", 5));
    }

    #[test]
    fn test_complexity_carried() {
        let profile = RequirementProfile::default().with_complexity(0.3);
        let answer = Synthesizer::new().synthesize(&[ok("a", "A", 0.5)], &profile);
        assert_eq!(answer.query_complexity, 0.3);
    }
}
