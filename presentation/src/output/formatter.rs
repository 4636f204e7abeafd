//! Output formatter trait

use council_domain::CoordinatedAnswer;

/// Trait for formatting coordinated answers
pub trait OutputFormatter {
    /// Format the complete answer with metadata and sources
    fn format(&self, query: &str, answer: &CoordinatedAnswer) -> String;

    /// Format as JSON
    fn format_json(&self, answer: &CoordinatedAnswer) -> String;

    /// Format the analysis, insights and recommendations only
    fn format_analysis_only(&self, answer: &CoordinatedAnswer) -> String;
}
