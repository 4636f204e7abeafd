//! Console output formatter for coordinated answers

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_domain::{ConfigIssue, CoordinatedAnswer, Severity, SpecialistDescriptor};

/// Formats coordinated answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete answer
    pub fn format(query: &str, answer: &CoordinatedAnswer) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Expert Council Answer"));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Query:".cyan().bold(), query));

        let specialists: Vec<&str> = answer.specialists_used.iter().map(|s| s.as_str()).collect();
        output.push_str(&format!(
            "{} {}\n",
            "Specialists:".cyan().bold(),
            specialists.join(", ")
        ));
        output.push_str(&format!(
            "{} {:.0}%   {} {:.2}   {} {:.2}s\n",
            "Confidence:".cyan().bold(),
            answer.aggregate_confidence * 100.0,
            "Complexity:".cyan().bold(),
            answer.query_complexity,
            "Time:".cyan().bold(),
            answer.elapsed.as_secs_f64()
        ));

        output.push_str(&Self::section_header("Analysis"));
        output.push_str(&format!("\n{}\n", answer.primary_analysis.trim_end()));

        Self::push_list(&mut output, "Key Insights:", &answer.insights);
        Self::push_list(&mut output, "Recommendations:", &answer.recommendations);

        if !answer.sources.is_empty() {
            output.push_str(&Self::section_header("Sources"));
            for (i, source) in answer.sources.iter().enumerate() {
                output.push_str(&format!(
                    "\n{}. {} {}\n   {}\n",
                    i + 1,
                    source.title.bold(),
                    format!("({:.2})", source.relevance).dimmed(),
                    source.url.blue().underline()
                ));
                if let Some(ref description) = source.description {
                    output.push_str(&format!("   {}\n", description.dimmed()));
                }
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Turn off ANSI colors for all subsequent output
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format as JSON
    pub fn format_json(answer: &CoordinatedAnswer) -> String {
        serde_json::to_string_pretty(answer).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the analysis, insights and recommendations only (concise output)
    pub fn format_analysis_only(answer: &CoordinatedAnswer) -> String {
        let mut output = String::new();

        output.push_str(answer.primary_analysis.trim_end());
        output.push('\n');

        Self::push_list(&mut output, "Key Insights:", &answer.insights);
        Self::push_list(&mut output, "Recommendations:", &answer.recommendations);

        output
    }

    /// Format the registered specialists (for --list-specialists)
    pub fn format_specialists(descriptors: &[SpecialistDescriptor]) -> String {
        let mut output = format!("{}\n", "Registered specialists:".cyan().bold());
        for d in descriptors {
            output.push_str(&format!(
                "  {:<16} {:<22} {} {}\n",
                d.id.as_str().bold(),
                d.display_name,
                d.expertise_label,
                format!("[{}]", d.role).dimmed()
            ));
        }
        output
    }

    /// Format configuration issues, one per line
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                let label = match issue.severity {
                    Severity::Error => "config error:".red().bold(),
                    Severity::Warning => "config warning:".yellow().bold(),
                };
                format!("{} {}\n", label, issue.message)
            })
            .collect()
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("\n{}\n", title.cyan().bold()));
        for item in items {
            output.push_str(&format!("  * {}\n", item));
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, query: &str, answer: &CoordinatedAnswer) -> String {
        Self::format(query, answer)
    }

    fn format_json(&self, answer: &CoordinatedAnswer) -> String {
        Self::format_json(answer)
    }

    fn format_analysis_only(&self, answer: &CoordinatedAnswer) -> String {
        Self::format_analysis_only(answer)
    }
}
