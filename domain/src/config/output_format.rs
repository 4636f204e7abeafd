//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for coordinated answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Analysis plus specialists, confidence, complexity, sources and timing
    Full,
    /// Only the merged analysis, insights and recommendations (default)
    Analysis,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Analysis
    }
}
