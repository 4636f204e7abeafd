//! Coordination pipeline phases
//!
//! A request is one linear pass with no persistent state:
//! `Received -> Scored -> Selected -> Dispatched -> Synthesized -> Returned`.
//! [`Phase`] names the steps that do work, for progress and logging.

use serde::{Deserialize, Serialize};

/// Step of a coordination run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Requirement scoring of the query text
    Scoring,
    /// Rule-based specialist selection
    Selection,
    /// Concurrent specialist invocation
    Dispatch,
    /// Ranking and merging of results
    Synthesis,
    /// Source attribution for the merged answer
    Attribution,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Scoring => "scoring",
            Phase::Selection => "selection",
            Phase::Dispatch => "dispatch",
            Phase::Synthesis => "synthesis",
            Phase::Attribution => "attribution",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Scoring => "Requirement Scoring",
            Phase::Selection => "Specialist Selection",
            Phase::Dispatch => "Specialist Dispatch",
            Phase::Synthesis => "Synthesis",
            Phase::Attribution => "Source Attribution",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
