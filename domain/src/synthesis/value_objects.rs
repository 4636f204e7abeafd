//! Synthesis value objects - per-specialist results and the final answer.

use crate::attribution::SourceReference;
use crate::specialist::SpecialistId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Analysis text recorded for a specialist whose invocation failed
pub const ANALYSIS_UNAVAILABLE: &str = "Analysis unavailable due to processing error";

/// Why a specialist invocation did not produce a usable result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The specialist panicked
    Panicked,
    /// The per-specialist timeout expired
    TimedOut,
    /// Empty analysis or a confidence outside `[0, 1]`
    MalformedOutput,
    /// The task was cancelled before finishing
    Aborted,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::Panicked => "panicked",
            FailureKind::TimedOut => "timed_out",
            FailureKind::MalformedOutput => "malformed_output",
            FailureKind::Aborted => "aborted",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Captured failure descriptor. Contained at the dispatcher, never propagated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct SpecialistFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl SpecialistFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn panicked(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Panicked, message)
    }

    pub fn timed_out(timeout: Duration) -> Self {
        Self::new(
            FailureKind::TimedOut,
            format!("specialist timed out after {}ms", timeout.as_millis()),
        )
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedOutput, message)
    }

    pub fn aborted() -> Self {
        Self::new(FailureKind::Aborted, "task aborted before completion")
    }
}

/// Output of one dispatched specialist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialistResult {
    /// The specialist that produced this result
    pub specialist: SpecialistId,
    /// Expertise label of the specialist
    pub specialty: String,
    /// Analysis text
    pub analysis: String,
    /// Relevance-derived confidence in `[0, 1]`
    pub confidence: f64,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Captured failure, if the invocation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<SpecialistFailure>,
}

impl SpecialistResult {
    /// Creates a successful result.
    pub fn success(
        specialist: SpecialistId,
        specialty: impl Into<String>,
        analysis: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            specialist,
            specialty: specialty.into(),
            analysis: analysis.into(),
            confidence,
            insights: Vec::new(),
            recommendations: Vec::new(),
            failure: None,
        }
    }

    /// Creates the degraded result recorded for a failed invocation:
    /// zero confidence, fixed analysis text, no insights or recommendations.
    pub fn failure(
        specialist: SpecialistId,
        specialty: impl Into<String>,
        failure: SpecialistFailure,
    ) -> Self {
        Self {
            specialist,
            specialty: specialty.into(),
            analysis: ANALYSIS_UNAVAILABLE.to_string(),
            confidence: 0.0,
            insights: Vec::new(),
            recommendations: Vec::new(),
            failure: Some(failure),
        }
    }

    pub fn with_insights(mut self, insights: Vec<String>) -> Self {
        self.insights = insights;
        self
    }

    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Returns `true` if no failure was captured.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Check the output against the result contract.
    pub fn validate(&self) -> Result<(), SpecialistFailure> {
        if self.analysis.trim().is_empty() {
            return Err(SpecialistFailure::malformed("empty analysis text"));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(SpecialistFailure::malformed(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        Ok(())
    }
}

/// Final merged answer for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatedAnswer {
    /// Lead analysis plus up to two additional perspectives
    pub primary_analysis: String,
    /// At most five insights
    pub insights: Vec<String>,
    /// At most five recommendations
    pub recommendations: Vec<String>,
    /// Mean confidence over every dispatched specialist
    pub aggregate_confidence: f64,
    /// Specialists that were dispatched, in dispatch order
    pub specialists_used: Vec<SpecialistId>,
    /// Complexity score of the query
    pub query_complexity: f64,
    /// Wall-clock time of the whole coordination
    #[serde(rename = "processing_time", with = "duration_secs")]
    pub elapsed: Duration,
    /// Attributed sources for the answer text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceReference>,
}

impl CoordinatedAnswer {
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn with_sources(mut self, sources: Vec<SourceReference>) -> Self {
        self.sources = sources;
        self
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_shape() {
        let result = SpecialistResult::failure(
            SpecialistId::from("analyst"),
            "Strategic Analysis & Insights",
            SpecialistFailure::panicked("boom"),
        );
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.analysis, ANALYSIS_UNAVAILABLE);
        assert!(result.insights.is_empty());
        assert!(result.recommendations.is_empty());
        assert!(!result.is_success());
        assert_eq!(result.failure.unwrap().to_string(), "panicked: boom");
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let id = SpecialistId::from("x");
        assert!(SpecialistResult::success(id.clone(), "X", "ok", 0.5).validate().is_ok());

        let empty = SpecialistResult::success(id.clone(), "X", "  ", 0.5);
        assert_eq!(
            empty.validate().unwrap_err().kind,
            FailureKind::MalformedOutput
        );

        let nan = SpecialistResult::success(id.clone(), "X", "ok", f64::NAN);
        assert!(nan.validate().is_err());

        let over = SpecialistResult::success(id, "X", "ok", 1.5);
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_timed_out_message() {
        let failure = SpecialistFailure::timed_out(Duration::from_millis(250));
        assert_eq!(failure.kind, FailureKind::TimedOut);
        assert!(failure.message.contains("250ms"));
    }

    #[test]
    fn test_answer_serializes_processing_time() {
        let answer = CoordinatedAnswer {
            primary_analysis: "text".to_string(),
            insights: vec![],
            recommendations: vec![],
            aggregate_confidence: 0.5,
            specialists_used: vec![SpecialistId::from("analyst")],
            query_complexity: 0.1,
            elapsed: Duration::from_millis(1500),
            sources: vec![],
        };
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["processing_time"], 1.5);
        assert_eq!(json["specialists_used"][0], "analyst");
        assert!(json.get("sources").is_none());
    }
}
