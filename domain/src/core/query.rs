//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque caller profile, passed through the pipeline unmodified.
pub type CallerProfile = Map<String, Value>;

/// A query to be answered by the council (Value Object)
///
/// Holds the raw text plus an optional caller profile and analysis-mode tag.
/// Neither of the optional parts is interpreted by the coordination core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<CallerProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    analysis_mode: Option<String>,
}

impl Query {
    /// Create a new query, rejecting empty or whitespace-only text
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "query text cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            text,
            profile: None,
            analysis_mode: None,
        })
    }

    pub fn with_profile(mut self, profile: CallerProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_analysis_mode(mut self, mode: impl Into<String>) -> Self {
        self.analysis_mode = Some(mode.into());
        self
    }

    /// Get the raw query text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn profile(&self) -> Option<&CallerProfile> {
        self.profile.as_ref()
    }

    pub fn analysis_mode(&self) -> Option<&str> {
        self.analysis_mode.as_deref()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::new(s)
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_creation() {
        let q = Query::new("What drives churn?").unwrap();
        assert_eq!(q.text(), "What drives churn?");
        assert!(q.profile().is_none());
        assert!(q.analysis_mode().is_none());
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(Query::new(""), Err(DomainError::InvalidQuery(_))));
        assert!(Query::new("   \n").is_err());
    }

    #[test]
    fn test_profile_passed_through() {
        let mut profile = CallerProfile::new();
        profile.insert("role".to_string(), json!("analyst"));
        profile.insert("prefs".to_string(), json!({"depth": 3}));

        let q = Query::new("Forecast demand")
            .unwrap()
            .with_profile(profile.clone())
            .with_analysis_mode("predictive");

        assert_eq!(q.profile(), Some(&profile));
        assert_eq!(q.analysis_mode(), Some("predictive"));
    }

    #[test]
    fn test_try_from_str() {
        let q: Query = "Compare A versus B".try_into().unwrap();
        assert_eq!(q.to_string(), "Compare A versus B");
    }
}
