//! Search configuration from TOML (`[search]` section)

use council_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Which search-enhancement adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBackend {
    /// Keyword decision only, no lookups
    #[default]
    Heuristic,
    /// DuckDuckGo Instant Answer API (`web-tools` feature)
    DuckDuckGo,
}

impl SearchBackend {
    pub const VALID_VALUES: &'static [&'static str] = &["heuristic", "duckduckgo"];
}

/// ```toml
/// [search]
/// backend = "heuristic"   # or "duckduckgo"
/// max_results = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    pub backend: String,
    pub max_results: usize,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            backend: "heuristic".to_string(),
            max_results: 3,
        }
    }
}

impl FileSearchConfig {
    /// Parse the backend name. Unknown names fall back to heuristic.
    pub fn parse_backend(&self) -> (SearchBackend, Vec<ConfigIssue>) {
        match self.backend.trim().to_lowercase().as_str() {
            "heuristic" => (SearchBackend::Heuristic, Vec::new()),
            "duckduckgo" | "ddg" => {
                let mut issues = Vec::new();
                if !cfg!(feature = "web-tools") {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::FeatureUnavailable {
                            field: "search.backend".to_string(),
                            feature: "web-tools".to_string(),
                        },
                        "search.backend: 'duckduckgo' requires the web-tools feature, using 'heuristic'",
                    ));
                    return (SearchBackend::Heuristic, issues);
                }
                (SearchBackend::DuckDuckGo, issues)
            }
            other => (
                SearchBackend::Heuristic,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "search.backend".to_string(),
                        value: other.to_string(),
                        valid_values: SearchBackend::VALID_VALUES
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    },
                    format!(
                        "search.backend: unknown value '{}', falling back to 'heuristic'",
                        other
                    ),
                )],
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_backend().1;
        if self.max_results == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroLimit {
                    field: "search.max_results".to_string(),
                },
                "search.max_results: 0 is raised to 1",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_backend(backend: &str) -> FileSearchConfig {
        FileSearchConfig {
            backend: backend.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_backend() {
        let (backend, issues) = FileSearchConfig::default().parse_backend();
        assert_eq!(backend, SearchBackend::Heuristic);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_backend_falls_back() {
        let (backend, issues) = with_backend("bing").parse_backend();
        assert_eq!(backend, SearchBackend::Heuristic);
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidEnumValue { ref value, .. } if value == "bing"
        ));
    }

    #[cfg(feature = "web-tools")]
    #[test]
    fn test_duckduckgo_backend() {
        let (backend, issues) = with_backend("DuckDuckGo").parse_backend();
        assert_eq!(backend, SearchBackend::DuckDuckGo);
        assert!(issues.is_empty());
    }

    #[cfg(not(feature = "web-tools"))]
    #[test]
    fn test_duckduckgo_backend_needs_feature() {
        let (backend, issues) = with_backend("duckduckgo").parse_backend();
        assert_eq!(backend, SearchBackend::Heuristic);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::FeatureUnavailable { .. }
        ));
    }

    #[test]
    fn test_zero_results_reported() {
        let config = FileSearchConfig {
            max_results: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 1);
    }
}
