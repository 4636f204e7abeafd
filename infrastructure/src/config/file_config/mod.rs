//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod coordination;
mod output;
mod search;
mod sources;

pub use coordination::FileCoordinationConfig;
pub use output::FileOutputConfig;
pub use search::{FileSearchConfig, SearchBackend};
pub use sources::FileSourcesConfig;

use council_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Coordination control (timeouts, collaborator toggles)
    pub coordination: FileCoordinationConfig,
    /// Search enhancement
    pub search: FileSearchConfig,
    /// Source attribution
    pub sources: FileSourcesConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every issue has a fallback, so callers report them and continue.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.search.validate());
        issues.extend(self.sources.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::OutputFormat;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[coordination]
specialist_timeout_secs = 10
enable_search = false

[search]
backend = "heuristic"
max_results = 2

[sources]
max_sources = 4

[[sources.catalog]]
title = "Team Wiki"
url = "https://wiki.example.com"
description = "Forecasting notes"
domain = "Data Science & Machine Learning"

[output]
format = "full"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.coordination.to_params();
        assert_eq!(params.specialist_timeout, Some(Duration::from_secs(10)));
        assert!(!params.enable_search);
        assert!(params.enable_sources);
        assert_eq!(config.search.max_results, 2);
        assert_eq!(config.sources.max_sources, 4);
        assert_eq!(config.sources.catalog[0].title, "Team Wiki");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[search]\nmax_results = 1\n").unwrap();
        assert_eq!(config.search.max_results, 1);
        assert_eq!(config.search.backend, "heuristic");
        assert_eq!(config.coordination, FileCoordinationConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let toml_str = r#"
[search]
backend = "altavista"

[[sources.catalog]]
title = "Broken"
url = "/relative/path"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_empty());
    }
}
