//! Source attribution configuration from TOML (`[sources]` section)

use crate::sources::{CatalogEntry, DEFAULT_MAX_SOURCES};
use council_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// ```toml
/// [sources]
/// max_sources = 6
/// validate_urls = false      # HTTP HEAD probing, needs web-tools
///
/// [[sources.catalog]]
/// title = "Internal Wiki"
/// url = "https://wiki.example.com/analytics"
/// description = "Team notes on forecasting and reporting"
/// domain = "Data Science & Machine Learning"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourcesConfig {
    pub max_sources: usize,
    pub validate_urls: bool,
    /// Appended to the built-in catalogue
    pub catalog: Vec<CatalogEntry>,
}

impl Default for FileSourcesConfig {
    fn default() -> Self {
        Self {
            max_sources: DEFAULT_MAX_SOURCES,
            validate_urls: false,
            catalog: Vec::new(),
        }
    }
}

impl FileSourcesConfig {
    /// Catalogue entries with a usable URL, plus issues for the rest
    pub fn parse_catalog(&self) -> (Vec<CatalogEntry>, Vec<ConfigIssue>) {
        let mut entries = Vec::new();
        let mut issues = Vec::new();

        for (i, entry) in self.catalog.iter().enumerate() {
            if entry.has_web_url() {
                entries.push(entry.clone());
            } else {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidUrl {
                        field: format!("sources.catalog[{}].url", i),
                        value: entry.url.clone(),
                    },
                    format!(
                        "sources.catalog[{}]: '{}' is not an absolute http(s) URL, entry skipped",
                        i, entry.url
                    ),
                ));
            }
        }

        (entries, issues)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_catalog().1;

        if self.max_sources == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroLimit {
                    field: "sources.max_sources".to_string(),
                },
                "sources.max_sources: 0 means no sources are ever returned",
            ));
        }

        if self.validate_urls && !cfg!(feature = "web-tools") {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::FeatureUnavailable {
                    field: "sources.validate_urls".to_string(),
                    feature: "web-tools".to_string(),
                },
                "sources.validate_urls: requires the web-tools feature, URLs are not probed",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_catalog_url_skipped() {
        let config = FileSourcesConfig {
            catalog: vec![
                CatalogEntry::new("Good", "https://good.example.com", "", ""),
                CatalogEntry::new("Bad", "good.example.com", "", ""),
            ],
            ..Default::default()
        };

        let (entries, issues) = config.parse_catalog();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Good");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("sources.catalog[1]"));
    }

    #[test]
    fn test_default_is_clean() {
        assert!(FileSourcesConfig::default().validate().is_empty());
    }
}
