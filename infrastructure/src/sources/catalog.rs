//! Catalogue-based source attribution
//!
//! Each catalogue entry is scored against the answer:
//!
//! ```text
//! relevance = min(0.4 * domain_term_ratio + 0.6 * topic_ratio, 1.0)
//! ```
//!
//! where `domain_term_ratio` is the best share of an expertise label's
//! terms found in the entry, and `topic_ratio` the share of the answer's
//! topics found in the entry. Entries scoring zero, and entries without an
//! absolute http(s) URL, are never returned.

use super::topics::{extract_topics, is_stop_word};
use async_trait::async_trait;
use council_application::ports::collaborator::CollaboratorError;
use council_application::ports::source_attributor::SourceAttributor;
use council_domain::SourceReference;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

#[cfg(feature = "web-tools")]
use super::validator::UrlValidator;

pub const DEFAULT_MAX_SOURCES: usize = 6;

const DOMAIN_WEIGHT: f64 = 0.4;
const TOPIC_WEIGHT: f64 = 0.6;

/// One reference site (`[[sources.catalog]]` in config)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Expertise area the entry belongs to
    #[serde(default)]
    pub domain: String,
}

impl CatalogEntry {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            domain: domain.into(),
        }
    }

    /// Absolute http(s) URL with a host
    pub fn has_web_url(&self) -> bool {
        let Ok(parsed) = Url::parse(&self.url) else {
            return false;
        };
        matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some()
    }

    fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.domain).to_lowercase()
    }
}

/// Reference sites covering the built-in specialists' areas
pub fn builtin_catalog() -> Vec<CatalogEntry> {
    const STRATEGY: &str = "Strategic Analysis & Insights";
    const DATA: &str = "Data Science & Machine Learning";
    const RESEARCH: &str = "Academic Research & Methodology";

    vec![
        CatalogEntry::new(
            "Harvard Business Review",
            "https://hbr.org/",
            "Management research on business strategy, competitive analysis, leadership and market trends",
            STRATEGY,
        ),
        CatalogEntry::new(
            "McKinsey Insights",
            "https://www.mckinsey.com/featured-insights",
            "Strategic insights on markets, operations, risk and long-term business performance",
            STRATEGY,
        ),
        CatalogEntry::new(
            "World Bank Open Data",
            "https://data.worldbank.org/",
            "Economic indicators and market data for trend analysis across countries",
            STRATEGY,
        ),
        CatalogEntry::new(
            "scikit-learn User Guide",
            "https://scikit-learn.org/stable/user_guide.html",
            "Machine learning models, feature engineering, cross-validation and model evaluation",
            DATA,
        ),
        CatalogEntry::new(
            "Kaggle",
            "https://www.kaggle.com/",
            "Datasets, notebooks and machine learning competitions for predictive modeling",
            DATA,
        ),
        CatalogEntry::new(
            "NIST/SEMATECH e-Handbook of Statistical Methods",
            "https://www.itl.nist.gov/div898/handbook/",
            "Statistical methods for data analysis, regression, distributions and exploratory data analysis",
            DATA,
        ),
        CatalogEntry::new(
            "Google Scholar",
            "https://scholar.google.com/",
            "Search across peer-reviewed academic literature, research papers and citations",
            RESEARCH,
        ),
        CatalogEntry::new(
            "arXiv",
            "https://arxiv.org/",
            "Open-access preprints in statistics, computer science and quantitative research",
            RESEARCH,
        ),
        CatalogEntry::new(
            "Cochrane Library",
            "https://www.cochranelibrary.com/",
            "Systematic reviews, evidence synthesis and research methodology",
            RESEARCH,
        ),
        CatalogEntry::new(
            "PubMed",
            "https://pubmed.ncbi.nlm.nih.gov/",
            "Biomedical and life sciences research literature and study abstracts",
            RESEARCH,
        ),
    ]
}

/// Source attributor over a static catalogue
pub struct CatalogSourceAttributor {
    catalog: Vec<CatalogEntry>,
    max_sources: usize,
    #[cfg(feature = "web-tools")]
    validator: Option<UrlValidator>,
}

impl CatalogSourceAttributor {
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        Self {
            catalog,
            max_sources: DEFAULT_MAX_SOURCES,
            #[cfg(feature = "web-tools")]
            validator: None,
        }
    }

    /// Built-in catalogue followed by `extra` entries
    pub fn with_builtins(extra: Vec<CatalogEntry>) -> Self {
        let mut catalog = builtin_catalog();
        catalog.extend(extra);
        Self::new(catalog)
    }

    pub fn with_max_sources(mut self, max_sources: usize) -> Self {
        self.max_sources = max_sources;
        self
    }

    /// Probe every returned URL with HTTP HEAD
    #[cfg(feature = "web-tools")]
    pub fn with_validator(mut self, validator: UrlValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// Score and order catalogue entries, without URL probing.
    pub fn rank(&self, text: &str, domains: &[String]) -> Vec<SourceReference> {
        let topics = extract_topics(text);
        let domain_terms: Vec<Vec<String>> = domains.iter().map(|d| domain_terms(d)).collect();
        debug!(?topics, "Extracted answer topics");

        let mut ranked: Vec<SourceReference> = self
            .catalog
            .iter()
            .filter(|entry| entry.has_web_url())
            .filter_map(|entry| {
                let relevance = relevance(entry, &domain_terms, &topics);
                (relevance > 0.0).then(|| {
                    let reference =
                        SourceReference::new(&entry.title, &entry.url).with_relevance(relevance);
                    if entry.description.is_empty() {
                        reference
                    } else {
                        reference.with_description(&entry.description)
                    }
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        ranked
    }

    #[cfg(feature = "web-tools")]
    async fn keep_reachable(&self, ranked: Vec<SourceReference>) -> Vec<SourceReference> {
        let Some(ref validator) = self.validator else {
            return ranked.into_iter().take(self.max_sources).collect();
        };

        let mut kept = Vec::new();
        for reference in ranked {
            if kept.len() >= self.max_sources {
                break;
            }
            if validator.is_valid(&reference.url).await {
                kept.push(reference);
            }
        }
        kept
    }

    #[cfg(not(feature = "web-tools"))]
    async fn keep_reachable(&self, ranked: Vec<SourceReference>) -> Vec<SourceReference> {
        ranked.into_iter().take(self.max_sources).collect()
    }
}

#[async_trait]
impl SourceAttributor for CatalogSourceAttributor {
    async fn attribute(
        &self,
        text: &str,
        domains: &[String],
    ) -> Result<Vec<SourceReference>, CollaboratorError> {
        let ranked = self.rank(text, domains);
        let sources = self.keep_reachable(ranked).await;
        debug!("Attributed {} of {} catalogue sources", sources.len(), self.catalog.len());
        Ok(sources)
    }
}

/// Significant lower-cased words of an expertise label
fn domain_terms(domain: &str) -> Vec<String> {
    domain
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.len() >= 3 && !is_stop_word(term))
        .map(str::to_string)
        .collect()
}

fn relevance(entry: &CatalogEntry, domain_terms: &[Vec<String>], topics: &[String]) -> f64 {
    let text = entry.searchable_text();
    let ratio = |terms: &[String]| {
        if terms.is_empty() {
            0.0
        } else {
            terms.iter().filter(|t| text.contains(t.as_str())).count() as f64 / terms.len() as f64
        }
    };

    let domain_ratio = domain_terms
        .iter()
        .map(|terms| ratio(terms.as_slice()))
        .fold(0.0, f64::max);
    let topic_ratio = ratio(topics);

    (DOMAIN_WEIGHT * domain_ratio + TOPIC_WEIGHT * topic_ratio).min(1.0)
}
