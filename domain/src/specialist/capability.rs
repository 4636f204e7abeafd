//! The specialist capability contract

use crate::core::string::{count_matches, normalize};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique key of a registered specialist (e.g. `"analyst"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialistId(String);

impl SpecialistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpecialistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SpecialistId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Which selection rule a specialist answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistRole {
    /// Always selected
    General,
    /// Selected for data-heavy, modeling or complex queries
    DataFocused,
    /// Selected for research-heavy or very complex queries
    ResearchFocused,
}

impl SpecialistRole {
    pub fn as_str(&self) -> &str {
        match self {
            SpecialistRole::General => "general",
            SpecialistRole::DataFocused => "data_focused",
            SpecialistRole::ResearchFocused => "research_focused",
        }
    }
}

impl std::fmt::Display for SpecialistRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static identity of a specialist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistDescriptor {
    pub id: SpecialistId,
    pub display_name: String,
    pub expertise_label: String,
    pub role: SpecialistRole,
}

impl SpecialistDescriptor {
    pub fn new(
        id: impl Into<SpecialistId>,
        display_name: impl Into<String>,
        expertise_label: impl Into<String>,
        role: SpecialistRole,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            expertise_label: expertise_label.into(),
            role,
        }
    }
}

/// Behavioral contract every specialist exposes.
///
/// All four operations are synchronous and must not panic for any string
/// input. The dispatcher still contains panics, but a panicking specialist
/// only ever degrades its own result.
pub trait Specialist: Send + Sync {
    /// Static identity
    fn descriptor(&self) -> &SpecialistDescriptor;

    /// Relevance of this specialist to the query, in `[0, 1]`.
    ///
    /// Also records the value as the last observed confidence.
    fn relevance(&self, query: &str) -> f64;

    /// Rule-based analysis text; never empty.
    ///
    /// A non-blank `search_context` is appended verbatim after a separator.
    fn respond(&self, query: &str, search_context: &str) -> String;

    /// Non-empty list of insights
    fn insights(&self, query: &str) -> Vec<String>;

    /// Non-empty list of recommendations
    fn recommendations(&self, query: &str) -> Vec<String>;

    /// Last relevance computed by this instance (diagnostics only)
    fn last_confidence(&self) -> f64 {
        0.0
    }

    fn id(&self) -> &SpecialistId {
        &self.descriptor().id
    }
}

/// `min(matched / total * 2, 1.0)` over a specialist's own keyword list.
pub fn keyword_relevance(query: &str, keywords: &[&str]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let matches = count_matches(&normalize(query), keywords);
    (matches as f64 / keywords.len() as f64 * 2.0).min(1.0)
}

/// Append search context after the analysis, introduced by `lead_in`.
pub fn append_search_context(base: String, lead_in: &str, search_context: &str) -> String {
    if search_context.trim().is_empty() {
        base
    } else {
        format!("{}\n\n{}\n{}", base, lead_in, search_context)
    }
}

/// Last-observed confidence, shared across concurrent requests.
///
/// Races between requests are benign: the value is never used for control flow.
#[derive(Debug, Default)]
pub struct ConfidenceCell(AtomicU64);

impl ConfidenceCell {
    pub fn new() -> Self {
        Self(AtomicU64::new(0f64.to_bits()))
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}
