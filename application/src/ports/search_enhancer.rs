//! Search enhancement port
//!
//! Decides, per specialist, whether external search would improve the
//! answer, and if so supplies a formatted context block.

use super::collaborator::CollaboratorError;
use async_trait::async_trait;
use council_domain::{SearchDecision, SpecialistId};

/// Search-enhancement collaborator.
///
/// Any error is treated as `should_search = false` by the dispatcher.
#[async_trait]
pub trait SearchEnhancer: Send + Sync {
    /// Decide whether a specialist should search for this query
    async fn decide(
        &self,
        query: &str,
        expertise: &str,
        specialist: &SpecialistId,
    ) -> Result<SearchDecision, CollaboratorError>;

    /// Produce the context block for a positive decision.
    ///
    /// The returned text is passed to the specialist verbatim; an empty
    /// string means nothing useful was found.
    async fn context(
        &self,
        query: &str,
        expertise: &str,
        decision: &SearchDecision,
    ) -> Result<String, CollaboratorError>;
}

/// Search disabled: never searches
pub struct NoSearch;

#[async_trait]
impl SearchEnhancer for NoSearch {
    async fn decide(
        &self,
        _query: &str,
        _expertise: &str,
        _specialist: &SpecialistId,
    ) -> Result<SearchDecision, CollaboratorError> {
        Ok(SearchDecision::skip("Search disabled"))
    }

    async fn context(
        &self,
        _query: &str,
        _expertise: &str,
        _decision: &SearchDecision,
    ) -> Result<String, CollaboratorError> {
        Ok(String::new())
    }
}
