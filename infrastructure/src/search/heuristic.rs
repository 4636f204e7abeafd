//! Offline search enhancer: keyword decision, no lookup.

use async_trait::async_trait;
use council_application::ports::collaborator::CollaboratorError;
use council_application::ports::search_enhancer::SearchEnhancer;
use council_domain::{SearchDecision, SpecialistId, decide_by_keywords, format_search_context};

/// Decides with the keyword heuristic but never finds anything, so
/// specialists always answer from their own rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSearchEnhancer;

impl HeuristicSearchEnhancer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchEnhancer for HeuristicSearchEnhancer {
    async fn decide(
        &self,
        query: &str,
        _expertise: &str,
        _specialist: &SpecialistId,
    ) -> Result<SearchDecision, CollaboratorError> {
        Ok(decide_by_keywords(query))
    }

    async fn context(
        &self,
        query: &str,
        _expertise: &str,
        decision: &SearchDecision,
    ) -> Result<String, CollaboratorError> {
        Ok(format_search_context(&[], query, decision.search_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::SearchType;

    #[tokio::test]
    async fn test_decision_follows_keywords() {
        let enhancer = HeuristicSearchEnhancer::new();
        let id = SpecialistId::from("analyst");

        let fresh = enhancer.decide("latest market moves", "x", &id).await.unwrap();
        assert!(fresh.should_search);
        assert_eq!(fresh.search_type, SearchType::FreshData);

        let plain = enhancer.decide("explain margins", "x", &id).await.unwrap();
        assert!(!plain.should_search);
        assert_eq!(plain.confidence, 0.8);
    }

    #[tokio::test]
    async fn test_context_is_always_empty() {
        let enhancer = HeuristicSearchEnhancer::new();
        let decision = decide_by_keywords("state-of-the-art methods");
        let context = enhancer
            .context("state-of-the-art methods", "Research", &decision)
            .await
            .unwrap();
        assert!(context.is_empty());
    }
}
