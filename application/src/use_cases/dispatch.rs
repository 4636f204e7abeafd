//! Specialist dispatch
//!
//! Runs the active specialists concurrently, one task each, and waits for
//! every task to reach a terminal state. A failing specialist only degrades
//! its own [`SpecialistResult`]; the dispatch as a whole never fails for a
//! non-empty active set (cancellation aside).

use crate::config::CoordinationParams;
use crate::ports::progress::ProgressNotifier;
use crate::ports::search_enhancer::SearchEnhancer;
use council_domain::{
    Phase, Query, Specialist, SpecialistFailure, SpecialistId, SpecialistResult,
};
use std::any::Any;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that end a dispatch early
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No specialists to dispatch")]
    EmptyActiveSet,

    #[error("Dispatch cancelled")]
    Cancelled,
}

/// Concurrent, failure-isolating specialist runner
pub struct Dispatcher {
    search: Arc<dyn SearchEnhancer>,
    params: CoordinationParams,
    cancellation_token: Option<CancellationToken>,
}

impl Dispatcher {
    pub fn new(search: Arc<dyn SearchEnhancer>, params: CoordinationParams) -> Self {
        Self {
            search,
            params,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Invoke every active specialist concurrently.
    ///
    /// Returns exactly one result per specialist, in `active` order,
    /// whatever order the tasks finish in.
    pub async fn dispatch(
        &self,
        query: &Query,
        active: &[Arc<dyn Specialist>],
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<SpecialistResult>, DispatchError> {
        if active.is_empty() {
            return Err(DispatchError::EmptyActiveSet);
        }

        info!("Dispatching {} specialists", active.len());
        debug!(
            has_profile = query.profile().is_some(),
            analysis_mode = query.analysis_mode().unwrap_or("standard"),
            "Caller context"
        );
        progress.on_phase_start(&Phase::Dispatch, active.len());

        let text: Arc<str> = Arc::from(query.text());
        let timeout = self.params.specialist_timeout;
        let enable_search = self.params.enable_search;
        let mut join_set = JoinSet::new();

        for (index, specialist) in active.iter().enumerate() {
            let specialist = Arc::clone(specialist);
            let search = Arc::clone(&self.search);
            let text = Arc::clone(&text);

            join_set.spawn(async move {
                let id = specialist.id().clone();
                let specialty = specialist.descriptor().expertise_label.clone();
                let invocation = Self::run_specialist(specialist, search, text, enable_search);

                // Wrap with timeout if configured
                let result = if let Some(timeout) = timeout {
                    match tokio::time::timeout(timeout, invocation).await {
                        Ok(result) => result,
                        Err(_) => SpecialistResult::failure(
                            id,
                            specialty,
                            SpecialistFailure::timed_out(timeout),
                        ),
                    }
                } else {
                    invocation.await
                };

                (index, result)
            });
        }

        let mut slots: Vec<Option<SpecialistResult>> = vec![None; active.len()];

        loop {
            let joined = if let Some(ref token) = self.cancellation_token {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        join_set.abort_all();
                        return Err(DispatchError::Cancelled);
                    }
                    joined = join_set.join_next() => joined,
                }
            } else {
                join_set.join_next().await
            };

            let Some(joined) = joined else {
                break;
            };

            match joined {
                Ok((index, result)) => {
                    let success = result.is_success();
                    if success {
                        info!(
                            "Specialist {} responded (confidence {:.2})",
                            result.specialist, result.confidence
                        );
                    } else {
                        warn!(
                            "Specialist {} failed: {}",
                            result.specialist,
                            result
                                .failure
                                .as_ref()
                                .map(|f| f.to_string())
                                .unwrap_or_default()
                        );
                    }
                    progress.on_specialist_complete(&result.specialist, success);
                    slots[index] = Some(result);
                }
                Err(e) => {
                    // Filled in below: the slot stays empty
                    warn!("Specialist task join error: {}", e);
                }
            }
        }

        let results = slots
            .into_iter()
            .zip(active)
            .map(|(slot, specialist)| {
                slot.unwrap_or_else(|| {
                    let id = specialist.id().clone();
                    progress.on_specialist_complete(&id, false);
                    SpecialistResult::failure(
                        id,
                        specialist.descriptor().expertise_label.clone(),
                        SpecialistFailure::panicked("specialist task ended without a result"),
                    )
                })
            })
            .collect();

        progress.on_phase_complete(&Phase::Dispatch);
        Ok(results)
    }

    /// One specialist's unit of work: optional search enrichment, then the
    /// four capability calls as a single atomic result.
    async fn run_specialist(
        specialist: Arc<dyn Specialist>,
        search: Arc<dyn SearchEnhancer>,
        query: Arc<str>,
        enable_search: bool,
    ) -> SpecialistResult {
        let descriptor = specialist.descriptor().clone();

        let search_context = if enable_search {
            Self::search_context(search.as_ref(), &query, &descriptor.expertise_label, &descriptor.id)
                .await
        } else {
            String::new()
        };

        // Capability calls are synchronous and may block; run them off the
        // async workers so the surrounding timeout can still fire.
        let id = descriptor.id.clone();
        let specialty = descriptor.expertise_label.clone();
        let invocation = tokio::task::spawn_blocking(move || {
            let confidence = specialist.relevance(&query);
            let analysis = specialist.respond(&query, &search_context);
            SpecialistResult::success(id, specialty, analysis, confidence)
                .with_insights(specialist.insights(&query))
                .with_recommendations(specialist.recommendations(&query))
        });

        let failure = match invocation.await {
            Ok(result) => match result.validate() {
                Ok(()) => return result,
                Err(failure) => failure,
            },
            Err(e) if e.is_panic() => SpecialistFailure::panicked(panic_message(e.into_panic().as_ref())),
            Err(_) => SpecialistFailure::aborted(),
        };

        SpecialistResult::failure(descriptor.id, descriptor.expertise_label, failure)
    }

    /// Ask the search collaborator for context. Unavailability means no context.
    async fn search_context(
        search: &dyn SearchEnhancer,
        query: &str,
        expertise: &str,
        id: &SpecialistId,
    ) -> String {
        let decision = match search.decide(query, expertise, id).await {
            Ok(decision) => decision,
            Err(e) => {
                warn!("Search decision for {} unavailable: {}", id, e);
                return String::new();
            }
        };

        debug!(
            "Search decision for {}: {} ({}, confidence {:.2}) - {}",
            id,
            if decision.should_search { "SEARCH" } else { "NO SEARCH" },
            decision.search_type,
            decision.confidence,
            decision.reasoning
        );

        if !decision.should_search {
            return String::new();
        }

        match search.context(query, expertise, &decision).await {
            Ok(context) => context,
            Err(e) => {
                warn!("Search context for {} unavailable: {}", id, e);
                String::new()
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "specialist panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::collaborator::CollaboratorError;
    use crate::ports::progress::NoProgress;
    use crate::ports::search_enhancer::NoSearch;
    use async_trait::async_trait;
    use council_domain::{
        FailureKind, SearchDecision, SearchType, SpecialistDescriptor, SpecialistRegistry,
        SpecialistRole, specialist::append_search_context,
    };
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    enum Behavior {
        Answer { analysis: &'static str, confidence: f64 },
        Panic,
        EmptyAnalysis,
        OutOfRange,
        Block(Duration),
    }

    struct MockSpecialist {
        descriptor: SpecialistDescriptor,
        behavior: Behavior,
    }

    impl MockSpecialist {
        fn new(id: &str, behavior: Behavior) -> Arc<dyn Specialist> {
            Arc::new(Self {
                descriptor: SpecialistDescriptor::new(id, id, format!("{} expertise", id), SpecialistRole::General),
                behavior,
            })
        }

        fn answering(id: &str, analysis: &'static str, confidence: f64) -> Arc<dyn Specialist> {
            Self::new(id, Behavior::Answer { analysis, confidence })
        }
    }

    impl Specialist for MockSpecialist {
        fn descriptor(&self) -> &SpecialistDescriptor {
            &self.descriptor
        }

        fn relevance(&self, _query: &str) -> f64 {
            match self.behavior {
                Behavior::Answer { confidence, .. } => confidence,
                Behavior::Panic => panic!("injected failure in {}", self.descriptor.id),
                Behavior::EmptyAnalysis => 0.5,
                Behavior::OutOfRange => 3.0,
                Behavior::Block(duration) => {
                    std::thread::sleep(duration);
                    0.5
                }
            }
        }

        fn respond(&self, _query: &str, search_context: &str) -> String {
            match self.behavior {
                Behavior::Answer { analysis, .. } => {
                    append_search_context(analysis.to_string(), "Context:", search_context)
                }
                Behavior::EmptyAnalysis => String::new(),
                _ => "text".to_string(),
            }
        }

        fn insights(&self, _query: &str) -> Vec<String> {
            vec![format!("{} insight", self.descriptor.id)]
        }

        fn recommendations(&self, _query: &str) -> Vec<String> {
            vec![format!("{} recommendation", self.descriptor.id)]
        }
    }

    /// Search collaborator with scripted behavior
    struct MockSearch {
        should_search: bool,
        context: Result<String, CollaboratorError>,
        delay: Option<Duration>,
        decided_for: Mutex<Vec<String>>,
    }

    impl MockSearch {
        fn new(should_search: bool, context: Result<String, CollaboratorError>) -> Self {
            Self {
                should_search,
                context,
                delay: None,
                decided_for: Mutex::new(Vec::new()),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl SearchEnhancer for MockSearch {
        async fn decide(
            &self,
            _query: &str,
            _expertise: &str,
            specialist: &SpecialistId,
        ) -> Result<SearchDecision, CollaboratorError> {
            self.decided_for.lock().unwrap().push(specialist.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(SearchDecision {
                should_search: self.should_search,
                search_type: SearchType::FreshData,
                confidence: 0.7,
                reasoning: "test".to_string(),
            })
        }

        async fn context(
            &self,
            _query: &str,
            _expertise: &str,
            _decision: &SearchDecision,
        ) -> Result<String, CollaboratorError> {
            self.context.clone()
        }
    }

    struct UnavailableSearch;

    #[async_trait]
    impl SearchEnhancer for UnavailableSearch {
        async fn decide(
            &self,
            _query: &str,
            _expertise: &str,
            _specialist: &SpecialistId,
        ) -> Result<SearchDecision, CollaboratorError> {
            Err(CollaboratorError::Unavailable("offline".to_string()))
        }

        async fn context(
            &self,
            _query: &str,
            _expertise: &str,
            _decision: &SearchDecision,
        ) -> Result<String, CollaboratorError> {
            unreachable!("context must not be requested after a failed decision")
        }
    }

    fn query(text: &str) -> Query {
        Query::new(text).unwrap()
    }

    fn dispatcher(search: Arc<dyn SearchEnhancer>) -> Dispatcher {
        Dispatcher::new(search, CoordinationParams::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_one_result_per_specialist_in_active_order() {
        let active = vec![
            MockSpecialist::answering("a", "A", 0.2),
            MockSpecialist::answering("b", "B", 0.9),
            MockSpecialist::answering("c", "C", 0.5),
        ];
        let results = dispatcher(Arc::new(NoSearch))
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();

        let ids: Vec<_> = results.iter().map(|r| r.specialist.to_string()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(results.iter().all(|r| r.is_success()));
        assert_eq!(results[1].confidence, 0.9);
        assert_eq!(results[1].specialty, "b expertise");
        assert_eq!(results[1].insights, vec!["b insight"]);
    }

    #[tokio::test]
    async fn test_panics_are_isolated() {
        let active = vec![
            MockSpecialist::answering("ok", "fine", 0.6),
            MockSpecialist::new("bad1", Behavior::Panic),
            MockSpecialist::new("bad2", Behavior::Panic),
        ];
        let results = dispatcher(Arc::new(NoSearch))
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        for failed in &results[1..] {
            assert_eq!(failed.confidence, 0.0);
            assert_eq!(failed.analysis, "Analysis unavailable due to processing error");
            assert!(failed.insights.is_empty());
            assert!(failed.recommendations.is_empty());
            let failure = failed.failure.as_ref().unwrap();
            assert_eq!(failure.kind, FailureKind::Panicked);
            assert!(failure.message.contains("injected failure"));
        }
    }

    #[tokio::test]
    async fn test_malformed_output_is_captured() {
        let active = vec![
            MockSpecialist::new("empty", Behavior::EmptyAnalysis),
            MockSpecialist::new("range", Behavior::OutOfRange),
        ];
        let results = dispatcher(Arc::new(NoSearch))
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();

        for result in &results {
            assert_eq!(
                result.failure.as_ref().map(|f| f.kind),
                Some(FailureKind::MalformedOutput)
            );
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[tokio::test]
    async fn test_empty_active_set_rejected() {
        let result = dispatcher(Arc::new(NoSearch))
            .dispatch(&query("q"), &[], &NoProgress)
            .await;
        assert_eq!(result.unwrap_err(), DispatchError::EmptyActiveSet);
    }

    #[tokio::test]
    async fn test_search_context_passed_to_respond() {
        let search = Arc::new(MockSearch::new(true, Ok("1. Fresh item".to_string())));
        let active = vec![MockSpecialist::answering("a", "Base", 0.5)];
        let results = dispatcher(search.clone())
            .dispatch(&query("latest news"), &active, &NoProgress)
            .await
            .unwrap();

        assert_eq!(results[0].analysis, "Base\n\nContext:\n1. Fresh item");
        assert_eq!(*search.decided_for.lock().unwrap(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_negative_decision_skips_context() {
        let search = Arc::new(MockSearch::new(false, Ok("unused".to_string())));
        let active = vec![MockSpecialist::answering("a", "Base", 0.5)];
        let results = dispatcher(search)
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();
        assert_eq!(results[0].analysis, "Base");
    }

    #[tokio::test]
    async fn test_search_unavailable_is_not_fatal() {
        let active = vec![MockSpecialist::answering("a", "Base", 0.5)];
        let results = dispatcher(Arc::new(UnavailableSearch))
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();
        assert!(results[0].is_success());
        assert_eq!(results[0].analysis, "Base");
    }

    #[tokio::test]
    async fn test_search_context_error_is_not_fatal() {
        let search = Arc::new(MockSearch::new(
            true,
            Err(CollaboratorError::RequestFailed("500".to_string())),
        ));
        let active = vec![MockSpecialist::answering("a", "Base", 0.5)];
        let results = dispatcher(search)
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();
        assert!(results[0].is_success());
        assert_eq!(results[0].analysis, "Base");
    }

    #[tokio::test]
    async fn test_search_disabled_never_consults_collaborator() {
        let search = Arc::new(MockSearch::new(true, Ok("ctx".to_string())));
        let active = vec![MockSpecialist::answering("a", "Base", 0.5)];
        let results = Dispatcher::new(search.clone(), CoordinationParams::default().with_search(false))
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();
        assert_eq!(results[0].analysis, "Base");
        assert!(search.decided_for.lock().unwrap().is_empty());
    }

    // Hardening beyond plain fan-out: a hanging specialist must not block the request.
    #[tokio::test(start_paused = true)]
    async fn test_timeout_recorded_as_failure() {
        let search = Arc::new(
            MockSearch::new(true, Ok("ctx".to_string())).with_delay(Duration::from_secs(3600)),
        );
        let active = vec![MockSpecialist::answering("slow", "Base", 0.5)];
        let params =
            CoordinationParams::default().with_specialist_timeout(Some(Duration::from_millis(50)));

        let results = Dispatcher::new(search, params)
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();

        let failure = results[0].failure.as_ref().unwrap();
        assert_eq!(failure.kind, FailureKind::TimedOut);
        assert_eq!(results[0].confidence, 0.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_blocking_specialist_times_out() {
        let active = vec![
            MockSpecialist::new("stuck", Behavior::Block(Duration::from_secs(1))),
            MockSpecialist::answering("ok", "fine", 0.6),
        ];
        let params =
            CoordinationParams::default().with_specialist_timeout(Some(Duration::from_millis(50)));

        let start = std::time::Instant::now();
        let results = Dispatcher::new(Arc::new(NoSearch), params)
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();

        assert!(start.elapsed() < Duration::from_millis(800));
        let failure = results[0].failure.as_ref().unwrap();
        assert_eq!(failure.kind, FailureKind::TimedOut);
        assert_eq!(results[0].confidence, 0.0);
        assert!(results[1].is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_specialists_run_concurrently() {
        let search = Arc::new(
            MockSearch::new(false, Ok(String::new())).with_delay(Duration::from_millis(100)),
        );
        let active = vec![
            MockSpecialist::answering("a", "A", 0.1),
            MockSpecialist::answering("b", "B", 0.2),
            MockSpecialist::answering("c", "C", 0.3),
        ];

        let start = tokio::time::Instant::now();
        let results = dispatcher(search)
            .dispatch(&query("q"), &active, &NoProgress)
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(start.elapsed() < Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_aborts_dispatch() {
        let search = Arc::new(
            MockSearch::new(false, Ok(String::new())).with_delay(Duration::from_secs(60)),
        );
        let active = vec![MockSpecialist::answering("a", "A", 0.1)];
        let token = CancellationToken::new();
        token.cancel();

        let result = Dispatcher::new(search, CoordinationParams::default())
            .with_cancellation(token)
            .dispatch(&query("q"), &active, &NoProgress)
            .await;
        assert_eq!(result.unwrap_err(), DispatchError::Cancelled);
    }

    #[tokio::test]
    async fn test_builtin_registry_dispatch() {
        let registry = SpecialistRegistry::with_builtins();
        let active: Vec<_> = registry.iter().cloned().collect();
        let results = dispatcher(Arc::new(NoSearch))
            .dispatch(&query("forecast demand with a regression model"), &active, &NoProgress)
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.is_success()));
        assert!(results[1].analysis.contains("predictive modeling"));
    }
}
