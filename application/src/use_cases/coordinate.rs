//! Coordinate use case
//!
//! Orchestrates one request end to end: score, select, dispatch,
//! synthesize, attribute sources.

use crate::config::CoordinationParams;
use crate::ports::coordination_logger::{
    CoordinationEvent, CoordinationLogger, NoCoordinationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::search_enhancer::{NoSearch, SearchEnhancer};
use crate::ports::source_attributor::{NoSources, SourceAttributor};
use crate::use_cases::dispatch::{DispatchError, Dispatcher};
use council_domain::{
    CallerProfile, CoordinatedAnswer, DomainError, Phase, Query, RequirementProfile,
    RequirementScorer, SourceReference, SpecialistRegistry, SpecialistResult,
    SpecialistSelector, Synthesizer,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors surfaced to the caller of [`CoordinateUseCase`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("No specialists selected; the registry has no general specialist")]
    EmptyActiveSet,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<DomainError> for CoordinateError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidQuery(msg) => CoordinateError::InvalidQuery(msg),
            DomainError::EmptyActiveSet => CoordinateError::EmptyActiveSet,
            err @ DomainError::DuplicateSpecialist(_) => {
                CoordinateError::Configuration(err.to_string())
            }
        }
    }
}

impl From<DispatchError> for CoordinateError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::EmptyActiveSet => CoordinateError::EmptyActiveSet,
            DispatchError::Cancelled => CoordinateError::Cancelled,
        }
    }
}

/// Input for the Coordinate use case
#[derive(Debug, Clone)]
pub struct CoordinateInput {
    /// Raw query text; validated on execution
    pub text: String,
    /// Opaque caller profile
    pub profile: Option<CallerProfile>,
    /// Opaque analysis mode hint
    pub analysis_mode: Option<String>,
}

impl CoordinateInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            profile: None,
            analysis_mode: None,
        }
    }

    pub fn with_profile(mut self, profile: CallerProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_analysis_mode(mut self, mode: impl Into<String>) -> Self {
        self.analysis_mode = Some(mode.into());
        self
    }

    fn into_query(self) -> Result<Query, DomainError> {
        let mut query = Query::new(self.text)?;
        if let Some(profile) = self.profile {
            query = query.with_profile(profile);
        }
        if let Some(mode) = self.analysis_mode {
            query = query.with_analysis_mode(mode);
        }
        Ok(query)
    }
}

/// Use case for answering a query with a council of specialists
pub struct CoordinateUseCase {
    registry: Arc<SpecialistRegistry>,
    search: Arc<dyn SearchEnhancer>,
    sources: Arc<dyn SourceAttributor>,
    logger: Arc<dyn CoordinationLogger>,
    params: CoordinationParams,
    cancellation_token: Option<CancellationToken>,
    scorer: RequirementScorer,
    selector: SpecialistSelector,
    synthesizer: Synthesizer,
}

impl CoordinateUseCase {
    pub fn new(registry: Arc<SpecialistRegistry>) -> Self {
        Self {
            registry,
            search: Arc::new(NoSearch),
            sources: Arc::new(NoSources),
            logger: Arc::new(NoCoordinationLogger),
            params: CoordinationParams::default(),
            cancellation_token: None,
            scorer: RequirementScorer::new(),
            selector: SpecialistSelector::new(),
            synthesizer: Synthesizer::new(),
        }
    }

    pub fn with_search(mut self, search: Arc<dyn SearchEnhancer>) -> Self {
        self.search = search;
        self
    }

    pub fn with_sources(mut self, sources: Arc<dyn SourceAttributor>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn CoordinationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_params(mut self, params: CoordinationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn registry(&self) -> &SpecialistRegistry {
        &self.registry
    }

    /// Convenience entry point mirroring [`CoordinateInput`]
    pub async fn coordinate(
        &self,
        text: &str,
        profile: Option<CallerProfile>,
        analysis_mode: Option<&str>,
    ) -> Result<CoordinatedAnswer, CoordinateError> {
        let mut input = CoordinateInput::new(text);
        input.profile = profile;
        input.analysis_mode = analysis_mode.map(str::to_string);
        self.execute(input).await
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: CoordinateInput,
    ) -> Result<CoordinatedAnswer, CoordinateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: CoordinateInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<CoordinatedAnswer, CoordinateError> {
        let started = Instant::now();
        let query = input.into_query()?;

        info!("Coordinating query ({} chars)", query.text().chars().count());

        // Phase 1: Scoring
        progress.on_phase_start(&Phase::Scoring, 1);
        let profile = self.scorer.score(&query);
        progress.on_phase_complete(&Phase::Scoring);
        debug!(?profile, "Requirement profile");
        self.log_scored(&profile);

        // Phase 2: Selection
        progress.on_phase_start(&Phase::Selection, self.registry.len());
        let active = self.selector.select(&profile, &self.registry);
        progress.on_phase_complete(&Phase::Selection);
        if active.is_empty() {
            warn!("Selection produced no specialists");
            return Err(CoordinateError::EmptyActiveSet);
        }
        let active_ids: Vec<String> = active.iter().map(|s| s.id().to_string()).collect();
        info!("Selected specialists: {}", active_ids.join(", "));
        self.logger.log(CoordinationEvent::new(
            "specialists_selected",
            json!({ "specialists": active_ids }),
        ));

        // Phase 3: Dispatch
        let mut dispatcher = Dispatcher::new(Arc::clone(&self.search), self.params.clone());
        if let Some(ref token) = self.cancellation_token {
            dispatcher = dispatcher.with_cancellation(token.clone());
        }
        let results = dispatcher.dispatch(&query, &active, progress).await?;
        for result in &results {
            self.log_result(result);
        }

        // Phase 4: Synthesis
        progress.on_phase_start(&Phase::Synthesis, 1);
        let answer = self.synthesizer.synthesize(&results, &profile);
        progress.on_phase_complete(&Phase::Synthesis);

        // Phase 5: Attribution
        let sources = if self.params.enable_sources {
            progress.on_phase_start(&Phase::Attribution, 1);
            let sources = self.attribute(&answer.primary_analysis, &results).await?;
            progress.on_phase_complete(&Phase::Attribution);
            sources
        } else {
            Vec::new()
        };

        let answer = answer.with_sources(sources).with_elapsed(started.elapsed());

        info!(
            "Answer synthesized from {} specialists (confidence {:.2}) in {:.2}s",
            answer.specialists_used.len(),
            answer.aggregate_confidence,
            answer.elapsed.as_secs_f64()
        );
        self.logger.log(CoordinationEvent::new(
            "answer_synthesized",
            json!({
                "specialists_used": answer.specialists_used,
                "aggregate_confidence": answer.aggregate_confidence,
                "query_complexity": answer.query_complexity,
                "sources": answer.sources.len(),
                "duration_ms": answer.elapsed.as_millis() as u64,
            }),
        ));

        Ok(answer)
    }

    async fn attribute(
        &self,
        text: &str,
        results: &[SpecialistResult],
    ) -> Result<Vec<SourceReference>, CoordinateError> {
        let mut domains: Vec<String> = Vec::new();
        for result in results.iter().filter(|r| r.is_success()) {
            if !domains.contains(&result.specialty) {
                domains.push(result.specialty.clone());
            }
        }

        let attribution = self.sources.attribute(text, &domains);
        let outcome = match self.cancellation_token {
            Some(ref token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(CoordinateError::Cancelled),
                outcome = attribution => outcome,
            },
            None => attribution.await,
        };

        Ok(match outcome {
            Ok(sources) => {
                debug!("Attributed {} sources", sources.len());
                sources
            }
            Err(e) => {
                warn!("Source attribution unavailable: {}", e);
                Vec::new()
            }
        })
    }

    fn log_scored(&self, profile: &RequirementProfile) {
        self.logger.log(CoordinationEvent::new(
            "query_scored",
            json!({
                "complexity": profile.complexity,
                "data_focus": profile.data_focus,
                "research_focus": profile.research_focus,
                "requires_modeling": profile.requires_modeling,
                "requires_comparison": profile.requires_comparison,
                "requires_optimization": profile.requires_optimization,
            }),
        ));
    }

    fn log_result(&self, result: &SpecialistResult) {
        self.logger.log(CoordinationEvent::new(
            "specialist_completed",
            json!({
                "specialist": result.specialist,
                "success": result.is_success(),
                "confidence": result.confidence,
                "failure": result.failure.as_ref().map(|f| f.to_string()),
            }),
        ));
    }
}
