//! Domain layer for expert-council
//!
//! This crate contains the core coordination rules: requirement scoring,
//! the specialist capability and registry, selection, and synthesis.
//! It has no dependencies on an async runtime, infrastructure or presentation.
//!
//! # Core Concepts
//!
//! A [`Query`] is scored into a [`RequirementProfile`]. The
//! [`SpecialistSelector`] maps the profile to a subset of the
//! [`SpecialistRegistry`]; the application layer runs that subset
//! concurrently and the [`Synthesizer`] merges the per-specialist
//! [`SpecialistResult`]s into one [`CoordinatedAnswer`].

pub mod attribution;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod requirement;
pub mod search;
pub mod selection;
pub mod specialist;
pub mod synthesis;

// Re-export commonly used types
pub use attribution::SourceReference;
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    query::{CallerProfile, Query},
};
pub use pipeline::Phase;
pub use requirement::{RequirementProfile, RequirementScorer};
pub use search::{
    MAX_CONTEXT_HITS, SearchDecision, SearchHit, SearchType, decide_by_keywords,
    format_search_context,
};
pub use selection::SpecialistSelector;
pub use specialist::{
    Specialist, SpecialistDescriptor, SpecialistId, SpecialistRegistry, SpecialistRole,
};
pub use synthesis::{
    CoordinatedAnswer, FailureKind, SpecialistFailure, SpecialistResult, Synthesizer,
};
