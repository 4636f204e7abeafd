//! Synthesis domain - result types and the merge/ranking rules.
//!
//! - [`SpecialistResult`] - one specialist's output, success or captured failure
//! - [`CoordinatedAnswer`] - the merged answer returned to callers
//! - [`Synthesizer`] - ranking, merging, truncation and confidence aggregation

pub mod synthesizer;
pub mod value_objects;

pub use synthesizer::{
    ADDITIONAL_PERSPECTIVES_HEADER, FALLBACK_ANALYSIS, MAX_ADDITIONAL_PERSPECTIVES,
    MAX_LIST_ENTRIES, Synthesizer,
};
pub use value_objects::{
    ANALYSIS_UNAVAILABLE, CoordinatedAnswer, FailureKind, SpecialistFailure, SpecialistResult,
};
