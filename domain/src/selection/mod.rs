//! Specialist selection rules
//!
//! Maps a [`RequirementProfile`](crate::requirement::RequirementProfile) to
//! the specialists that should answer. Each rule is independent, so the
//! result does not depend on evaluation order.

mod selector;

pub use selector::{
    COMPLEXITY_DATA_THRESHOLD, COMPLEXITY_RESEARCH_THRESHOLD, DATA_FOCUS_THRESHOLD,
    RESEARCH_FOCUS_THRESHOLD, SpecialistSelector,
};
