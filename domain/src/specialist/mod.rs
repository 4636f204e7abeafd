//! Specialist domain
//!
//! A specialist is any type implementing the [`Specialist`] capability.
//! The [`SpecialistRegistry`] holds the process-wide catalogue; it is built
//! once at startup and shared read-only afterwards.
//!
//! Built-in specialists live in [`builtin`]:
//!
//! | Id | Role | Expertise |
//! |----|------|-----------|
//! | `analyst` | General (always selected) | Strategic Analysis & Insights |
//! | `data_scientist` | DataFocused | Data Science & Machine Learning |
//! | `researcher` | ResearchFocused | Academic Research & Methodology |

pub mod builtin;
pub mod capability;
pub mod registry;

pub use capability::{
    ConfidenceCell, Specialist, SpecialistDescriptor, SpecialistId, SpecialistRole,
    append_search_context, keyword_relevance,
};
pub use registry::SpecialistRegistry;
