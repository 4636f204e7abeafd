//! Requirement scoring domain
//!
//! Turns free query text into a [`RequirementProfile`]: three keyword-ratio
//! scores plus three capability flags. The profile drives specialist
//! selection and is computed once per query.

pub mod profile;
pub mod scorer;

pub use profile::RequirementProfile;
pub use scorer::RequirementScorer;
