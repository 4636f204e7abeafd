//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Specialist '{0}' is already registered")]
    DuplicateSpecialist(String),

    #[error("No specialists selected: the registry has no default specialist")]
    EmptyActiveSet,
}

impl DomainError {
    /// Check if this error comes from caller input rather than configuration
    pub fn is_caller_error(&self) -> bool {
        matches!(self, DomainError::InvalidQuery(_))
    }
}
