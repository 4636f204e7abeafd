//! Errors shared by the collaborator ports.

use thiserror::Error;

/// Failure of an external collaborator (search or source attribution).
///
/// Never fatal: the coordinator logs it and carries on without enhancement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}
