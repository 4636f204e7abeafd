//! Coordination parameters for use case control.
//!
//! [`CoordinationParams`] groups the static parameters that control a
//! [`CoordinateUseCase`](crate::use_cases::coordinate::CoordinateUseCase)
//! run. These are application-layer concerns, not domain rules.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-specialist timeout.
pub const DEFAULT_SPECIALIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Coordination control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinationParams {
    /// Timeout for one specialist task, search enrichment included.
    /// Expiry is recorded as a captured failure. `None` waits indefinitely.
    pub specialist_timeout: Option<Duration>,
    /// Consult the search-enhancement collaborator.
    pub enable_search: bool,
    /// Consult the source-attribution collaborator.
    pub enable_sources: bool,
}

impl Default for CoordinationParams {
    fn default() -> Self {
        Self {
            specialist_timeout: Some(DEFAULT_SPECIALIST_TIMEOUT),
            enable_search: true,
            enable_sources: true,
        }
    }
}

impl CoordinationParams {
    // ==================== Builder Methods ====================

    pub fn with_specialist_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.specialist_timeout = timeout;
        self
    }

    pub fn with_search(mut self, enabled: bool) -> Self {
        self.enable_search = enabled;
        self
    }

    pub fn with_sources(mut self, enabled: bool) -> Self {
        self.enable_sources = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = CoordinationParams::default();
        assert_eq!(params.specialist_timeout, Some(Duration::from_secs(30)));
        assert!(params.enable_search);
        assert!(params.enable_sources);
    }

    #[test]
    fn test_builder() {
        let params = CoordinationParams::default()
            .with_specialist_timeout(None)
            .with_search(false)
            .with_sources(false);

        assert!(params.specialist_timeout.is_none());
        assert!(!params.enable_search);
        assert!(!params.enable_sources);
    }
}
