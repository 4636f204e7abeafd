//! Coordination configuration from TOML (`[coordination]` section)

use council_application::CoordinationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Coordination control
///
/// ```toml
/// [coordination]
/// specialist_timeout_secs = 30   # 0 waits indefinitely
/// enable_search = true
/// enable_sources = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCoordinationConfig {
    pub specialist_timeout_secs: u64,
    pub enable_search: bool,
    pub enable_sources: bool,
}

impl Default for FileCoordinationConfig {
    fn default() -> Self {
        Self {
            specialist_timeout_secs: 30,
            enable_search: true,
            enable_sources: true,
        }
    }
}

impl FileCoordinationConfig {
    pub fn to_params(&self) -> CoordinationParams {
        let timeout = (self.specialist_timeout_secs > 0)
            .then(|| Duration::from_secs(self.specialist_timeout_secs));

        CoordinationParams::default()
            .with_specialist_timeout(timeout)
            .with_search(self.enable_search)
            .with_sources(self.enable_sources)
    }
}
