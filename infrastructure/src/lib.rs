//! Infrastructure layer for expert-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod search;
pub mod sources;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileCoordinationConfig, FileOutputConfig, FileSearchConfig,
    FileSourcesConfig, SearchBackend,
};
pub use logging::JsonlCoordinationLogger;
#[cfg(feature = "web-tools")]
pub use search::DuckDuckGoSearchEnhancer;
pub use search::HeuristicSearchEnhancer;
#[cfg(feature = "web-tools")]
pub use sources::UrlValidator;
pub use sources::{CatalogEntry, CatalogSourceAttributor, builtin_catalog};
