//! Application layer for expert-council
//!
//! This crate contains the coordination use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CoordinationParams;
pub use ports::{
    collaborator::CollaboratorError,
    coordination_logger::{CoordinationEvent, CoordinationLogger, NoCoordinationLogger},
    progress::{NoProgress, ProgressNotifier},
    search_enhancer::{NoSearch, SearchEnhancer},
    source_attributor::{NoSources, SourceAttributor},
};
pub use use_cases::coordinate::{CoordinateError, CoordinateInput, CoordinateUseCase};
pub use use_cases::dispatch::{DispatchError, Dispatcher};
