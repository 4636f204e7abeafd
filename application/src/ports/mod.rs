//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod collaborator;
pub mod coordination_logger;
pub mod progress;
pub mod search_enhancer;
pub mod source_attributor;
