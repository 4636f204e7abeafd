//! Application-level configuration.
//!
//! - [`CoordinationParams`]: per-request control (timeouts, collaborator toggles)

pub mod coordination_params;

pub use coordination_params::CoordinationParams;
