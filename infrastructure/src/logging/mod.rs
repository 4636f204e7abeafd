//! Structured coordination event logging.
//!
//! Provides [`JsonlCoordinationLogger`], a JSONL file writer that implements
//! the [`CoordinationLogger`](council_application::CoordinationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlCoordinationLogger;
