//! Port for structured coordination event logging.
//!
//! Defines the [`CoordinationLogger`] trait for recording pipeline events
//! (scores, selections, per-specialist outcomes, the final answer) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record of each request (JSONL).

use serde_json::Value;

/// A structured coordination event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Adapters add the timestamp.
pub struct CoordinationEvent {
    /// Event type identifier (e.g., "query_scored", "specialist_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl CoordinationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging coordination events.
///
/// `log` is synchronous and non-fallible; logging failures never disturb
/// a request.
pub trait CoordinationLogger: Send + Sync {
    /// Record a coordination event.
    fn log(&self, event: CoordinationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoCoordinationLogger;

impl CoordinationLogger for NoCoordinationLogger {
    fn log(&self, _event: CoordinationEvent) {}
}
