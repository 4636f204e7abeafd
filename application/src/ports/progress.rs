//! Progress notification port
//!
//! Defines the interface for reporting progress during coordination.

use council_domain::{Phase, SpecialistId};

/// Callback for progress updates during coordination
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a specialist finishes, successfully or not
    fn on_specialist_complete(&self, specialist: &SpecialistId, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_specialist_complete(&self, _specialist: &SpecialistId, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
