//! Progress reporting for coordination runs

use colored::Colorize;
use council_application::ports::progress::ProgressNotifier;
use council_domain::{Phase, SpecialistId};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with indicatif bars on stderr.
///
/// Only the dispatch phase gets a bar; the other phases finish too quickly
/// to be worth drawing.
pub struct ProgressReporter {
    multi: MultiProgress,
    dispatch_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            dispatch_bar: Mutex::new(None),
        }
    }

    fn dispatch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        if *phase != Phase::Dispatch {
            return;
        }

        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::dispatch_style());
        pb.set_prefix(phase.display_name().to_string());
        pb.set_message("Consulting specialists...");

        if let Ok(mut bar) = self.dispatch_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_specialist_complete(&self, specialist: &SpecialistId, success: bool) {
        let Ok(bar) = self.dispatch_bar.lock() else {
            return;
        };
        if let Some(pb) = bar.as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), specialist)
            } else {
                format!("{} {}", "x".red(), specialist)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if *phase != Phase::Dispatch {
            return;
        }
        if let Some(pb) = self.dispatch_bar.lock().ok().and_then(|mut bar| bar.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr.
///
/// Used when stderr is not a terminal, where bars would only add noise.
pub struct SimpleProgress;

impl SimpleProgress {
    fn phase_line(phase: &Phase, total_tasks: usize) -> String {
        if *phase == Phase::Dispatch {
            format!(
                "{} {} ({} specialists)",
                "->".cyan(),
                phase.display_name().bold(),
                total_tasks
            )
        } else {
            format!("{} {}", "->".cyan(), phase.display_name().bold())
        }
    }

    fn specialist_line(specialist: &SpecialistId, success: bool) -> String {
        if success {
            format!("  {} {}", "v".green(), specialist)
        } else {
            format!("  {} {} (failed)", "x".red(), specialist)
        }
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!("{}", Self::phase_line(phase, total_tasks));
    }

    fn on_specialist_complete(&self, specialist: &SpecialistId, success: bool) {
        eprintln!("{}", Self::specialist_line(specialist, success));
    }

    fn on_phase_complete(&self, _phase: &Phase) {}
}
