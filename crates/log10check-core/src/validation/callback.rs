//! Callback support for conformance runs.
//!
//! Callbacks observe a run as it progresses and can stop it early.

use crate::core::types::Precision;
use crate::validation::report::{CaseOutcome, ConformanceReport};
use tracing::{debug, info, warn};

/// Trait for conformance run callbacks.
pub trait ValidationCallback {
    /// Called before the first check.
    fn on_run_start(&mut self, implementation: &str, precision: Precision) {
        let _ = (implementation, precision);
    }

    /// Called after each check.
    ///
    /// Returns `true` to continue the run, `false` to stop early.
    fn on_case_end(&mut self, outcome: &CaseOutcome) -> bool {
        let _ = outcome;
        true
    }

    /// Called once the run has finished.
    fn on_run_end(&mut self, report: &ConformanceReport) {
        let _ = report;
    }
}

/// A no-op callback that does nothing.
pub struct NoOpCallback;

impl ValidationCallback for NoOpCallback {}

/// A callback that logs progress through `tracing`.
#[derive(Debug, Default)]
pub struct TracingCallback {
    checks: usize,
}

impl TracingCallback {
    /// Create a new logging callback.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValidationCallback for TracingCallback {
    fn on_run_start(&mut self, implementation: &str, precision: Precision) {
        self.checks = 0;
        info!(implementation, %precision, "starting log10 conformance run");
    }

    fn on_case_end(&mut self, outcome: &CaseOutcome) -> bool {
        self.checks += 1;
        match &outcome.error {
            None => debug!(
                check = self.checks,
                kind = ?outcome.kind,
                input = outcome.input,
                result = outcome.result,
                "pass"
            ),
            Some(error) => warn!(check = self.checks, kind = ?outcome.kind, "{}", error),
        }
        true
    }

    fn on_run_end(&mut self, report: &ConformanceReport) {
        info!(
            passed = report.passed,
            checks = report.checks_run,
            failures = report.failures.len(),
            elapsed_us = report.elapsed.as_micros() as u64,
            "log10 conformance run complete"
        );
    }
}

/// Stops the run after a fixed number of checks.
///
/// The callback is consulted after each check, so at least one check
/// always runs; `StopAfter::new(0)` behaves like `StopAfter::new(1)`.
#[derive(Debug)]
pub struct StopAfter {
    remaining: usize,
}

impl StopAfter {
    /// Allow `checks` checks before stopping.
    pub fn new(checks: usize) -> Self {
        Self { remaining: checks }
    }
}

impl ValidationCallback for StopAfter {
    fn on_case_end(&mut self, _outcome: &CaseOutcome) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }
}
