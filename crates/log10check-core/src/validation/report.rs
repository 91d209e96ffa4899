//! Per-check outcomes and the report of a whole run.

use crate::core::error::{ConformanceError, Result};
use crate::core::types::Precision;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Which kind of check produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CheckKind {
    /// Comparison against a table row.
    Table,
    /// Input that must produce NaN.
    Nan,
    /// `10^log10(x) ≈ x`.
    RoundTrip,
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    /// Kind of check
    pub kind: CheckKind,
    /// Input passed to the function under test
    pub input: f64,
    /// Value the function returned
    pub result: f64,
    /// Failure, if the check did not pass
    pub error: Option<ConformanceError>,
}

impl CaseOutcome {
    /// Build an outcome from a check result.
    pub fn new(kind: CheckKind, input: f64, result: f64, check: Result<()>) -> Self {
        Self {
            kind,
            input,
            result,
            error: check.err(),
        }
    }

    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a conformance run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConformanceReport {
    /// Name of the implementation that was checked
    pub implementation: String,
    /// Precision the checks ran at
    pub precision: Precision,
    /// Number of checks attempted
    pub checks_run: usize,
    /// Number of checks that passed
    pub passed: usize,
    /// Failures in the order they were found
    pub failures: Vec<ConformanceError>,
    /// Whether the run stopped with checks left unattempted
    pub aborted: bool,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl ConformanceReport {
    /// Create an empty report.
    pub fn new<S: Into<String>>(implementation: S, precision: Precision) -> Self {
        Self {
            implementation: implementation.into(),
            precision,
            checks_run: 0,
            passed: 0,
            failures: Vec::new(),
            aborted: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Add an outcome to the tallies.
    pub fn record(&mut self, outcome: CaseOutcome) {
        self.checks_run += 1;
        match outcome.error {
            None => self.passed += 1,
            Some(error) => self.failures.push(error),
        }
    }

    /// Whether every check ran and passed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && !self.aborted
    }

    /// First failure, if any.
    pub fn first_failure(&self) -> Option<&ConformanceError> {
        self.failures.first()
    }

    /// Convert into a `Result`, surfacing the first failure.
    pub fn into_result(self) -> Result<()> {
        match self.failures.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "log10 [{}, {}]: {}/{} checks passed",
            self.implementation, self.precision, self.passed, self.checks_run
        )?;
        if self.aborted {
            write!(f, " (stopped early)")?;
        }
        for failure in &self.failures {
            write!(f, "\n  FAIL {}", failure)?;
        }
        Ok(())
    }
}
