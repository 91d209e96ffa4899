//! Run configuration for conformance sweeps.

use crate::core::error::{ConformanceError, Result};

#[cfg(feature = "serde")]
use serde::Serialize;

/// What to do after the first failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailurePolicy {
    /// Stop the run at the first failure.
    #[default]
    FailFast,
    /// Run every check and report all failures.
    CollectAll,
}

/// Configuration for a conformance run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RunConfig {
    /// Whether to stop at the first failure.
    pub failure_policy: FailurePolicy,
    /// Multiplier applied to every non-zero table tolerance (>= 1).
    pub tolerance_scale: f64,
    /// Whether to check `10^log10(x) ≈ x` over the table's positive inputs.
    pub round_trip: bool,
    /// Relative tolerance per decade of the logarithm for the round trip.
    /// `None` uses sixteen base epsilons of the run's precision.
    pub round_trip_tolerance: Option<f64>,
    /// Evaluate the table on the rayon pool when collecting all failures.
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::FailFast,
            tolerance_scale: 1.0,
            round_trip: false,
            round_trip_tolerance: None,
            parallel: false,
        }
    }
}

impl RunConfig {
    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance_scale.is_finite() || self.tolerance_scale < 1.0 {
            return Err(ConformanceError::invalid_configuration(
                "tolerance_scale",
                format!("must be a finite value >= 1, got {}", self.tolerance_scale),
            ));
        }

        if let Some(tolerance) = self.round_trip_tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(ConformanceError::invalid_configuration(
                    "round_trip_tolerance",
                    format!("must be a finite positive value, got {}", tolerance),
                ));
            }
        }

        Ok(())
    }

    /// Whether the run stops at the first failure.
    pub fn is_fail_fast(&self) -> bool {
        self.failure_policy == FailurePolicy::FailFast
    }
}

/// Builder for creating a custom run configuration.
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    /// Set the failure policy.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.failure_policy = policy;
        self
    }

    /// Shorthand for [`FailurePolicy::CollectAll`] when `collect` is true.
    pub fn collect_all(self, collect: bool) -> Self {
        self.failure_policy(if collect {
            FailurePolicy::CollectAll
        } else {
            FailurePolicy::FailFast
        })
    }

    /// Set the tolerance multiplier.
    pub fn tolerance_scale(mut self, scale: f64) -> Self {
        self.config.tolerance_scale = scale;
        self
    }

    /// Enable or disable the round-trip sweep.
    pub fn round_trip(mut self, enabled: bool) -> Self {
        self.config.round_trip = enabled;
        self
    }

    /// Override the round-trip relative tolerance.
    pub fn round_trip_tolerance(mut self, tolerance: f64) -> Self {
        self.config.round_trip_tolerance = Some(tolerance);
        self
    }

    /// Enable or disable parallel evaluation.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<RunConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
