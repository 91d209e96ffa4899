//! Error types for logarithm conformance checks.
//!
//! Every failure carries the input, the value the function under test
//! produced and the value it should have produced. Values are widened to
//! `f64` so single and double precision runs share one error type.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Errors that can occur while checking a logarithm implementation.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ConformanceError {
    /// The result differs from the expected value by more than the tolerance.
    #[error(
        "log10({value:.16e}) returned {result:.16e} when it should have returned {expected:.16e} \
         (tolerance {tolerance:.16e})"
    )]
    ToleranceExceeded {
        /// Input passed to the function under test
        value: f64,
        /// Value the function returned
        result: f64,
        /// Value the function should have returned
        expected: f64,
        /// Maximum permitted absolute difference
        tolerance: f64,
    },

    /// The function returned a number where NaN was required.
    #[error("log10({value:.16e}) returned {result:.16e} when it should have returned NaN")]
    ExpectedNan {
        /// Input passed to the function under test
        value: f64,
        /// Value the function returned
        result: f64,
    },

    /// Raising ten to the computed logarithm does not give the input back.
    #[error(
        "10^log10({value:.16e}) = 10^{log:.16e} = {round_trip:.16e}, \
         outside relative tolerance {tolerance:.16e}"
    )]
    RoundTripMismatch {
        /// Input passed to the function under test
        value: f64,
        /// Logarithm the function returned
        log: f64,
        /// Ten raised to `log`
        round_trip: f64,
        /// Maximum permitted relative difference
        tolerance: f64,
    },

    /// A tolerance was negative or NaN.
    #[error("Invalid tolerance {tolerance}: must be a non-negative number")]
    InvalidTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },

    /// A run configuration parameter was rejected.
    #[error("Invalid configuration for `{parameter}`: {reason}")]
    InvalidConfiguration {
        /// Name of the parameter
        parameter: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConformanceError {
    /// Create a ToleranceExceeded error.
    pub fn tolerance_exceeded(value: f64, result: f64, expected: f64, tolerance: f64) -> Self {
        Self::ToleranceExceeded {
            value,
            result,
            expected,
            tolerance,
        }
    }

    /// Create an ExpectedNan error.
    pub fn expected_nan(value: f64, result: f64) -> Self {
        Self::ExpectedNan { value, result }
    }

    /// Create a RoundTripMismatch error.
    pub fn round_trip_mismatch(value: f64, log: f64, round_trip: f64, tolerance: f64) -> Self {
        Self::RoundTripMismatch {
            value,
            log,
            round_trip,
            tolerance,
        }
    }

    /// Create an InvalidTolerance error.
    pub fn invalid_tolerance(tolerance: f64) -> Self {
        Self::InvalidTolerance { tolerance }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2>(parameter: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error reports a discrepancy in the function under test,
    /// as opposed to a problem with the check itself.
    pub fn is_conformance_failure(&self) -> bool {
        matches!(
            self,
            Self::ToleranceExceeded { .. } | Self::ExpectedNan { .. } | Self::RoundTripMismatch { .. }
        )
    }

    /// Input that triggered the failure, if any.
    pub fn input(&self) -> Option<f64> {
        match self {
            Self::ToleranceExceeded { value, .. }
            | Self::ExpectedNan { value, .. }
            | Self::RoundTripMismatch { value, .. } => Some(*value),
            Self::InvalidTolerance { .. } | Self::InvalidConfiguration { .. } => None,
        }
    }
}

/// Result type alias for conformance checks.
pub type Result<T> = std::result::Result<T, ConformanceError>;
