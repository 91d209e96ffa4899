//! Conformance validator for `log10` implementations.
//!
//! The validator runs three kinds of checks against a [`Log10`]
//! implementation:
//!
//! - **Table checks**: `|log10(input) - expected| <= tolerance` for each
//!   row. Rows whose expectation is infinite are compared exactly.
//! - **NaN checks**: `log10(-inf)` and `log10(NaN)` must be NaN.
//! - **Round-trip checks** (optional): `10^log10(x) ≈ x` for every finite
//!   positive table input.
//!
//! # Example
//!
//! ```
//! use log10check_core::prelude::*;
//!
//! let validator = Log10Validator::new(StdLog10);
//! validator.validate(0.1f64, -1.0, f64::BASE_EPSILON * 10.0).unwrap();
//! validator.validate_is_nan(f64::NEG_INFINITY).unwrap();
//!
//! let report = validator.run::<f64>();
//! assert!(report.is_success());
//! ```

use crate::config::RunConfig;
use crate::core::cases::{nan_inputs, ConformanceTable, TestCase};
use crate::core::error::{ConformanceError, Result};
use crate::core::traits::Log10;
use crate::core::types::Scalar;
use crate::validation::callback::{NoOpCallback, ValidationCallback};
use crate::validation::report::{CaseOutcome, CheckKind, ConformanceReport};
use std::time::Instant;
use tracing::{debug, info};

/// Multiple of the base epsilon used as the default round-trip tolerance.
const ROUND_TRIP_EPSILONS: f64 = 16.0;

/// Checks a `log10` implementation against conformance tables.
#[derive(Debug, Clone)]
pub struct Log10Validator<F> {
    function: F,
    config: RunConfig,
}

impl<F> Log10Validator<F> {
    /// Create a validator with the default (fail-fast) configuration.
    pub fn new(function: F) -> Self {
        Self {
            function,
            config: RunConfig::default(),
        }
    }

    /// Create a validator with a custom configuration.
    pub fn with_config(function: F, config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { function, config })
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The function under test.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Check `log10(value)` against `expected` within `tolerance`.
    ///
    /// The tolerance is multiplied by the configured tolerance scale unless
    /// it is zero.
    pub fn validate<T>(&self, value: T, expected: T, tolerance: T) -> Result<()>
    where
        T: Scalar,
        F: Log10<T>,
    {
        let result = self.function.log10(value);
        self.compare(value, result, expected, tolerance)
    }

    /// Check that `log10(value)` is NaN.
    pub fn validate_is_nan<T>(&self, value: T) -> Result<()>
    where
        T: Scalar,
        F: Log10<T>,
    {
        let result = self.function.log10(value);
        Self::expect_nan(value, result)
    }

    /// Check that `10^log10(value)` recovers `value`.
    ///
    /// The permitted relative error is `relative_tolerance` per decade of
    /// the logarithm (at least one decade), since the absolute error of the
    /// logarithm grows with its magnitude. Inputs that are not finite and
    /// positive have no round trip and pass trivially. A non-finite
    /// logarithm of such an input always fails.
    pub fn validate_round_trip<T>(&self, value: T, relative_tolerance: T) -> Result<()>
    where
        T: Scalar,
        F: Log10<T>,
    {
        self.round_trip(value, relative_tolerance).1
    }

    /// Check one table row.
    pub fn check_case<T>(&self, case: &TestCase<T>) -> CaseOutcome
    where
        T: Scalar,
        F: Log10<T>,
    {
        let result = self.function.log10(case.input);
        let check = self.compare(case.input, result, case.expected, case.tolerance);
        CaseOutcome::new(CheckKind::Table, case.input.to_f64(), result.to_f64(), check)
    }

    /// Run the conformance table for the precision of `T`.
    pub fn run<T>(&self) -> ConformanceReport
    where
        T: ConformanceTable,
        F: Log10<T> + Sync,
    {
        self.run_with_callback(T::cases(), &nan_inputs::<T>(), &mut NoOpCallback)
    }

    /// Run the given checks, reporting progress to `callback`.
    pub fn run_with_callback<T, C>(
        &self,
        cases: &[TestCase<T>],
        nan_inputs: &[T],
        callback: &mut C,
    ) -> ConformanceReport
    where
        T: Scalar,
        F: Log10<T> + Sync,
        C: ValidationCallback + ?Sized,
    {
        let start = Instant::now();
        let name = self.function.name().to_string();
        let mut report = ConformanceReport::new(name.as_str(), T::PRECISION);
        callback.on_run_start(&name, T::PRECISION);
        debug!(
            implementation = %name,
            precision = %T::PRECISION,
            cases = cases.len(),
            policy = ?self.config.failure_policy,
            "running log10 conformance checks"
        );

        let table: Box<dyn Iterator<Item = CaseOutcome> + '_> = if self.use_parallel() {
            Box::new(self.evaluate_parallel(cases).into_iter())
        } else {
            Box::new(cases.iter().map(|case| self.check_case(case)))
        };
        let nan = nan_inputs.iter().map(|&value| self.check_nan(value));
        let relative_tolerance = self.round_trip_tolerance::<T>();
        let round_trip = cases
            .iter()
            .filter(|_| self.config.round_trip)
            .filter(|case| case.input.is_finite() && case.input > T::zero())
            .map(|case| self.check_round_trip(case.input, relative_tolerance));

        let mut outcomes = table.chain(nan).chain(round_trip).peekable();
        while let Some(outcome) = outcomes.next() {
            let keep_going = callback.on_case_end(&outcome);
            let failed = !outcome.passed();
            if let Some(error) = &outcome.error {
                debug!(kind = ?outcome.kind, "{}", error);
            }
            report.record(outcome);

            if !keep_going || (failed && self.config.is_fail_fast()) {
                report.aborted = outcomes.peek().is_some();
                break;
            }
        }

        report.elapsed = start.elapsed();
        info!(
            implementation = %report.implementation,
            precision = %report.precision,
            passed = report.passed,
            checks = report.checks_run,
            "log10 conformance run finished"
        );
        callback.on_run_end(&report);
        report
    }

    fn compare<T: Scalar>(&self, value: T, result: T, expected: T, tolerance: T) -> Result<()> {
        if tolerance.is_nan() || tolerance < T::zero() {
            return Err(ConformanceError::invalid_tolerance(tolerance.to_f64()));
        }
        if expected.is_nan() {
            return Self::expect_nan(value, result);
        }

        let tolerance = if tolerance > T::zero() {
            tolerance * T::from_f64(self.config.tolerance_scale)
        } else {
            tolerance
        };

        // inf - inf is NaN, so infinite expectations need an exact match.
        // A NaN result never compares within tolerance.
        let within = if expected.is_infinite() {
            result == expected
        } else {
            (result - expected).abs() <= tolerance
        };

        if within {
            Ok(())
        } else {
            Err(ConformanceError::tolerance_exceeded(
                value.to_f64(),
                result.to_f64(),
                expected.to_f64(),
                tolerance.to_f64(),
            ))
        }
    }

    fn expect_nan<T: Scalar>(value: T, result: T) -> Result<()> {
        if result.is_nan() {
            Ok(())
        } else {
            Err(ConformanceError::expected_nan(value.to_f64(), result.to_f64()))
        }
    }

    fn check_nan<T>(&self, value: T) -> CaseOutcome
    where
        T: Scalar,
        F: Log10<T>,
    {
        let result = self.function.log10(value);
        CaseOutcome::new(
            CheckKind::Nan,
            value.to_f64(),
            result.to_f64(),
            Self::expect_nan(value, result),
        )
    }

    fn check_round_trip<T>(&self, value: T, relative_tolerance: T) -> CaseOutcome
    where
        T: Scalar,
        F: Log10<T>,
    {
        let (log, check) = self.round_trip(value, relative_tolerance);
        CaseOutcome::new(CheckKind::RoundTrip, value.to_f64(), log.to_f64(), check)
    }

    fn round_trip<T>(&self, value: T, relative_tolerance: T) -> (T, Result<()>)
    where
        T: Scalar,
        F: Log10<T>,
    {
        let log = self.function.log10(value);
        if !(value.is_finite() && value > T::zero()) {
            return (log, Ok(()));
        }
        if relative_tolerance.is_nan() || relative_tolerance < T::zero() {
            return (
                log,
                Err(ConformanceError::invalid_tolerance(relative_tolerance.to_f64())),
            );
        }

        let round_trip = T::from_f64(10.0).powf(log);
        let decades = log.abs().max(T::one());
        let allowed = relative_tolerance * decades * value;
        // An infinite log would widen the allowance to infinity.
        let check = if log.is_finite() && (round_trip - value).abs() <= allowed {
            Ok(())
        } else {
            Err(ConformanceError::round_trip_mismatch(
                value.to_f64(),
                log.to_f64(),
                round_trip.to_f64(),
                relative_tolerance.to_f64(),
            ))
        };
        (log, check)
    }

    fn round_trip_tolerance<T: Scalar>(&self) -> T {
        match self.config.round_trip_tolerance {
            Some(tolerance) => T::from_f64(tolerance),
            None => T::BASE_EPSILON * T::from_f64(ROUND_TRIP_EPSILONS),
        }
    }

    fn use_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.config.parallel && !self.config.is_fail_fast()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel<T>(&self, cases: &[TestCase<T>]) -> Vec<CaseOutcome>
    where
        T: Scalar,
        F: Log10<T> + Sync,
    {
        use rayon::prelude::*;

        cases.par_iter().map(|case| self.check_case(case)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_parallel<T>(&self, cases: &[TestCase<T>]) -> Vec<CaseOutcome>
    where
        T: Scalar,
        F: Log10<T> + Sync,
    {
        cases.iter().map(|case| self.check_case(case)).collect()
    }
}

/// Check `function` against the conformance table for the precision of `T`.
pub fn check_conformance<T, F>(function: F, config: RunConfig) -> Result<ConformanceReport>
where
    T: ConformanceTable,
    F: Log10<T> + Sync,
{
    let validator = Log10Validator::with_config(function, config)?;
    Ok(validator.run::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FailurePolicy, RunConfigBuilder};
    use crate::core::cases::DOUBLE_PRECISION_CASES;
    use crate::core::traits::StdLog10;

    const EPS: f64 = <f64 as Scalar>::BASE_EPSILON;

    #[test]
    fn test_validate_concrete_cases() {
        let validator = Log10Validator::new(StdLog10);
        validator.validate(0.1f64, -1.0, EPS * 10.0).unwrap();
        validator
            .validate(2.7182818284590452f64, 0.43429448190325183, EPS)
            .unwrap();
        validator.validate(0.0f64, f64::NEG_INFINITY, 0.0).unwrap();
        validator.validate(f64::INFINITY, f64::INFINITY, 0.0).unwrap();
    }

    #[test]
    fn test_validate_reports_discrepancy() {
        let validator = Log10Validator::new(|x: f64| x.log10() + 1e-12);
        let err = validator.validate(10.0f64, 1.0, EPS * 10.0).unwrap_err();
        match err {
            ConformanceError::ToleranceExceeded {
                value,
                expected,
                tolerance,
                ..
            } => {
                assert_eq!(value, 10.0);
                assert_eq!(expected, 1.0);
                assert_eq!(tolerance, EPS * 10.0);
            }
            other => panic!("Expected ToleranceExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_result_never_within_tolerance() {
        let validator = Log10Validator::new(|_: f64| f64::NAN);
        assert!(validator.validate(10.0f64, 1.0, 1e300).is_err());
        assert!(validator.validate(0.0f64, f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_invalid_tolerance() {
        let validator = Log10Validator::new(StdLog10);
        assert!(matches!(
            validator.validate(10.0f64, 1.0, -1.0),
            Err(ConformanceError::InvalidTolerance { .. })
        ));
        assert!(matches!(
            validator.validate(10.0f64, 1.0, f64::NAN),
            Err(ConformanceError::InvalidTolerance { .. })
        ));
    }

    #[test]
    fn test_validate_is_nan() {
        let validator = Log10Validator::new(StdLog10);
        validator.validate_is_nan(f64::NEG_INFINITY).unwrap();
        validator.validate_is_nan(f64::NAN).unwrap();
        validator.validate_is_nan(-1.0f64).unwrap();

        let err = validator.validate_is_nan(100.0f64).unwrap_err();
        assert_eq!(err, ConformanceError::expected_nan(100.0, 2.0));
    }

    #[test]
    fn test_tolerance_scale_loosens_checks() {
        let sloppy = |x: f64| x.log10() + 4.0 * EPS;
        let strict = Log10Validator::new(sloppy);
        assert!(strict.validate(2.7182818284590452f64, 0.43429448190325183, EPS).is_err());

        let config = RunConfigBuilder::new().tolerance_scale(8.0).build().unwrap();
        let loose = Log10Validator::with_config(sloppy, config).unwrap();
        loose
            .validate(2.7182818284590452f64, 0.43429448190325183, EPS)
            .unwrap();
        // exact rows stay exact
        assert!(loose.validate(0.0f64, f64::NEG_INFINITY, 0.0).is_ok());
    }

    #[test]
    fn test_round_trip() {
        let validator = Log10Validator::new(StdLog10);
        for value in [1e-300f64, 0.1, 1.0, 2.5, 1385.4557313670111, 1e300] {
            validator.validate_round_trip(value, 16.0 * EPS).unwrap();
        }
        // no round trip for these inputs
        for value in [0.0f64, -2.0, f64::INFINITY, f64::NAN] {
            validator.validate_round_trip(value, 16.0 * EPS).unwrap();
        }

        let off = Log10Validator::new(|x: f64| x.log10() * 1.001);
        assert!(matches!(
            off.validate_round_trip(50.0f64, 16.0 * EPS),
            Err(ConformanceError::RoundTripMismatch { .. })
        ));
    }

    #[test]
    fn test_round_trip_rejects_infinite_log() {
        for log in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let validator = Log10Validator::new(move |_: f64| log);
            match validator.validate_round_trip(2.0f64, 16.0 * EPS) {
                Err(ConformanceError::RoundTripMismatch { value, .. }) => assert_eq!(value, 2.0),
                other => panic!("Expected RoundTripMismatch for log {}, got {:?}", log, other),
            }
        }
    }

    #[test]
    fn test_default_round_trip_tolerance() {
        let validator = Log10Validator::new(StdLog10);
        assert_eq!(validator.round_trip_tolerance::<f64>(), 16.0 * EPS);
        assert_eq!(
            validator.round_trip_tolerance::<f32>(),
            16.0 * <f32 as Scalar>::BASE_EPSILON
        );

        let config = RunConfigBuilder::new().round_trip_tolerance(1e-10).build().unwrap();
        let custom = Log10Validator::with_config(StdLog10, config).unwrap();
        assert_eq!(custom.round_trip_tolerance::<f64>(), 1e-10);
    }

    #[test]
    fn test_run_round_trip_catches_infinite_log() {
        let broken = |x: f64| if x > 1e3 && x.is_finite() { f64::INFINITY } else { x.log10() };
        let config = RunConfigBuilder::new()
            .collect_all(true)
            .round_trip(true)
            .build()
            .unwrap();
        let report = check_conformance::<f64, _>(broken, config).unwrap();
        let round_trip_inputs: Vec<_> = report
            .failures
            .iter()
            .filter(|e| matches!(e, ConformanceError::RoundTripMismatch { .. }))
            .filter_map(|e| e.input())
            .collect();
        assert_eq!(round_trip_inputs, vec![1385.4557313670111]);
    }

    #[test]
    fn test_run_double_precision_table() {
        let report = Log10Validator::new(StdLog10).run::<f64>();
        assert!(report.is_success(), "{}", report);
        assert_eq!(report.checks_run, DOUBLE_PRECISION_CASES.len() + 2);
        assert_eq!(report.precision, crate::core::types::Precision::Double);
        assert_eq!(report.implementation, "std");
    }

    #[test]
    fn test_run_fail_fast_stops_at_first_failure() {
        let validator = Log10Validator::new(|x: f64| -x.log10());
        let report = validator.run::<f64>();
        assert!(!report.is_success());
        assert!(report.aborted);
        assert_eq!(report.failures.len(), 1);
        // row 0 (-inf expected) fails first
        assert_eq!(report.checks_run, 1);
        assert_eq!(report.first_failure().and_then(|e| e.input()), Some(0.0));
    }

    #[test]
    fn test_run_collect_all_records_every_failure() {
        let config = RunConfigBuilder::new()
            .failure_policy(FailurePolicy::CollectAll)
            .build()
            .unwrap();
        let validator = Log10Validator::with_config(|x: f64| -x.log10(), config).unwrap();
        let report = validator.run::<f64>();

        // Only log10(1) = 0 survives negation; NaN checks still pass.
        assert_eq!(report.checks_run, DOUBLE_PRECISION_CASES.len() + 2);
        assert_eq!(report.passed, 3);
        assert_eq!(report.failures.len(), DOUBLE_PRECISION_CASES.len() - 1);
        assert!(!report.aborted);
    }

    #[test]
    fn test_run_with_round_trip() {
        let config = RunConfigBuilder::new().round_trip(true).build().unwrap();
        let report = check_conformance::<f64, _>(StdLog10, config).unwrap();
        // 29 finite positive inputs
        assert_eq!(report.checks_run, DOUBLE_PRECISION_CASES.len() + 2 + 29);
        assert!(report.is_success(), "{}", report);
    }
}
