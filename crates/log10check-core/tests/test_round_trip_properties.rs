//! Property tests for `10^log10(x) ≈ x` and related identities.

use log10check_core::prelude::*;
use proptest::prelude::*;

const EPS: f64 = <f64 as Scalar>::BASE_EPSILON;

proptest! {
    #[test]
    fn prop_round_trip_recovers_input(mantissa in 1.0f64..10.0, exponent in -100i32..100) {
        let x = mantissa * 10f64.powi(exponent);
        let validator = Log10Validator::new(StdLog10);
        prop_assert!(validator.validate_round_trip(x, 16.0 * EPS).is_ok());
    }

    #[test]
    fn prop_ln_ratio_round_trip(x in 1e-30f64..1e30) {
        let validator = Log10Validator::new(LnRatioLog10);
        prop_assert!(validator.validate_round_trip(x, 16.0 * EPS).is_ok());
    }

    #[test]
    fn prop_negative_inputs_are_nan(x in -1e300f64..-1e-300) {
        let validator = Log10Validator::new(StdLog10);
        prop_assert!(validator.validate_is_nan(x).is_ok());
    }

    #[test]
    fn prop_powers_of_ten_within_tolerance(exponent in -22i32..22) {
        // 10^k is exact in binary64 for |k| <= 22
        let x = 10f64.powi(exponent);
        let expected = f64::from(exponent);
        let validator = Log10Validator::new(StdLog10);
        prop_assert!(validator.validate(x, expected, f64::tolerance_for(expected)).is_ok());
    }

    #[test]
    fn prop_report_counts_are_consistent(scale in 1.0f64..64.0) {
        let config = RunConfigBuilder::new()
            .collect_all(true)
            .tolerance_scale(scale)
            .build()
            .unwrap();
        let report = check_conformance::<f64, _>(StdLog10, config).unwrap();
        prop_assert_eq!(report.passed + report.failures.len(), report.checks_run);
        prop_assert!(report.is_success());
    }
}
