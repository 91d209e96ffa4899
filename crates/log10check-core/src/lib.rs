//! Core tables and validator for base-10 logarithm conformance checks.
//!
//! This crate checks a `log10` implementation against a fixed table of
//! inputs, expected results and tolerances, plus inputs that must produce
//! NaN. It is used to verify that a platform math library behaves the way
//! callers expect.
//!
//! # Key Concepts
//!
//! - **Base epsilon**: the smallest tolerance unit, four times machine
//!   epsilon, scaled per case by powers of ten according to the magnitude
//!   of the expected result
//! - **Exact rows**: `log10(0) = -inf` and `log10(+inf) = +inf` must match
//!   exactly
//! - **Failure policy**: stop at the first failure, or collect them all
//!
//! # Modules
//!
//! - [`config`]: Run configuration and builder
//! - [`core`]: Error types, scalar types, the function-under-test trait and
//!   the conformance tables
//! - [`validation`]: The validator, callbacks and run reports

pub mod config;
pub mod core;
pub mod validation;

// Re-export commonly used items at the crate root
pub use crate::core::error::{ConformanceError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use log10check_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{FailurePolicy, RunConfig, RunConfigBuilder};
    pub use crate::core::cases::{
        nan_inputs, single_precision_cases, ConformanceTable, TestCase, DOUBLE_PRECISION_CASES,
    };
    pub use crate::core::error::{ConformanceError, Result};
    pub use crate::core::traits::{LnRatioLog10, Log10, StdLog10};
    pub use crate::core::types::{Precision, Scalar};
    pub use crate::validation::{
        check_conformance, CaseOutcome, CheckKind, ConformanceReport, Log10Validator,
        NoOpCallback, StopAfter, TracingCallback, ValidationCallback,
    };
}
