//! Scalar types and tolerance constants.
//!
//! Tolerances in the conformance tables are expressed in units of a base
//! epsilon that is a little looser than machine epsilon, then scaled by
//! powers of ten so that each comparison looks at the same number of
//! significant digits regardless of the magnitude of the expected result.

use num_traits::Float;
use std::fmt::{Debug, Display, LowerExp};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Floating-point precision of a conformance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Precision {
    /// IEEE 754 binary32
    Single,
    /// IEEE 754 binary64
    Double,
}

impl Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::Single => write!(f, "single"),
            Precision::Double => write!(f, "double"),
        }
    }
}

/// Trait for scalar types a logarithm can be checked in (f32 or f64).
pub trait Scalar:
    Float + Debug + Display + LowerExp + Default + Copy + Send + Sync + 'static
{
    /// Smallest tolerance unit used by the conformance tables.
    ///
    /// Machine epsilon is slightly too strict for the libm implementations
    /// found in practice, so this is four times machine epsilon.
    const BASE_EPSILON: Self;

    /// Precision tag reported alongside results.
    const PRECISION: Precision;

    /// Convert from f64, rounding to the nearest representable value.
    fn from_f64(v: f64) -> Self;

    /// Widen to f64 for reporting.
    fn to_f64(self) -> f64;

    /// Tolerance for comparing against `expected`.
    ///
    /// `0.xxx` expectations get [`Scalar::BASE_EPSILON`], `0.0xxx` get a
    /// tenth of it and `x.xxx` get ten times it. Infinite or NaN
    /// expectations are compared exactly.
    fn tolerance_for(expected: Self) -> Self {
        if !expected.is_finite() {
            return Self::zero();
        }

        let mut magnitude = expected.abs();
        let mut tolerance = Self::BASE_EPSILON;
        if magnitude == Self::zero() {
            return tolerance;
        }

        let ten = Self::from_f64(10.0);
        let tenth = Self::from_f64(0.1);
        while magnitude >= Self::one() {
            magnitude = magnitude / ten;
            tolerance = tolerance * ten;
        }
        while magnitude < tenth {
            magnitude = magnitude * ten;
            tolerance = tolerance / ten;
        }
        tolerance
    }
}

impl Scalar for f32 {
    // 2^-21
    const BASE_EPSILON: Self = 4.768_371_6e-7;
    const PRECISION: Precision = Precision::Single;

    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    // 2^-50
    const BASE_EPSILON: Self = 8.881_784_197_001_252_3e-16;
    const PRECISION: Precision = Precision::Double;

    fn from_f64(v: f64) -> Self {
        v
    }

    fn to_f64(self) -> f64 {
        self
    }
}
