//! Conformance tables for `log10`.
//!
//! Inputs were chosen so that the expected results are well-known
//! mathematical constants (and their negations), plus the exact points at
//! 0, 1, 10 and +inf.

use crate::core::types::Scalar;
use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One row of a conformance table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TestCase<T> {
    /// Value to call the function with
    pub input: T,
    /// Expected result
    pub expected: T,
    /// Maximum delta between the expected and actual result
    pub tolerance: T,
}

impl<T: Scalar> TestCase<T> {
    /// Create a new test case.
    pub const fn new(input: T, expected: T, tolerance: T) -> Self {
        Self {
            input,
            expected,
            tolerance,
        }
    }

    /// Whether the expected value must be matched exactly.
    pub fn is_exact(&self) -> bool {
        !self.expected.is_finite() || self.tolerance == T::zero()
    }

    /// Narrow or widen this case to another precision, rescaling the
    /// tolerance to that precision's base epsilon.
    pub fn cast<U: Scalar>(&self) -> TestCase<U> {
        let expected = U::from_f64(self.expected.to_f64());
        let tolerance = if self.tolerance == T::zero() {
            U::zero()
        } else {
            U::tolerance_for(expected)
        };
        TestCase::new(U::from_f64(self.input.to_f64()), expected, tolerance)
    }
}

const EPS: f64 = <f64 as Scalar>::BASE_EPSILON;

/// Double-precision sweep.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub static DOUBLE_PRECISION_CASES: [TestCase<f64>; 31] = [
    //            value                    expected                 tolerance
    TestCase::new(0.0,                     f64::NEG_INFINITY,       0.0),
    TestCase::new(0.00072178415907472774, -3.1415926535897932,      EPS * 10.0), // -(pi)
    TestCase::new(0.0019130141022243176,  -2.7182818284590452,      EPS * 10.0), // -(e)
    TestCase::new(0.0049821282964407206,  -2.3025850929940457,      EPS * 10.0), // -(ln(10))
    TestCase::new(0.026866041001136132,   -1.5707963267948966,      EPS * 10.0), // -(pi / 2)
    TestCase::new(0.036083192820787210,   -1.4426950408889634,      EPS * 10.0), // -(log2(e))
    TestCase::new(0.038528884700322026,   -1.4142135623730950,      EPS * 10.0), // -(sqrt(2))
    TestCase::new(0.074408205860642723,   -1.1283791670955126,      EPS * 10.0), // -(2 / sqrt(pi))
    TestCase::new(0.1,                    -1.0,                     EPS * 10.0),
    TestCase::new(0.16390863613957665,    -0.78539816339744831,     EPS),        // -(pi / 4)
    TestCase::new(0.19628775993505562,    -0.70710678118654752,     EPS),        // -(1 / sqrt(2))
    TestCase::new(0.20269956628651730,    -0.69314718055994531,     EPS),        // -(ln(2))
    TestCase::new(0.23087676451600055,    -0.63661977236758134,     EPS),        // -(2 / pi)
    TestCase::new(0.36787944117144232,    -0.43429448190325183,     EPS),        // -(log10(e))
    TestCase::new(0.48049637305186868,    -0.31830988618379067,     EPS),        // -(1 / pi)
    TestCase::new(1.0,                     0.0,                     EPS),
    TestCase::new(2.0811811619898573,      0.31830988618379067,     EPS),        // 1 / pi
    TestCase::new(2.7182818284590452,      0.43429448190325183,     EPS),        // log10(e), value: e
    TestCase::new(4.3313150290214525,      0.63661977236758134,     EPS),        // 2 / pi
    TestCase::new(4.9334096679145963,      0.69314718055994531,     EPS),        // ln(2)
    TestCase::new(5.0945611704512962,      0.70710678118654752,     EPS),        // 1 / sqrt(2)
    TestCase::new(6.1009598002416937,      0.78539816339744831,     EPS),        // pi / 4
    TestCase::new(10.0,                    1.0,                     EPS * 10.0),
    TestCase::new(13.439377934644400,      1.1283791670955126,      EPS * 10.0), // 2 / sqrt(pi)
    TestCase::new(25.954553519470081,      1.4142135623730950,      EPS * 10.0), // sqrt(2)
    TestCase::new(27.713733786437790,      1.4426950408889634,      EPS * 10.0), // log2(e)
    TestCase::new(37.221710484165167,      1.5707963267948966,      EPS * 10.0), // pi / 2
    TestCase::new(200.71743249053009,      2.3025850929940457,      EPS * 10.0), // ln(10)
    TestCase::new(522.73529967043665,      2.7182818284590452,      EPS * 10.0), // e
    TestCase::new(1385.4557313670111,      3.1415926535897932,      EPS * 10.0), // pi
    TestCase::new(f64::INFINITY,           f64::INFINITY,           0.0),
];

static SINGLE_PRECISION_CASES: Lazy<Vec<TestCase<f32>>> =
    Lazy::new(|| DOUBLE_PRECISION_CASES.iter().map(TestCase::cast).collect());

/// Single-precision sweep, derived from the double-precision table.
pub fn single_precision_cases() -> &'static [TestCase<f32>] {
    &SINGLE_PRECISION_CASES
}

/// Inputs for which `log10` must return NaN.
pub fn nan_inputs<T: Scalar>() -> [T; 2] {
    [T::neg_infinity(), T::nan()]
}

/// Table for the precision of `T`.
pub trait ConformanceTable: Scalar {
    /// The conformance sweep at this precision.
    fn cases() -> &'static [TestCase<Self>];
}

impl ConformanceTable for f64 {
    fn cases() -> &'static [TestCase<f64>] {
        &DOUBLE_PRECISION_CASES
    }
}

impl ConformanceTable for f32 {
    fn cases() -> &'static [TestCase<f32>] {
        single_precision_cases()
    }
}
