//! The function under test.
//!
//! A conformance run is parameterised over a [`Log10`] implementation so
//! the same tables can check the platform math library, alternative
//! formulations, or a caller-supplied closure.

use crate::core::types::Scalar;

/// A base-10 logarithm implementation.
pub trait Log10<T: Scalar> {
    /// Human-readable name used in logs and reports.
    fn name(&self) -> &str {
        "closure"
    }

    /// Compute the base-10 logarithm of `x`.
    fn log10(&self, x: T) -> T;
}

/// The platform math library's `log10`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLog10;

impl<T: Scalar> Log10<T> for StdLog10 {
    fn name(&self) -> &str {
        "std"
    }

    #[inline]
    fn log10(&self, x: T) -> T {
        x.log10()
    }
}

/// `ln(x) / ln(10)`.
///
/// Loses up to an ulp or two relative to a dedicated `log10`, which the
/// tolerance scaling is meant to absorb.
#[derive(Debug, Clone, Copy, Default)]
pub struct LnRatioLog10;

impl<T: Scalar> Log10<T> for LnRatioLog10 {
    fn name(&self) -> &str {
        "ln-ratio"
    }

    #[inline]
    fn log10(&self, x: T) -> T {
        x.ln() / T::from_f64(std::f64::consts::LN_10)
    }
}

impl<T, F> Log10<T> for F
where
    T: Scalar,
    F: Fn(T) -> T,
{
    #[inline]
    fn log10(&self, x: T) -> T {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_log10_special_values() {
        let f = StdLog10;
        assert_eq!(Log10::<f64>::log10(&f, 0.0), f64::NEG_INFINITY);
        assert_eq!(Log10::<f64>::log10(&f, 1.0), 0.0);
        assert_eq!(Log10::<f64>::log10(&f, f64::INFINITY), f64::INFINITY);
        assert!(Log10::<f64>::log10(&f, -1.0).is_nan());
        assert!(Log10::<f64>::log10(&f, f64::NAN).is_nan());
        assert_eq!(Log10::<f64>::name(&f), "std");
    }

    #[test]
    fn test_ln_ratio_special_values() {
        let f = LnRatioLog10;
        assert_eq!(Log10::<f64>::log10(&f, 0.0), f64::NEG_INFINITY);
        assert_eq!(Log10::<f64>::log10(&f, 1.0), 0.0);
        assert_eq!(Log10::<f64>::log10(&f, f64::INFINITY), f64::INFINITY);
        assert!(Log10::<f64>::log10(&f, f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_closure_implementation() {
        let halve = |x: f32| x / 2.0;
        assert_eq!(halve.log10(4.0), 2.0);
        assert_eq!(Log10::<f32>::name(&halve), "closure");
    }
}
