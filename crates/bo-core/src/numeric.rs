use crate::BoError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Tolerance used when comparing saturated and non-saturated PVT evaluations.
    ///
    /// Absolute part is `sqrt(eps)`, the relative part `1e3 * eps`. For small
    /// magnitudes the absolute part dominates: a gas viscosity near 1e-5 Pa·s
    /// passes with about 0.15% difference. That slack is intended; do not
    /// tighten the absolute part for viscosity comparisons.
    pub fn saturated_line() -> Self {
        Self {
            abs: Real::EPSILON.sqrt(),
            rel: 1e3 * Real::EPSILON,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BoError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BoError::NonFinite { what, value: v })
    }
}

/// Sentinel for a slot that has not been written yet.
pub const UNDEFINED: Real = Real::NAN;

/// A value counts as defined once it is no longer the NaN sentinel.
#[inline]
pub fn is_defined(v: Real) -> bool {
    !v.is_nan()
}

/// `n` evenly spaced points on `[start, end]`, endpoints exact.
pub fn linear_points(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            points[n - 1] = end;
            points
        }
    }
}

/// Whether `values` never decreases.
pub fn is_non_decreasing(values: &[Real]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}

/// Whether `values` strictly increases.
pub fn is_strictly_increasing(values: &[Real]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn saturated_line_slack_is_absolute_for_small_values() {
        let tol = Tolerances::saturated_line();
        assert_eq!(tol.abs, Real::EPSILON.sqrt());
        assert_eq!(tol.rel, 1e3 * Real::EPSILON);
        assert!(nearly_equal(1.0e-5, 1.0e-5 * (1.0 + 1.0e-3), tol));
        assert!(!nearly_equal(1.0e-5, 1.0e-5 * (1.0 + 2.0e-3), tol));
        assert!(!nearly_equal(1.0, 1.0 + 1.0e-7, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn undefined_sentinel() {
        assert!(!is_defined(UNDEFINED));
        assert!(is_defined(0.0));
        assert!(is_defined(Real::INFINITY));
    }

    #[test]
    fn linear_points_endpoints() {
        let pts = linear_points(10e5, 610e5, 50);
        assert_eq!(pts.len(), 50);
        assert_eq!(pts[0], 10e5);
        assert_eq!(pts[49], 610e5);
        assert!(is_strictly_increasing(&pts));
        assert!(linear_points(1.0, 2.0, 0).is_empty());
        assert_eq!(linear_points(1.0, 2.0, 1), vec![1.0]);
    }

    proptest::proptest! {
        #[test]
        fn linear_points_stay_inside_and_increase(
            start in -1.0e7_f64..1.0e7,
            width in 1.0_f64..1.0e8,
            n in 2usize..200,
        ) {
            let end = start + width;
            let pts = linear_points(start, end, n);
            proptest::prop_assert_eq!(pts.len(), n);
            proptest::prop_assert!(is_non_decreasing(&pts));
            proptest::prop_assert!(pts.iter().all(|&p| p >= start && p <= end));
        }
    }

    #[test]
    fn monotonicity_helpers() {
        assert!(is_non_decreasing(&[1.0, 1.0, 2.0]));
        assert!(!is_strictly_increasing(&[1.0, 1.0, 2.0]));
        assert!(!is_non_decreasing(&[1.0, 0.5]));
        assert!(is_strictly_increasing(&[]));
    }
}
