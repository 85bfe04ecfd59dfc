//! Piecewise-linear tabulated functions.
//!
//! Every table in the PVT laws is a [`Tabulated1D`]: strictly increasing
//! abscissae, linear interpolation inside and linear extrapolation outside
//! the sampled range.

use bo_core::Real;

use crate::error::{PvtError, PvtResult};

/// Index of the segment `[x[i], x[i+1]]` used for `v`, and the unclamped
/// position of `v` within it.
///
/// Values left of the table use the first segment, values right of it the
/// last one. Requires `x.len() >= 2`.
#[inline]
pub(crate) fn segment(x: &[Real], v: Real) -> (usize, Real) {
    debug_assert!(x.len() >= 2);
    let upper = x.partition_point(|&xi| xi <= v);
    let i = upper.saturating_sub(1).min(x.len() - 2);
    let w = (v - x[i]) / (x[i + 1] - x[i]);
    (i, w)
}

/// Same as [`segment`] but with the weight clamped to `[0, 1]`, so values
/// outside the table snap to the nearest end. Single-node tables always
/// return `(0, 0.0)`.
#[inline]
pub(crate) fn clamped_segment(x: &[Real], v: Real) -> (usize, Real) {
    if x.len() < 2 {
        return (0, 0.0);
    }
    let (i, w) = segment(x, v);
    (i, w.clamp(0.0, 1.0))
}

/// Linear blend that reproduces the end values exactly at `w = 0` and `w = 1`.
#[inline]
pub(crate) fn lerp(y0: Real, y1: Real, w: Real) -> Real {
    (1.0 - w) * y0 + w * y1
}

/// A 1-D piecewise linear function.
#[derive(Debug, Clone, PartialEq)]
pub struct Tabulated1D {
    x: Vec<Real>,
    y: Vec<Real>,
}

impl Tabulated1D {
    /// Create a table from sample points.
    ///
    /// `x` must be strictly increasing; both columns must be finite and of
    /// equal, non-zero length.
    pub fn new(what: &'static str, x: Vec<Real>, y: Vec<Real>) -> PvtResult<Self> {
        if x.is_empty() {
            return Err(PvtError::InvalidTable {
                what,
                reason: "table is empty".to_string(),
            });
        }
        if x.len() != y.len() {
            return Err(PvtError::InvalidTable {
                what,
                reason: format!("{} abscissae but {} values", x.len(), y.len()),
            });
        }
        if let Some(&bad) = x.iter().chain(y.iter()).find(|v| !v.is_finite()) {
            return Err(PvtError::NonPhysical { what, value: bad });
        }
        if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(PvtError::NonMonotonic {
                what,
                index: index + 1,
            });
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x_min(&self) -> Real {
        self.x[0]
    }

    pub fn x_max(&self) -> Real {
        self.x[self.x.len() - 1]
    }

    /// Evaluate with linear interpolation/extrapolation.
    #[inline]
    pub fn eval(&self, v: Real) -> Real {
        if self.x.len() == 1 {
            return self.y[0];
        }
        let (i, w) = segment(&self.x, v);
        lerp(self.y[i], self.y[i + 1], w)
    }

    /// Invert a table whose values are non-decreasing.
    ///
    /// Returns the smallest abscissa mapping to `target` inside the range.
    /// Outside the range the first/last segment is extrapolated; a flat end
    /// segment cannot be extrapolated and yields the end abscissa instead.
    pub fn inverse_eval(&self, target: Real) -> Real {
        let n = self.x.len();
        if n == 1 {
            return self.x[0];
        }

        let j = self.y.partition_point(|&yi| yi < target);
        let i = if j == 0 {
            match self.y.windows(2).position(|w| w[1] > w[0]) {
                Some(i) if i == 0 => 0,
                _ => return self.x[0],
            }
        } else if j == n {
            if self.y[n - 1] > self.y[n - 2] {
                n - 2
            } else {
                return self.x[n - 1];
            }
        } else {
            j - 1
        };

        let w = (target - self.y[i]) / (self.y[i + 1] - self.y[i]);
        lerp(self.x[i], self.x[i + 1], w)
    }
}
