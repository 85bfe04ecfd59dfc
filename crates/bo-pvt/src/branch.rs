//! Undersaturated branches of live oil and wet gas tables.
//!
//! A branch stores how `b` and `b/mu` change when leaving the saturated line
//! at one node of the saturated curve. Values are ratios relative to the
//! saturated point, tabulated against the offset from it, so every branch
//! evaluates to exactly one at offset zero.

use bo_core::Real;

use crate::error::{PvtError, PvtResult};
use crate::tabulated::{Tabulated1D, clamped_segment, lerp};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Branch {
    inv_b_ratio: Tabulated1D,
    inv_b_mu_ratio: Tabulated1D,
}

impl Branch {
    /// `offsets` must be strictly increasing and contain the saturated point
    /// (offset zero, ratios one).
    pub fn new(
        what: &'static str,
        offsets: Vec<Real>,
        inv_b_ratio: Vec<Real>,
        inv_b_mu_ratio: Vec<Real>,
    ) -> PvtResult<Self> {
        Ok(Self {
            inv_b_ratio: Tabulated1D::new(what, offsets.clone(), inv_b_ratio)?,
            inv_b_mu_ratio: Tabulated1D::new(what, offsets, inv_b_mu_ratio)?,
        })
    }

    #[inline]
    fn eval(&self, offset: Real) -> (Real, Real) {
        (self.inv_b_ratio.eval(offset), self.inv_b_mu_ratio.eval(offset))
    }
}

/// One branch per node of the saturated curve.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BranchSet {
    nodes: Vec<Real>,
    branches: Vec<Branch>,
}

impl BranchSet {
    /// Nodes without undersaturated data (`None`) borrow the branch of the
    /// nearest node that has one, looking at higher nodes first.
    pub fn new(
        what: &'static str,
        nodes: Vec<Real>,
        branches: Vec<Option<Branch>>,
    ) -> PvtResult<Self> {
        if nodes.len() != branches.len() {
            return Err(PvtError::InvalidTable {
                what,
                reason: format!("{} nodes but {} branches", nodes.len(), branches.len()),
            });
        }
        let mut filled = Vec::with_capacity(branches.len());
        for i in 0..branches.len() {
            let source = branches[i..]
                .iter()
                .chain(branches[..i].iter().rev())
                .find_map(Option::as_ref)
                .ok_or_else(|| PvtError::InvalidTable {
                    what,
                    reason: "no record carries undersaturated data".to_string(),
                })?;
            filled.push(source.clone());
        }

        Ok(Self {
            nodes,
            branches: filled,
        })
    }

    /// Ratios `(b/b_sat, (b/mu)/(b/mu)_sat)` at `node` and `offset`.
    ///
    /// Between nodes the two neighbouring branches are blended linearly;
    /// outside the node range the end branch is used unchanged.
    #[inline]
    pub fn ratios(&self, node: Real, offset: Real) -> (Real, Real) {
        let (i, w) = clamped_segment(&self.nodes, node);
        let lo = self.branches[i].eval(offset);
        if w == 0.0 || self.branches.len() == 1 {
            return lo;
        }
        let hi = self.branches[i + 1].eval(offset);
        (lerp(lo.0, hi.0, w), lerp(lo.1, hi.1, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(slope: Real) -> Branch {
        Branch::new(
            "test",
            vec![0.0, 10.0],
            vec![1.0, 1.0 + 10.0 * slope],
            vec![1.0, 1.0 - 10.0 * slope],
        )
        .unwrap()
    }

    #[test]
    fn ratio_is_one_at_zero_offset() {
        let set = BranchSet::new("test", vec![1.0, 2.0], vec![Some(branch(0.1)), Some(branch(0.3))])
            .unwrap();
        for node in [0.0, 1.0, 1.3, 2.0, 5.0] {
            let (rb, rbmu) = set.ratios(node, 0.0);
            assert!((rb - 1.0).abs() < 1e-15);
            assert!((rbmu - 1.0).abs() < 1e-15);
        }
    }

    #[test]
    fn blends_between_neighbours() {
        let set = BranchSet::new("test", vec![1.0, 2.0], vec![Some(branch(0.1)), Some(branch(0.3))])
            .unwrap();
        let (rb, _) = set.ratios(1.5, 10.0);
        assert!((rb - 3.0).abs() < 1e-12);
        // Clamped outside the node range.
        let (rb, _) = set.ratios(9.0, 10.0);
        assert!((rb - 4.0).abs() < 1e-12);
    }

    #[test]
    fn gaps_borrow_next_higher_then_lower() {
        let set = BranchSet::new(
            "test",
            vec![1.0, 2.0, 3.0, 4.0],
            vec![None, Some(branch(0.1)), None, Some(branch(0.5))],
        )
        .unwrap();
        assert_eq!(set.branches[0], branch(0.1));
        assert_eq!(set.branches[2], branch(0.5));

        let set = BranchSet::new("test", vec![1.0, 2.0], vec![Some(branch(0.2)), None]).unwrap();
        assert_eq!(set.branches[1], branch(0.2));
    }

    #[test]
    fn no_data_at_all_is_error() {
        let err = BranchSet::new("test", vec![1.0, 2.0], vec![None, None]).unwrap_err();
        assert!(matches!(err, PvtError::InvalidTable { .. }));
    }
}
