//! Live oil (PVTO style): gas dissolves in oil up to the saturated line.
//!
//! Each record of the input table gives the bubble point pressure, `B` and
//! `mu` for one dissolved gas-oil ratio, followed by optional undersaturated
//! rows at higher pressure. The saturated curve is tabulated against bubble
//! point pressure. Undersaturated data are stored relative to the record's
//! own bubble point, so an evaluation at `Rs = Rs_sat(p)` lands on the
//! saturated value.

use bo_core::Real;
use bo_input::LiveOilTableDef;

use crate::branch::{Branch, BranchSet};
use crate::error::{PvtError, PvtResult};
use crate::law::{OilPvtLaw, validation};
use crate::tabulated::Tabulated1D;

const WHAT: &str = "live oil";

/// Tables of one PVT region.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveOilRegion {
    /// `Rs_sat(p_bub)`.
    saturated_rs: Tabulated1D,
    /// `1/B` on the saturated line against bubble point pressure.
    saturated_inv_b: Tabulated1D,
    /// `1/(B mu)` on the saturated line against bubble point pressure.
    saturated_inv_b_mu: Tabulated1D,
    /// Undersaturated branches keyed by Rs.
    branches: BranchSet,
}

impl LiveOilRegion {
    pub fn from_def(def: &LiveOilTableDef) -> PvtResult<Self> {
        if def.records.len() < 2 {
            return Err(PvtError::InvalidTable {
                what: WHAT,
                reason: format!("{} records, at least 2 required", def.records.len()),
            });
        }

        let n = def.records.len();
        let mut rs = Vec::with_capacity(n);
        let mut p_bub = Vec::with_capacity(n);
        let mut inv_b = Vec::with_capacity(n);
        let mut inv_b_mu = Vec::with_capacity(n);
        let mut branches = Vec::with_capacity(n);

        for record in &def.records {
            let Some(sat) = record.rows.first() else {
                return Err(PvtError::InvalidTable {
                    what: WHAT,
                    reason: format!("record at Rs = {} has no rows", record.rs),
                });
            };
            let b_sat = validation::positive(WHAT, sat.b)?;
            let mu_sat = validation::positive(WHAT, sat.mu)?;

            rs.push(validation::finite(WHAT, record.rs)?);
            p_bub.push(sat.p);
            inv_b.push(1.0 / b_sat);
            inv_b_mu.push(1.0 / (b_sat * mu_sat));

            if record.rows.len() < 2 {
                branches.push(None);
                continue;
            }
            let mut offsets = Vec::with_capacity(record.rows.len());
            let mut b_ratio = Vec::with_capacity(record.rows.len());
            let mut b_mu_ratio = Vec::with_capacity(record.rows.len());
            for row in &record.rows {
                let b = validation::positive(WHAT, row.b)?;
                let mu = validation::positive(WHAT, row.mu)?;
                offsets.push(row.p - sat.p);
                b_ratio.push(b_sat / b);
                b_mu_ratio.push((b_sat * mu_sat) / (b * mu));
            }
            branches.push(Some(Branch::new(WHAT, offsets, b_ratio, b_mu_ratio)?));
        }

        if let Some(index) = rs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(PvtError::NonMonotonic {
                what: "live oil Rs",
                index: index + 1,
            });
        }

        Ok(Self {
            saturated_rs: Tabulated1D::new(WHAT, p_bub.clone(), rs.clone())?,
            saturated_inv_b: Tabulated1D::new(WHAT, p_bub.clone(), inv_b)?,
            saturated_inv_b_mu: Tabulated1D::new(WHAT, p_bub, inv_b_mu)?,
            branches: BranchSet::new(WHAT, rs, branches)?,
        })
    }

    #[inline]
    fn bubble_point(&self, rs: Real) -> Real {
        self.saturated_rs.inverse_eval(rs)
    }

    /// `(b, b/mu)` at an arbitrary state.
    #[inline]
    fn eval(&self, pressure: Real, rs: Real) -> (Real, Real) {
        let p_bub = self.bubble_point(rs);
        let (rb, rbmu) = self.branches.ratios(rs, pressure - p_bub);
        (
            self.saturated_inv_b.eval(p_bub) * rb,
            self.saturated_inv_b_mu.eval(p_bub) * rbmu,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiveOilPvt {
    regions: Vec<LiveOilRegion>,
}

impl LiveOilPvt {
    pub fn new(regions: Vec<LiveOilRegion>) -> PvtResult<Self> {
        validation::non_empty(WHAT, &regions)?;
        Ok(Self { regions })
    }

    /// Build from SI tables, one per region.
    pub fn from_tables(tables: &[LiveOilTableDef]) -> PvtResult<Self> {
        let regions = tables
            .iter()
            .map(LiveOilRegion::from_def)
            .collect::<PvtResult<Vec<_>>>()?;
        tracing::debug!(
            regions = regions.len(),
            records = tables.iter().map(|t| t.records.len()).sum::<usize>(),
            "live oil PVT tables built"
        );
        Self::new(regions)
    }
}

impl OilPvtLaw for LiveOilPvt {
    fn num_regions(&self) -> usize {
        self.regions.len()
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
        rs: Real,
    ) -> Real {
        self.regions[region].eval(pressure, rs).0
    }

    fn saturated_inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
    ) -> Real {
        self.regions[region].saturated_inv_b.eval(pressure)
    }

    fn viscosity(&self, region: usize, _temperature: Real, pressure: Real, rs: Real) -> Real {
        let (b, b_over_mu) = self.regions[region].eval(pressure, rs);
        b / b_over_mu
    }

    fn saturated_viscosity(&self, region: usize, _temperature: Real, pressure: Real) -> Real {
        let r = &self.regions[region];
        r.saturated_inv_b.eval(pressure) / r.saturated_inv_b_mu.eval(pressure)
    }

    fn saturated_gas_dissolution_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
    ) -> Real {
        self.regions[region].saturated_rs.eval(pressure)
    }

    fn saturation_pressure(&self, region: usize, _temperature: Real, rs: Real) -> Real {
        self.regions[region].bubble_point(rs)
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        let t = &self.regions[region].saturated_rs;
        (t.x_min(), t.x_max())
    }
}
