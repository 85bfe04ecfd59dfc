//! Wet gas (PVTG style): oil vaporizes into gas up to the saturated line.
//!
//! Each record holds one pressure. Its first row is the saturated state
//! (`Rv = Rv_sat(p)`); further rows carry less vaporized oil. The branches
//! are tabulated against `Rv - Rv_sat(p)`, which is never positive in the
//! input.

use bo_core::Real;
use bo_input::WetGasTableDef;

use crate::branch::{Branch, BranchSet};
use crate::error::{PvtError, PvtResult};
use crate::law::{GasPvtLaw, validation};
use crate::tabulated::Tabulated1D;

const WHAT: &str = "wet gas";

#[derive(Debug, Clone, PartialEq)]
pub struct WetGasRegion {
    saturated_rv: Tabulated1D,
    saturated_inv_b: Tabulated1D,
    saturated_inv_b_mu: Tabulated1D,
    /// Keyed by pressure.
    branches: BranchSet,
}

impl WetGasRegion {
    pub fn from_def(def: &WetGasTableDef) -> PvtResult<Self> {
        if def.records.len() < 2 {
            return Err(PvtError::InvalidTable {
                what: WHAT,
                reason: format!("{} records, at least 2 required", def.records.len()),
            });
        }

        let n = def.records.len();
        let mut p = Vec::with_capacity(n);
        let mut rv_sat = Vec::with_capacity(n);
        let mut inv_b = Vec::with_capacity(n);
        let mut inv_b_mu = Vec::with_capacity(n);
        let mut branches = Vec::with_capacity(n);

        for record in &def.records {
            let Some(sat) = record.rows.first() else {
                return Err(PvtError::InvalidTable {
                    what: WHAT,
                    reason: format!("record at p = {} has no rows", record.p),
                });
            };
            let b_sat = validation::positive(WHAT, sat.b)?;
            let mu_sat = validation::positive(WHAT, sat.mu)?;

            p.push(record.p);
            rv_sat.push(validation::finite(WHAT, sat.rv)?);
            inv_b.push(1.0 / b_sat);
            inv_b_mu.push(1.0 / (b_sat * mu_sat));

            if record.rows.len() < 2 {
                branches.push(None);
                continue;
            }
            // Rows run from saturated to dry; the branch needs increasing offsets.
            let mut offsets = Vec::with_capacity(record.rows.len());
            let mut b_ratio = Vec::with_capacity(record.rows.len());
            let mut b_mu_ratio = Vec::with_capacity(record.rows.len());
            for row in record.rows.iter().rev() {
                let b = validation::positive(WHAT, row.b)?;
                let mu = validation::positive(WHAT, row.mu)?;
                offsets.push(row.rv - sat.rv);
                b_ratio.push(b_sat / b);
                b_mu_ratio.push((b_sat * mu_sat) / (b * mu));
            }
            branches.push(Some(Branch::new(WHAT, offsets, b_ratio, b_mu_ratio)?));
        }

        if let Some(index) = rv_sat.windows(2).position(|w| w[1] < w[0]) {
            return Err(PvtError::NonMonotonic {
                what: "wet gas saturated Rv",
                index: index + 1,
            });
        }

        Ok(Self {
            saturated_rv: Tabulated1D::new(WHAT, p.clone(), rv_sat)?,
            saturated_inv_b: Tabulated1D::new(WHAT, p.clone(), inv_b)?,
            saturated_inv_b_mu: Tabulated1D::new(WHAT, p.clone(), inv_b_mu)?,
            branches: BranchSet::new(WHAT, p, branches)?,
        })
    }

    #[inline]
    fn eval(&self, pressure: Real, rv: Real) -> (Real, Real) {
        let offset = rv - self.saturated_rv.eval(pressure);
        let (rb, rbmu) = self.branches.ratios(pressure, offset);
        (
            self.saturated_inv_b.eval(pressure) * rb,
            self.saturated_inv_b_mu.eval(pressure) * rbmu,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WetGasPvt {
    regions: Vec<WetGasRegion>,
}

impl WetGasPvt {
    pub fn new(regions: Vec<WetGasRegion>) -> PvtResult<Self> {
        validation::non_empty(WHAT, &regions)?;
        Ok(Self { regions })
    }

    pub fn from_tables(tables: &[WetGasTableDef]) -> PvtResult<Self> {
        let regions = tables
            .iter()
            .map(WetGasRegion::from_def)
            .collect::<PvtResult<Vec<_>>>()?;
        tracing::debug!(
            regions = regions.len(),
            records = tables.iter().map(|t| t.records.len()).sum::<usize>(),
            "wet gas PVT tables built"
        );
        Self::new(regions)
    }
}

impl GasPvtLaw for WetGasPvt {
    fn num_regions(&self) -> usize {
        self.regions.len()
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
        rv: Real,
    ) -> Real {
        self.regions[region].eval(pressure, rv).0
    }

    fn saturated_inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
    ) -> Real {
        self.regions[region].saturated_inv_b.eval(pressure)
    }

    fn viscosity(&self, region: usize, _temperature: Real, pressure: Real, rv: Real) -> Real {
        let (b, b_over_mu) = self.regions[region].eval(pressure, rv);
        b / b_over_mu
    }

    fn saturated_viscosity(&self, region: usize, _temperature: Real, pressure: Real) -> Real {
        let r = &self.regions[region];
        r.saturated_inv_b.eval(pressure) / r.saturated_inv_b_mu.eval(pressure)
    }

    fn saturated_oil_vaporization_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
    ) -> Real {
        self.regions[region].saturated_rv.eval(pressure)
    }

    fn saturation_pressure(&self, region: usize, _temperature: Real, rv: Real) -> Real {
        self.regions[region].saturated_rv.inverse_eval(rv)
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        let t = &self.regions[region].saturated_rv;
        (t.x_min(), t.x_max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bo_core::{Tolerances, linear_points, nearly_equal};
    use bo_input::{WetGasRecordDef, WetGasRowDef};

    const T: Real = 360.0;

    fn row(rv: Real, b: Real, mu: Real) -> WetGasRowDef {
        WetGasRowDef { rv, b, mu }
    }

    fn table() -> WetGasTableDef {
        WetGasTableDef {
            records: vec![
                WetGasRecordDef {
                    p: 50.0e5,
                    rows: vec![row(1.0e-5, 0.02, 1.3e-5), row(0.0, 0.0201, 1.29e-5)],
                },
                WetGasRecordDef {
                    p: 100.0e5,
                    rows: vec![row(2.0e-5, 0.01, 1.4e-5)],
                },
                WetGasRecordDef {
                    p: 200.0e5,
                    rows: vec![row(5.0e-5, 0.005, 1.8e-5), row(0.0, 0.0051, 1.75e-5)],
                },
            ],
        }
    }

    fn law() -> WetGasPvt {
        WetGasPvt::from_tables(&[table()]).unwrap()
    }

    #[test]
    fn saturated_curve_and_dew_point() {
        let gas = law();
        assert!((gas.saturated_oil_vaporization_factor(0, T, 150.0e5) - 3.5e-5).abs() < 1e-18);
        assert!((gas.saturation_pressure(0, T, 3.5e-5) - 150.0e5).abs() < 1e-4);
        assert!((gas.saturated_inverse_formation_volume_factor(0, T, 100.0e5) - 100.0).abs() < 1e-10);
        assert!((gas.saturated_viscosity(0, T, 50.0e5) - 1.3e-5).abs() < 1e-18);
    }

    #[test]
    fn dry_rows_are_reproduced() {
        let gas = law();
        let b = gas.inverse_formation_volume_factor(0, T, 50.0e5, 0.0);
        assert!((b - 1.0 / 0.0201).abs() < 1e-9);
        let mu = gas.viscosity(0, T, 200.0e5, 0.0);
        assert!((mu - 1.75e-5).abs() < 1e-17);
    }

    #[test]
    fn saturated_and_general_paths_agree() {
        let gas = law();
        let tol = Tolerances::saturated_line();
        for p in linear_points(10.0e5, 610.0e5, 50) {
            let rv_sat = gas.saturated_oil_vaporization_factor(0, T, p);
            let b = gas.inverse_formation_volume_factor(0, T, p, rv_sat);
            let b_sat = gas.saturated_inverse_formation_volume_factor(0, T, p);
            assert!(nearly_equal(b, b_sat, tol), "p={p}: {b} vs {b_sat}");
            let mu = gas.viscosity(0, T, p, rv_sat);
            let mu_sat = gas.saturated_viscosity(0, T, p);
            assert!(nearly_equal(mu, mu_sat, tol), "p={p}: {mu} vs {mu_sat}");
        }
    }

    #[test]
    fn decreasing_saturated_rv_rejected() {
        let mut def = table();
        def.records[2].rows[0].rv = 1.0e-6;
        let err = WetGasRegion::from_def(&def).unwrap_err();
        assert!(matches!(err, PvtError::NonMonotonic { index: 2, .. }));
    }
}
