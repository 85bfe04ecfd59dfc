//! Pressure-indexed `(B, mu)` tables shared by dead oil and dry gas.

use bo_core::Real;
use bo_input::PressureTableDef;

use crate::error::PvtResult;
use crate::law::validation;
use crate::tabulated::Tabulated1D;

/// `1/B(p)` and `1/(B mu)(p)` of one region.
///
/// Storing the product form keeps viscosity linear in the interpolated
/// quantities: `mu = (1/B) / (1/(B mu))`.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureTable {
    inv_b: Tabulated1D,
    inv_b_mu: Tabulated1D,
}

impl PressureTable {
    /// Build from `(p, B, mu)` rows in SI units.
    pub fn from_rows(what: &'static str, rows: &[(Real, Real, Real)]) -> PvtResult<Self> {
        let mut p = Vec::with_capacity(rows.len());
        let mut inv_b = Vec::with_capacity(rows.len());
        let mut inv_b_mu = Vec::with_capacity(rows.len());
        for &(pi, b, mu) in rows {
            let b = validation::positive(what, b)?;
            let mu = validation::positive(what, mu)?;
            p.push(pi);
            inv_b.push(1.0 / b);
            inv_b_mu.push(1.0 / (b * mu));
        }
        Ok(Self {
            inv_b: Tabulated1D::new(what, p.clone(), inv_b)?,
            inv_b_mu: Tabulated1D::new(what, p, inv_b_mu)?,
        })
    }

    pub fn from_def(what: &'static str, def: &PressureTableDef) -> PvtResult<Self> {
        let rows: Vec<_> = def.rows.iter().map(|r| (r.p, r.b, r.mu)).collect();
        Self::from_rows(what, &rows)
    }

    #[inline]
    pub fn inverse_formation_volume_factor(&self, pressure: Real) -> Real {
        self.inv_b.eval(pressure)
    }

    #[inline]
    pub fn viscosity(&self, pressure: Real) -> Real {
        self.inv_b.eval(pressure) / self.inv_b_mu.eval(pressure)
    }

    pub fn pressure_range(&self) -> (Real, Real) {
        (self.inv_b.x_min(), self.inv_b.x_max())
    }
}
