//! Closed-form constant-compressibility liquid (PVCDO / PVTW style).

use bo_core::Real;
use bo_core::units::constants::SURFACE_PRESSURE_PA;
use bo_input::ConstantCompressibilityDef;

use crate::error::PvtResult;
use crate::law::validation;

/// Reference-point parameters of one region.
///
/// With `X = c (p - p_ref)` and `Y = (c - c_mu)(p - p_ref)`:
///
/// ```text
/// b  = (1 + X + X²/2) / B_ref
/// mu = B_ref mu_ref / ((1 + Y + Y²/2) B)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCompressibility {
    reference_pressure: Real,
    reference_fvf: Real,
    compressibility: Real,
    reference_viscosity: Real,
    viscosibility: Real,
}

impl ConstantCompressibility {
    pub fn new(
        what: &'static str,
        reference_pressure: Real,
        reference_fvf: Real,
        compressibility: Real,
        reference_viscosity: Real,
        viscosibility: Real,
    ) -> PvtResult<Self> {
        Ok(Self {
            reference_pressure: validation::finite(what, reference_pressure)?,
            reference_fvf: validation::positive(what, reference_fvf)?,
            compressibility: validation::finite(what, compressibility)?,
            reference_viscosity: validation::positive(what, reference_viscosity)?,
            viscosibility: validation::finite(what, viscosibility)?,
        })
    }

    pub fn from_def(what: &'static str, def: &ConstantCompressibilityDef) -> PvtResult<Self> {
        Self::new(
            what,
            def.reference_pressure,
            def.formation_volume_factor,
            def.compressibility,
            def.viscosity,
            def.viscosibility,
        )
    }

    #[inline]
    pub fn inverse_formation_volume_factor(&self, pressure: Real) -> Real {
        let x = self.compressibility * (pressure - self.reference_pressure);
        (1.0 + x * (1.0 + x / 2.0)) / self.reference_fvf
    }

    #[inline]
    pub fn viscosity(&self, pressure: Real) -> Real {
        let b = self.inverse_formation_volume_factor(pressure);
        let y = (self.compressibility - self.viscosibility) * (pressure - self.reference_pressure);
        self.reference_fvf * self.reference_viscosity * b / (1.0 + y * (1.0 + y / 2.0))
    }

    /// There is no table; the span runs from the lower of surface and
    /// reference pressure to twice the higher one.
    pub fn pressure_range(&self) -> (Real, Real) {
        let lo = SURFACE_PRESSURE_PA.min(self.reference_pressure);
        let hi = 2.0 * SURFACE_PRESSURE_PA.max(self.reference_pressure);
        (lo, hi)
    }
}
