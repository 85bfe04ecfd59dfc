//! Water PVT laws.

use bo_core::Real;
use bo_input::ConstantCompressibilityDef;

use crate::const_comp::ConstantCompressibility;
use crate::error::PvtResult;
use crate::law::{WaterPvtLaw, validation};

/// Constant-compressibility water (PVTW style).
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantCompressibilityWaterPvt {
    regions: Vec<ConstantCompressibility>,
}

impl ConstantCompressibilityWaterPvt {
    pub fn new(regions: Vec<ConstantCompressibility>) -> PvtResult<Self> {
        validation::non_empty("water", &regions)?;
        Ok(Self { regions })
    }

    pub fn from_params(params: &[ConstantCompressibilityDef]) -> PvtResult<Self> {
        let regions = params
            .iter()
            .map(|p| ConstantCompressibility::from_def("water", p))
            .collect::<PvtResult<Vec<_>>>()?;
        tracing::debug!(regions = regions.len(), "water PVT parameters set");
        Self::new(regions)
    }
}

impl WaterPvtLaw for ConstantCompressibilityWaterPvt {
    fn num_regions(&self) -> usize {
        self.regions.len()
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
    ) -> Real {
        self.regions[region].inverse_formation_volume_factor(pressure)
    }

    fn viscosity(&self, region: usize, _temperature: Real, pressure: Real) -> Real {
        self.regions[region].viscosity(pressure)
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        self.regions[region].pressure_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spe1_water() {
        // PVTW 4014.7 psia, 1.029, 3.13e-6 1/psi, 0.31 cP, 0
        let psi = 6_894.757_293_168_361;
        let water = ConstantCompressibilityWaterPvt::from_params(&[ConstantCompressibilityDef {
            reference_pressure: 4014.7 * psi,
            formation_volume_factor: 1.029,
            compressibility: 3.13e-6 / psi,
            viscosity: 0.31e-3,
            viscosibility: 0.0,
        }])
        .unwrap();
        let p_ref = 4014.7 * psi;
        assert!((water.inverse_formation_volume_factor(0, 300.0, p_ref) - 1.0 / 1.029).abs() < 1e-15);
        assert!((water.viscosity(0, 300.0, p_ref) - 0.31e-3).abs() < 1e-18);
        assert!(water.inverse_formation_volume_factor(0, 300.0, 2.0 * p_ref) > 1.0 / 1.029);
        let (lo, hi) = water.pressure_range(0);
        assert!(lo < p_ref && hi > p_ref);
    }
}
