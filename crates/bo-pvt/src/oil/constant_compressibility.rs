//! Constant-compressibility oil (PVCDO style). Carries no dissolved gas.

use bo_core::Real;
use bo_input::ConstantCompressibilityDef;

use crate::const_comp::ConstantCompressibility;
use crate::error::PvtResult;
use crate::law::{OilPvtLaw, validation};

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantCompressibilityOilPvt {
    regions: Vec<ConstantCompressibility>,
}

impl ConstantCompressibilityOilPvt {
    pub fn new(regions: Vec<ConstantCompressibility>) -> PvtResult<Self> {
        validation::non_empty("constant compressibility oil", &regions)?;
        Ok(Self { regions })
    }

    pub fn from_params(params: &[ConstantCompressibilityDef]) -> PvtResult<Self> {
        let regions = params
            .iter()
            .map(|p| ConstantCompressibility::from_def("constant compressibility oil", p))
            .collect::<PvtResult<Vec<_>>>()?;
        tracing::debug!(
            regions = regions.len(),
            "constant compressibility oil parameters set"
        );
        Self::new(regions)
    }
}

impl OilPvtLaw for ConstantCompressibilityOilPvt {
    fn num_regions(&self) -> usize {
        self.regions.len()
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
        _rs: Real,
    ) -> Real {
        self.regions[region].inverse_formation_volume_factor(pressure)
    }

    fn saturated_inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
    ) -> Real {
        self.regions[region].inverse_formation_volume_factor(pressure)
    }

    fn viscosity(&self, region: usize, _temperature: Real, pressure: Real, _rs: Real) -> Real {
        self.regions[region].viscosity(pressure)
    }

    fn saturated_viscosity(&self, region: usize, _temperature: Real, pressure: Real) -> Real {
        self.regions[region].viscosity(pressure)
    }

    fn saturated_gas_dissolution_factor(
        &self,
        _region: usize,
        _temperature: Real,
        _pressure: Real,
    ) -> Real {
        0.0
    }

    fn saturation_pressure(&self, _region: usize, _temperature: Real, _rs: Real) -> Real {
        0.0
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        self.regions[region].pressure_range()
    }
}
