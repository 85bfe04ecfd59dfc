//! Dead oil: no dissolved gas, `B` and `mu` tabulated against pressure.

use bo_core::Real;
use bo_input::PressureTableDef;

use crate::error::PvtResult;
use crate::law::{OilPvtLaw, validation};
use crate::pressure_table::PressureTable;

#[derive(Debug, Clone, PartialEq)]
pub struct DeadOilPvt {
    regions: Vec<PressureTable>,
}

impl DeadOilPvt {
    pub fn new(regions: Vec<PressureTable>) -> PvtResult<Self> {
        validation::non_empty("dead oil", &regions)?;
        Ok(Self { regions })
    }

    /// Build from SI tables, one per region.
    pub fn from_tables(tables: &[PressureTableDef]) -> PvtResult<Self> {
        let regions = tables
            .iter()
            .map(|t| PressureTable::from_def("dead oil", t))
            .collect::<PvtResult<Vec<_>>>()?;
        tracing::debug!(regions = regions.len(), "dead oil PVT tables built");
        Self::new(regions)
    }
}

impl OilPvtLaw for DeadOilPvt {
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
