//! Dry gas: no vaporized oil, `B` and `mu` tabulated against pressure.

use bo_core::Real;
use bo_input::PressureTableDef;

use crate::error::PvtResult;
use crate::law::{GasPvtLaw, validation};
use crate::pressure_table::PressureTable;

#[derive(Debug, Clone, PartialEq)]
pub struct DryGasPvt {
    regions: Vec<PressureTable>,
}

impl DryGasPvt {
    pub fn new(regions: Vec<PressureTable>) -> PvtResult<Self> {
        validation::non_empty("dry gas", &regions)?;
        Ok(Self { regions })
    }

    pub fn from_tables(tables: &[PressureTableDef]) -> PvtResult<Self> {
        let regions = tables
            .iter()
            .map(|t| PressureTable::from_def("dry gas", t))
            .collect::<PvtResult<Vec<_>>>()?;
        tracing::debug!(regions = regions.len(), "dry gas PVT tables built");
        Self::new(regions)
    }
}

impl GasPvtLaw for DryGasPvt {
    fn num_regions(&self) -> usize {
        self.regions.len()
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        _temperature: Real,
        pressure: Real,
        _rv: Real,
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

    fn viscosity(&self, region: usize, _temperature: Real, pressure: Real, _rv: Real) -> Real {
        self.regions[region].viscosity(pressure)
    }

    fn saturated_viscosity(&self, region: usize, _temperature: Real, pressure: Real) -> Real {
        self.regions[region].viscosity(pressure)
    }

    fn saturated_oil_vaporization_factor(
        &self,
        _region: usize,
        _temperature: Real,
        _pressure: Real,
    ) -> Real {
        0.0
    }

    fn saturation_pressure(&self, _region: usize, _temperature: Real, _rv: Real) -> Real {
        0.0
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        self.regions[region].pressure_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bo_input::PvtRowDef;

    #[test]
    fn gas_expands_as_pressure_drops() {
        let gas = DryGasPvt::from_tables(&[PressureTableDef {
            rows: vec![
                PvtRowDef { p: 1.0e6, b: 0.12, mu: 1.2e-5 },
                PvtRowDef { p: 1.0e7, b: 0.012, mu: 1.5e-5 },
                PvtRowDef { p: 3.0e7, b: 0.0045, mu: 2.4e-5 },
            ],
        }])
        .unwrap();
        let lo = gas.inverse_formation_volume_factor(0, 300.0, 2.0e6, 0.0);
        let hi = gas.inverse_formation_volume_factor(0, 300.0, 2.0e7, 0.0);
        assert!(hi > lo);
        assert!((gas.saturated_viscosity(0, 300.0, 1.0e7) - 1.5e-5).abs() < 1e-18);
        assert_eq!(gas.saturated_oil_vaporization_factor(0, 300.0, 1.0e7), 0.0);
        assert_eq!(gas.saturation_pressure(0, 300.0, 1.0e-4), 0.0);
        assert_eq!(
            gas.viscosity(0, 300.0, 1.5e7, 1.0e-4),
            gas.saturated_viscosity(0, 300.0, 1.5e7)
        );
    }
}
