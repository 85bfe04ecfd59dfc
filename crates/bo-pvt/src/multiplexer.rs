//! Closed sets of PVT laws, one enum per fluid.
//!
//! The variant is chosen once from the input and never changes; every call
//! is forwarded to the active law through an exhaustive `match`.

use std::fmt;

use bo_core::Real;
use bo_input::{GasPvtDef, OilPvtDef, WaterPvtDef};

use crate::error::PvtResult;
use crate::gas::{DryGasPvt, WetGasPvt};
use crate::law::{GasPvtLaw, OilPvtLaw, WaterPvtLaw};
use crate::oil::{ConstantCompressibilityOilPvt, DeadOilPvt, LiveOilPvt};
use crate::water::ConstantCompressibilityWaterPvt;

macro_rules! dispatch {
    ($self:expr, $enum:ident { $($variant:ident),+ }, $law:ident => $call:expr) => {
        match $self {
            $($enum::$variant($law) => $call,)+
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OilPvtApproach {
    Live,
    Dead,
    ConstantCompressibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasPvtApproach {
    Wet,
    Dry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterPvtApproach {
    ConstantCompressibility,
}

impl fmt::Display for OilPvtApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Live => "live oil",
            Self::Dead => "dead oil",
            Self::ConstantCompressibility => "constant compressibility oil",
        })
    }
}

impl fmt::Display for GasPvtApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wet => "wet gas",
            Self::Dry => "dry gas",
        })
    }
}

impl fmt::Display for WaterPvtApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ConstantCompressibility => "constant compressibility water",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OilPvt {
    Live(LiveOilPvt),
    Dead(DeadOilPvt),
    ConstantCompressibility(ConstantCompressibilityOilPvt),
}

impl OilPvt {
    /// Build the law selected by an input definition already converted to SI.
    pub fn from_input(def: &OilPvtDef) -> PvtResult<Self> {
        let oil = match def {
            OilPvtDef::Live { regions } => Self::Live(LiveOilPvt::from_tables(regions)?),
            OilPvtDef::Dead { regions } => Self::Dead(DeadOilPvt::from_tables(regions)?),
            OilPvtDef::ConstantCompressibility { regions } => {
                Self::ConstantCompressibility(ConstantCompressibilityOilPvt::from_params(regions)?)
            }
        };
        tracing::info!(approach = %oil.approach(), regions = oil.num_regions(), "oil PVT selected");
        Ok(oil)
    }

    pub fn approach(&self) -> OilPvtApproach {
        match self {
            Self::Live(_) => OilPvtApproach::Live,
            Self::Dead(_) => OilPvtApproach::Dead,
            Self::ConstantCompressibility(_) => OilPvtApproach::ConstantCompressibility,
        }
    }

    /// Whether gas can dissolve in this oil.
    pub fn has_dissolution(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

impl OilPvtLaw for OilPvt {
    fn num_regions(&self) -> usize {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law => law.num_regions())
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
        rs: Real,
    ) -> Real {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law =>
            law.inverse_formation_volume_factor(region, temperature, pressure, rs))
    }

    fn saturated_inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law =>
            law.saturated_inverse_formation_volume_factor(region, temperature, pressure))
    }

    fn viscosity(&self, region: usize, temperature: Real, pressure: Real, rs: Real) -> Real {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law =>
            law.viscosity(region, temperature, pressure, rs))
    }

    fn saturated_viscosity(&self, region: usize, temperature: Real, pressure: Real) -> Real {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law =>
            law.saturated_viscosity(region, temperature, pressure))
    }

    fn saturated_gas_dissolution_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law =>
            law.saturated_gas_dissolution_factor(region, temperature, pressure))
    }

    fn saturation_pressure(&self, region: usize, temperature: Real, rs: Real) -> Real {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law =>
            law.saturation_pressure(region, temperature, rs))
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        dispatch!(self, OilPvt { Live, Dead, ConstantCompressibility }, law =>
            law.pressure_range(region))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GasPvt {
    Wet(WetGasPvt),
    Dry(DryGasPvt),
}

impl GasPvt {
    pub fn from_input(def: &GasPvtDef) -> PvtResult<Self> {
        let gas = match def {
            GasPvtDef::Wet { regions } => Self::Wet(WetGasPvt::from_tables(regions)?),
            GasPvtDef::Dry { regions } => Self::Dry(DryGasPvt::from_tables(regions)?),
        };
        tracing::info!(approach = %gas.approach(), regions = gas.num_regions(), "gas PVT selected");
        Ok(gas)
    }

    pub fn approach(&self) -> GasPvtApproach {
        match self {
            Self::Wet(_) => GasPvtApproach::Wet,
            Self::Dry(_) => GasPvtApproach::Dry,
        }
    }

    /// Whether oil can vaporize into this gas.
    pub fn has_vaporization(&self) -> bool {
        matches!(self, Self::Wet(_))
    }
}

impl GasPvtLaw for GasPvt {
    fn num_regions(&self) -> usize {
        dispatch!(self, GasPvt { Wet, Dry }, law => law.num_regions())
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
        rv: Real,
    ) -> Real {
        dispatch!(self, GasPvt { Wet, Dry }, law =>
            law.inverse_formation_volume_factor(region, temperature, pressure, rv))
    }

    fn saturated_inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real {
        dispatch!(self, GasPvt { Wet, Dry }, law =>
            law.saturated_inverse_formation_volume_factor(region, temperature, pressure))
    }

    fn viscosity(&self, region: usize, temperature: Real, pressure: Real, rv: Real) -> Real {
        dispatch!(self, GasPvt { Wet, Dry }, law =>
            law.viscosity(region, temperature, pressure, rv))
    }

    fn saturated_viscosity(&self, region: usize, temperature: Real, pressure: Real) -> Real {
        dispatch!(self, GasPvt { Wet, Dry }, law =>
            law.saturated_viscosity(region, temperature, pressure))
    }

    fn saturated_oil_vaporization_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real {
        dispatch!(self, GasPvt { Wet, Dry }, law =>
            law.saturated_oil_vaporization_factor(region, temperature, pressure))
    }

    fn saturation_pressure(&self, region: usize, temperature: Real, rv: Real) -> Real {
        dispatch!(self, GasPvt { Wet, Dry }, law =>
            law.saturation_pressure(region, temperature, rv))
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        dispatch!(self, GasPvt { Wet, Dry }, law => law.pressure_range(region))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WaterPvt {
    ConstantCompressibility(ConstantCompressibilityWaterPvt),
}

impl WaterPvt {
    pub fn from_input(def: &WaterPvtDef) -> PvtResult<Self> {
        let water = match def {
            WaterPvtDef::ConstantCompressibility { regions } => Self::ConstantCompressibility(
                ConstantCompressibilityWaterPvt::from_params(regions)?,
            ),
        };
        tracing::info!(
            approach = %water.approach(),
            regions = water.num_regions(),
            "water PVT selected"
        );
        Ok(water)
    }

    pub fn approach(&self) -> WaterPvtApproach {
        match self {
            Self::ConstantCompressibility(_) => WaterPvtApproach::ConstantCompressibility,
        }
    }
}

impl WaterPvtLaw for WaterPvt {
    fn num_regions(&self) -> usize {
        dispatch!(self, WaterPvt { ConstantCompressibility }, law => law.num_regions())
    }

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real {
        dispatch!(self, WaterPvt { ConstantCompressibility }, law =>
            law.inverse_formation_volume_factor(region, temperature, pressure))
    }

    fn viscosity(&self, region: usize, temperature: Real, pressure: Real) -> Real {
        dispatch!(self, WaterPvt { ConstantCompressibility }, law =>
            law.viscosity(region, temperature, pressure))
    }

    fn pressure_range(&self, region: usize) -> (Real, Real) {
        dispatch!(self, WaterPvt { ConstantCompressibility }, law => law.pressure_range(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bo_input::{ConstantCompressibilityDef, PressureTableDef, PvtRowDef};

    fn dead_def() -> OilPvtDef {
        OilPvtDef::Dead {
            regions: vec![PressureTableDef {
                rows: vec![
                    PvtRowDef { p: 1.0e6, b: 1.10, mu: 1.2e-3 },
                    PvtRowDef { p: 2.0e7, b: 1.05, mu: 1.5e-3 },
                ],
            }],
        }
    }

    #[test]
    fn oil_dispatch_matches_direct_law() {
        let OilPvtDef::Dead { regions } = dead_def() else {
            unreachable!()
        };
        let direct = DeadOilPvt::from_tables(&regions).unwrap();
        let mux = OilPvt::from_input(&dead_def()).unwrap();
        assert_eq!(mux.approach(), OilPvtApproach::Dead);
        assert!(!mux.has_dissolution());
        for p in [5.0e5, 3.0e6, 1.2e7, 4.0e7] {
            assert_eq!(
                mux.inverse_formation_volume_factor(0, 300.0, p, 0.0),
                direct.inverse_formation_volume_factor(0, 300.0, p, 0.0)
            );
            assert_eq!(mux.viscosity(0, 300.0, p, 0.0), direct.viscosity(0, 300.0, p, 0.0));
        }
        assert_eq!(mux.pressure_range(0), direct.pressure_range(0));
    }

    #[test]
    fn gas_and_water_approaches() {
        let gas = GasPvt::from_input(&GasPvtDef::Dry {
            regions: vec![PressureTableDef {
                rows: vec![
                    PvtRowDef { p: 1.0e6, b: 0.12, mu: 1.2e-5 },
                    PvtRowDef { p: 1.0e7, b: 0.012, mu: 1.5e-5 },
                ],
            }],
        })
        .unwrap();
        assert_eq!(gas.approach(), GasPvtApproach::Dry);
        assert!(!gas.has_vaporization());
        assert_eq!(gas.saturated_oil_vaporization_factor(0, 300.0, 5.0e6), 0.0);

        let water = WaterPvt::from_input(&WaterPvtDef::ConstantCompressibility {
            regions: vec![ConstantCompressibilityDef {
                reference_pressure: 2.0e7,
                formation_volume_factor: 1.03,
                compressibility: 4.5e-10,
                viscosity: 3.0e-4,
                viscosibility: 0.0,
            }],
        })
        .unwrap();
        assert_eq!(water.approach(), WaterPvtApproach::ConstantCompressibility);
        assert_eq!(water.num_regions(), 1);
        assert!((water.viscosity(0, 300.0, 2.0e7) - 3.0e-4).abs() < 1e-18);
    }

    #[test]
    fn approach_names() {
        assert_eq!(OilPvtApproach::Live.to_string(), "live oil");
        assert_eq!(GasPvtApproach::Wet.to_string(), "wet gas");
        assert_eq!(
            WaterPvtApproach::ConstantCompressibility.to_string(),
            "constant compressibility water"
        );
    }

    #[test]
    fn build_failure_propagates() {
        let def = OilPvtDef::Dead { regions: vec![] };
        assert!(OilPvt::from_input(&def).is_err());
    }
}
