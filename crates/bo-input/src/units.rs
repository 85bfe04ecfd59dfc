//! Unit systems of PVT input documents and conversion to SI.

use bo_core::units::constants::{BARREL_M3, CUBIC_FOOT_M3};
use bo_core::units::{self, si};
use serde::{Deserialize, Serialize};

use crate::schema::{
    ConstantCompressibilityDef, DensityDef, GasPvtDef, LiveOilRecordDef, LiveOilTableDef,
    OilPvtDef, PressureTableDef, PvtInput, PvtRowDef, WaterPvtDef, WetGasRecordDef,
    WetGasRowDef, WetGasTableDef,
};

/// Unit system of an input document.
///
/// | quantity        | si        | metric    | field        |
/// |-----------------|-----------|-----------|--------------|
/// | pressure        | Pa        | bar       | psia         |
/// | viscosity       | Pa·s      | cP        | cP           |
/// | Rs              | sm³/sm³   | sm³/sm³   | Mscf/stb     |
/// | Rv              | sm³/sm³   | sm³/sm³   | stb/Mscf     |
/// | liquid FVF      | rm³/sm³   | rm³/sm³   | rb/stb       |
/// | gas FVF         | rm³/sm³   | rm³/sm³   | rb/Mscf      |
/// | compressibility | 1/Pa      | 1/bar     | 1/psi        |
/// | density         | kg/m³     | kg/m³     | lb/ft³       |
/// | temperature     | K         | °C        | °F           |
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Si,
    Metric,
    Field,
}

impl UnitSystem {
    pub fn pressure(self, v: f64) -> f64 {
        match self {
            Self::Si => v,
            Self::Metric => si::pascals(units::bar(v)),
            Self::Field => si::pascals(units::psia(v)),
        }
    }

    pub fn viscosity(self, v: f64) -> f64 {
        match self {
            Self::Si => v,
            Self::Metric | Self::Field => si::pascal_seconds(units::centipoise(v)),
        }
    }

    pub fn gas_oil_ratio(self, v: f64) -> f64 {
        match self {
            Self::Si | Self::Metric => v,
            Self::Field => v * 1000.0 * CUBIC_FOOT_M3 / BARREL_M3,
        }
    }

    pub fn oil_gas_ratio(self, v: f64) -> f64 {
        match self {
            Self::Si | Self::Metric => v,
            Self::Field => v * BARREL_M3 / (1000.0 * CUBIC_FOOT_M3),
        }
    }

    pub fn liquid_fvf(self, v: f64) -> f64 {
        v
    }

    pub fn gas_fvf(self, v: f64) -> f64 {
        match self {
            Self::Si | Self::Metric => v,
            Self::Field => v * BARREL_M3 / (1000.0 * CUBIC_FOOT_M3),
        }
    }

    /// Compressibility is an inverse pressure.
    pub fn compressibility(self, v: f64) -> f64 {
        v / self.pressure(1.0)
    }

    pub fn density(self, v: f64) -> f64 {
        match self {
            Self::Si | Self::Metric => v,
            Self::Field => si::kg_per_cubic_meter(units::lb_per_ft3(v)),
        }
    }

    pub fn temperature(self, v: f64) -> f64 {
        match self {
            Self::Si => v,
            Self::Metric => si::kelvins(units::celsius(v)),
            Self::Field => si::kelvins(units::fahrenheit(v)),
        }
    }
}

impl PvtInput {
    /// Copy of this document with every number expressed in SI.
    pub fn to_si(&self) -> PvtInput {
        let u = self.unit_system();
        PvtInput {
            version: self.version,
            name: self.name.clone(),
            units: Some(UnitSystem::Si),
            density: self
                .density
                .iter()
                .map(|d| DensityDef {
                    oil: u.density(d.oil),
                    water: u.density(d.water),
                    gas: u.density(d.gas),
                })
                .collect(),
            reservoir_temperature: self
                .reservoir_temperature
                .iter()
                .map(|&t| u.temperature(t))
                .collect(),
            oil: self.oil.as_ref().map(|oil| oil_to_si(oil, u)),
            gas: self.gas.as_ref().map(|gas| gas_to_si(gas, u)),
            water: self.water.as_ref().map(|water| water_to_si(water, u)),
        }
    }
}

fn liquid_rows_to_si(rows: &[PvtRowDef], u: UnitSystem) -> Vec<PvtRowDef> {
    rows.iter()
        .map(|r| PvtRowDef {
            p: u.pressure(r.p),
            b: u.liquid_fvf(r.b),
            mu: u.viscosity(r.mu),
        })
        .collect()
}

fn const_comp_to_si(def: &ConstantCompressibilityDef, u: UnitSystem) -> ConstantCompressibilityDef {
    ConstantCompressibilityDef {
        reference_pressure: u.pressure(def.reference_pressure),
        formation_volume_factor: u.liquid_fvf(def.formation_volume_factor),
        compressibility: u.compressibility(def.compressibility),
        viscosity: u.viscosity(def.viscosity),
        viscosibility: u.compressibility(def.viscosibility),
    }
}

fn oil_to_si(def: &OilPvtDef, u: UnitSystem) -> OilPvtDef {
    match def {
        OilPvtDef::Live { regions } => OilPvtDef::Live {
            regions: regions
                .iter()
                .map(|table| LiveOilTableDef {
                    records: table
                        .records
                        .iter()
                        .map(|rec| LiveOilRecordDef {
                            rs: u.gas_oil_ratio(rec.rs),
                            rows: liquid_rows_to_si(&rec.rows, u),
                        })
                        .collect(),
                })
                .collect(),
        },
        OilPvtDef::Dead { regions } => OilPvtDef::Dead {
            regions: regions
                .iter()
                .map(|table| PressureTableDef {
                    rows: liquid_rows_to_si(&table.rows, u),
                })
                .collect(),
        },
        OilPvtDef::ConstantCompressibility { regions } => OilPvtDef::ConstantCompressibility {
            regions: regions.iter().map(|d| const_comp_to_si(d, u)).collect(),
        },
    }
}

fn gas_to_si(def: &GasPvtDef, u: UnitSystem) -> GasPvtDef {
    match def {
        GasPvtDef::Wet { regions } => GasPvtDef::Wet {
            regions: regions
                .iter()
                .map(|table| WetGasTableDef {
                    records: table
                        .records
                        .iter()
                        .map(|rec| WetGasRecordDef {
                            p: u.pressure(rec.p),
                            rows: rec
                                .rows
                                .iter()
                                .map(|r| WetGasRowDef {
                                    rv: u.oil_gas_ratio(r.rv),
                                    b: u.gas_fvf(r.b),
                                    mu: u.viscosity(r.mu),
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        },
        GasPvtDef::Dry { regions } => GasPvtDef::Dry {
            regions: regions
                .iter()
                .map(|table| PressureTableDef {
                    rows: table
                        .rows
                        .iter()
                        .map(|r| PvtRowDef {
                            p: u.pressure(r.p),
                            b: u.gas_fvf(r.b),
                            mu: u.viscosity(r.mu),
                        })
                        .collect(),
                })
                .collect(),
        },
    }
}

fn water_to_si(def: &WaterPvtDef, u: UnitSystem) -> WaterPvtDef {
    match def {
        WaterPvtDef::ConstantCompressibility { regions } => WaterPvtDef::ConstantCompressibility {
            regions: regions.iter().map(|d| const_comp_to_si(d, u)).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * a.abs().max(b.abs())
    }

    #[test]
    fn si_is_identity() {
        let u = UnitSystem::Si;
        assert_eq!(u.pressure(123.0), 123.0);
        assert_eq!(u.compressibility(4e-10), 4e-10);
        assert_eq!(u.temperature(300.0), 300.0);
    }

    #[test]
    fn metric_conversions() {
        let u = UnitSystem::Metric;
        assert!(close(u.pressure(250.0), 250e5, 1e-12));
        assert!(close(u.viscosity(0.5), 5e-4, 1e-12));
        assert!(close(u.compressibility(4.5e-5), 4.5e-10, 1e-12));
        assert!(close(u.temperature(100.0), 373.15, 1e-12));
    }

    #[test]
    fn field_ratios_are_reciprocal() {
        let u = UnitSystem::Field;
        // 1 Mscf/stb ~ 178.1 sm3/sm3
        assert!(close(u.gas_oil_ratio(1.0), 178.107_6, 1e-6));
        assert!(close(u.gas_oil_ratio(1.0) * u.oil_gas_ratio(1.0), 1.0, 1e-12));
        assert!(close(u.gas_fvf(1.0), 1.0 / 178.107_6, 1e-6));
    }

    #[test]
    fn document_conversion_marks_si() {
        let input = PvtInput {
            version: crate::LATEST_VERSION,
            name: "metric".to_string(),
            units: Some(UnitSystem::Metric),
            density: vec![DensityDef {
                oil: 850.0,
                water: 1020.0,
                gas: 0.85,
            }],
            reservoir_temperature: vec![80.0],
            oil: Some(OilPvtDef::Dead {
                regions: vec![PressureTableDef {
                    rows: vec![
                        PvtRowDef {
                            p: 10.0,
                            b: 1.1,
                            mu: 2.0,
                        },
                        PvtRowDef {
                            p: 100.0,
                            b: 1.05,
                            mu: 2.2,
                        },
                    ],
                }],
            }),
            gas: None,
            water: None,
        };

        let si = input.to_si();
        assert_eq!(si.unit_system(), UnitSystem::Si);
        assert!(close(si.reservoir_temperature[0], 353.15, 1e-12));
        let Some(OilPvtDef::Dead { regions }) = &si.oil else {
            panic!("oil definition lost in conversion");
        };
        assert!(close(regions[0].rows[1].p, 100e5, 1e-12));
        assert!(close(regions[0].rows[0].mu, 2e-3, 1e-12));
    }
}
