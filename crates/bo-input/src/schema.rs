//! PVT input schema definitions.
//!
//! One document describes every PVT region of a run. Each table list carries
//! exactly one entry per region; the region count is the length of `density`.

use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PvtInput {
    pub version: u32,
    pub name: String,
    /// Unit system of every number below. Absent means SI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitSystem>,
    /// Surface densities, one record per region.
    pub density: Vec<DensityDef>,
    /// Reservoir temperature: empty (surface temperature), one value for all
    /// regions, or one value per region.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reservoir_temperature: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil: Option<OilPvtDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<GasPvtDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<WaterPvtDef>,
}

impl PvtInput {
    pub fn unit_system(&self) -> UnitSystem {
        self.units.unwrap_or_default()
    }

    pub fn num_regions(&self) -> usize {
        self.density.len()
    }

    /// Reservoir temperature of `region` in the document's units, if given.
    pub fn reservoir_temperature_of(&self, region: usize) -> Option<f64> {
        match self.reservoir_temperature.len() {
            0 => None,
            1 => Some(self.reservoir_temperature[0]),
            _ => self.reservoir_temperature.get(region).copied(),
        }
    }
}

/// Surface-condition densities of one region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DensityDef {
    pub oil: f64,
    pub water: f64,
    pub gas: f64,
}

/// One `(p, B, mu)` row of a pressure-indexed table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PvtRowDef {
    pub p: f64,
    pub b: f64,
    pub mu: f64,
}

/// Pressure-indexed table without dissolution (dead oil, dry gas).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PressureTableDef {
    pub rows: Vec<PvtRowDef>,
}

/// Reference-point parameters of a constant-compressibility fluid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConstantCompressibilityDef {
    pub reference_pressure: f64,
    pub formation_volume_factor: f64,
    pub compressibility: f64,
    pub viscosity: f64,
    #[serde(default)]
    pub viscosibility: f64,
}

/// One dissolved-gas record of a live oil table.
///
/// `rows[0]` is the bubble point of `rs`; further rows are undersaturated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveOilRecordDef {
    pub rs: f64,
    pub rows: Vec<PvtRowDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveOilTableDef {
    pub records: Vec<LiveOilRecordDef>,
}

/// One `(Rv, B, mu)` row of a wet gas record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WetGasRowDef {
    pub rv: f64,
    pub b: f64,
    pub mu: f64,
}

/// One pressure record of a wet gas table.
///
/// `rows[0]` is the saturated (dew point) state at `p`; further rows carry
/// decreasing `rv`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WetGasRecordDef {
    pub p: f64,
    pub rows: Vec<WetGasRowDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WetGasTableDef {
    pub records: Vec<WetGasRecordDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OilPvtDef {
    Live { regions: Vec<LiveOilTableDef> },
    Dead { regions: Vec<PressureTableDef> },
    ConstantCompressibility { regions: Vec<ConstantCompressibilityDef> },
}

impl OilPvtDef {
    pub fn num_regions(&self) -> usize {
        match self {
            Self::Live { regions } => regions.len(),
            Self::Dead { regions } => regions.len(),
            Self::ConstantCompressibility { regions } => regions.len(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Live { .. } => "live",
            Self::Dead { .. } => "dead",
            Self::ConstantCompressibility { .. } => "constant_compressibility",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GasPvtDef {
    Wet { regions: Vec<WetGasTableDef> },
    Dry { regions: Vec<PressureTableDef> },
}

impl GasPvtDef {
    pub fn num_regions(&self) -> usize {
        match self {
            Self::Wet { regions } => regions.len(),
            Self::Dry { regions } => regions.len(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Wet { .. } => "wet",
            Self::Dry { .. } => "dry",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WaterPvtDef {
    ConstantCompressibility { regions: Vec<ConstantCompressibilityDef> },
}

impl WaterPvtDef {
    pub fn num_regions(&self) -> usize {
        match self {
            Self::ConstantCompressibility { regions } => regions.len(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConstantCompressibility { .. } => "constant_compressibility",
        }
    }
}
