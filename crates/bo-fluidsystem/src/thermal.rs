//! Solid energy storage with a constant volumetric heat capacity.

use bo_core::{BoError, BoResult, Real, ensure_finite};
use serde::{Deserialize, Serialize};

/// Heat capacity of the rock matrix [J/(m³·K)].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantSolidHeatCapacity {
    solid_heat_capacity: Real,
}

impl ConstantSolidHeatCapacity {
    pub fn new(solid_heat_capacity: Real) -> BoResult<Self> {
        let solid_heat_capacity = ensure_finite(solid_heat_capacity, "solid heat capacity")?;
        if solid_heat_capacity < 0.0 {
            return Err(BoError::InvalidArg {
                what: "solid heat capacity must be non-negative",
            });
        }
        Ok(Self {
            solid_heat_capacity,
        })
    }

    pub fn solid_heat_capacity(&self) -> Real {
        self.solid_heat_capacity
    }

    /// Energy stored per bulk volume at `temperature` [J/m³].
    pub fn solid_internal_energy(&self, temperature: Real) -> Real {
        self.solid_heat_capacity * temperature
    }
}
