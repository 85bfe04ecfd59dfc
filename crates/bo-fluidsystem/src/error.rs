//! Fluid system and fluid state errors.

use bo_core::BoError;
use bo_input::InputError;
use bo_pvt::{ConsistencyError, PvtError};
use thiserror::Error;

use crate::phase::Phase;

pub type FluidSystemResult<T> = Result<T, FluidSystemError>;

/// Errors raised while building a [`BlackOilFluidSystem`](crate::BlackOilFluidSystem).
#[derive(Error, Debug)]
pub enum FluidSystemError {
    #[error("No phase has a PVT law")]
    NoPhase,

    #[error("Region count mismatch for {what}: expected {expected}, got {actual}")]
    RegionCount {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Reference densities missing for region {region}")]
    MissingReferenceDensities { region: usize },

    #[error("Non-physical value for {what} in region {region}: {value}")]
    NonPhysical {
        what: &'static str,
        region: usize,
        value: f64,
    },

    #[error("PVT law error: {0}")]
    Pvt(#[from] PvtError),

    #[error("Saturated line check failed: {0}")]
    Consistency(#[from] ConsistencyError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

impl From<FluidSystemError> for BoError {
    fn from(err: FluidSystemError) -> Self {
        BoError::FluidSystem {
            what: err.to_string(),
        }
    }
}

pub type FluidStateResult<T> = Result<T, FluidStateError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidStateError {
    #[error("Source state does not provide {what} for the {phase} phase")]
    MissingQuantity { what: &'static str, phase: Phase },
}

impl From<FluidStateError> for BoError {
    fn from(err: FluidStateError) -> Self {
        BoError::FluidSystem {
            what: format!("fluid state: {err}"),
        }
    }
}
