//! bo-fluidsystem: black-oil fluid states and the fluid system behind them.
//!
//! Provides:
//! - Phase index map between canonical and active phases
//! - [`BlackOilFluidState`], the per-cell value object
//! - [`FluidStateView`], read access to any compatible fluid state
//! - [`BlackOilFluidSystem`], the region-aware PVT front end
//! - Constant solid heat capacity
//!
//! # Example
//!
//! ```no_run
//! use bo_fluidsystem::{BlackOilFluidState, FluidStateConfig, FluidSystemBuilder, Phase};
//!
//! let input = bo_input::load_yaml("data/spe1.yaml".as_ref()).unwrap();
//! let fs = FluidSystemBuilder::from_input(&input).unwrap().build().unwrap();
//!
//! let mut state = BlackOilFluidState::new(&fs, FluidStateConfig::default());
//! for phase in fs.phase_indices().active_phases() {
//!     state.set_pressure(phase, 2.0e7);
//! }
//! state.set_rs(50.0);
//! state.set_rv(0.0);
//! fs.update_state(&mut state);
//! println!("oil density: {} kg/m³", state.density(Phase::Oil));
//! ```

pub mod error;
pub mod fluid_state;
pub mod fluid_system;
pub mod phase;
pub mod thermal;
pub mod view;

pub use error::{FluidStateError, FluidStateResult, FluidSystemError, FluidSystemResult};
pub use fluid_state::{BlackOilFluidState, FluidStateConfig};
pub use fluid_system::{BlackOilFluidSystem, FluidSystemBuilder, ReferenceDensities};
pub use phase::{ActivePhases, Component, Phase, PhaseIndices};
pub use thermal::ConstantSolidHeatCapacity;
pub use view::FluidStateView;
