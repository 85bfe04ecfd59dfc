//! Per-cell black-oil fluid state.
//!
//! Slots for quantities switched off in the [`FluidStateConfig`] do not
//! exist; their accessors return fixed defaults instead. Slots that exist
//! start out undefined (NaN) until written.

use bo_core::{RegionIdx, Real, UNDEFINED, is_defined};
use serde::{Deserialize, Serialize};

use crate::error::{FluidStateError, FluidStateResult};
use crate::fluid_system::BlackOilFluidSystem;
use crate::phase::Phase;
use crate::view::FluidStateView;

/// Which optional quantities a fluid state carries. Decided once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidStateConfig {
    pub enable_temperature: bool,
    pub enable_energy: bool,
    pub enable_dissolution: bool,
}

impl Default for FluidStateConfig {
    fn default() -> Self {
        Self {
            enable_temperature: false,
            enable_energy: false,
            enable_dissolution: true,
        }
    }
}

impl FluidStateConfig {
    /// Temperature is stored whenever temperature or energy is tracked.
    pub fn stores_temperature(&self) -> bool {
        self.enable_temperature || self.enable_energy
    }
}

#[derive(Debug, Clone)]
pub struct BlackOilFluidState<'a> {
    system: &'a BlackOilFluidSystem,
    config: FluidStateConfig,
    pvt_region: RegionIdx,
    pressure: [Real; Phase::COUNT],
    saturation: [Real; Phase::COUNT],
    density: [Real; Phase::COUNT],
    inv_b: [Real; Phase::COUNT],
    temperature: Option<Real>,
    enthalpy: Option<[Real; Phase::COUNT]>,
    rs: Option<Real>,
    rv: Option<Real>,
}

impl<'a> BlackOilFluidState<'a> {
    pub fn new(system: &'a BlackOilFluidSystem, config: FluidStateConfig) -> Self {
        Self {
            system,
            config,
            pvt_region: RegionIdx::from_index_unchecked(0),
            pressure: [UNDEFINED; Phase::COUNT],
            saturation: [UNDEFINED; Phase::COUNT],
            density: [UNDEFINED; Phase::COUNT],
            inv_b: [UNDEFINED; Phase::COUNT],
            temperature: config.stores_temperature().then_some(UNDEFINED),
            enthalpy: config.enable_energy.then_some([UNDEFINED; Phase::COUNT]),
            rs: config.enable_dissolution.then_some(UNDEFINED),
            rv: config.enable_dissolution.then_some(UNDEFINED),
        }
    }

    pub fn config(&self) -> FluidStateConfig {
        self.config
    }

    pub fn fluid_system(&self) -> &'a BlackOilFluidSystem {
        self.system
    }

    #[inline]
    fn slot(&self, phase: Phase) -> usize {
        self.system.phase_indices().canonical_to_active(phase)
    }

    // ---- setters ----

    pub fn set_pvt_region_index(&mut self, region: usize) {
        debug_assert!(
            region < self.system.num_regions(),
            "PVT region {region} out of range"
        );
        self.pvt_region = RegionIdx::from_index_unchecked(region);
    }

    pub fn set_pressure(&mut self, phase: Phase, value: Real) {
        let i = self.slot(phase);
        self.pressure[i] = value;
    }

    pub fn set_saturation(&mut self, phase: Phase, value: Real) {
        let i = self.slot(phase);
        self.saturation[i] = value;
    }

    pub fn set_density(&mut self, phase: Phase, value: Real) {
        let i = self.slot(phase);
        self.density[i] = value;
    }

    pub fn set_inv_b(&mut self, phase: Phase, value: Real) {
        let i = self.slot(phase);
        self.inv_b[i] = value;
    }

    pub fn set_temperature(&mut self, value: Real) {
        debug_assert!(self.temperature.is_some(), "temperature is not enabled");
        if let Some(t) = self.temperature.as_mut() {
            *t = value;
        }
    }

    pub fn set_enthalpy(&mut self, phase: Phase, value: Real) {
        debug_assert!(self.enthalpy.is_some(), "energy is not enabled");
        let i = self.slot(phase);
        if let Some(h) = self.enthalpy.as_mut() {
            h[i] = value;
        }
    }

    pub fn set_rs(&mut self, value: Real) {
        debug_assert!(self.rs.is_some(), "dissolution is not enabled");
        if let Some(rs) = self.rs.as_mut() {
            *rs = value;
        }
    }

    pub fn set_rv(&mut self, value: Real) {
        debug_assert!(self.rv.is_some(), "dissolution is not enabled");
        if let Some(rv) = self.rv.as_mut() {
            *rv = value;
        }
    }

    // ---- accessors ----

    pub fn pvt_region_index(&self) -> usize {
        self.pvt_region.index()
    }

    pub fn pressure(&self, phase: Phase) -> Real {
        self.pressure[self.slot(phase)]
    }

    pub fn saturation(&self, phase: Phase) -> Real {
        self.saturation[self.slot(phase)]
    }

    pub fn density(&self, phase: Phase) -> Real {
        self.density[self.slot(phase)]
    }

    pub fn inv_b(&self, phase: Phase) -> Real {
        self.inv_b[self.slot(phase)]
    }

    /// Stored temperature, or the region's reservoir temperature when the
    /// state carries none. Phases share one temperature.
    pub fn temperature(&self, _phase: Phase) -> Real {
        match self.temperature {
            Some(t) => t,
            None => self.system.reservoir_temperature(self.pvt_region_index()),
        }
    }

    /// Zero when energy is not tracked.
    pub fn enthalpy(&self, phase: Phase) -> Real {
        match &self.enthalpy {
            Some(h) => h[self.slot(phase)],
            None => 0.0,
        }
    }

    /// Zero when dissolution is not tracked.
    pub fn rs(&self) -> Real {
        self.rs.unwrap_or(0.0)
    }

    /// Zero when dissolution is not tracked.
    pub fn rv(&self) -> Real {
        self.rv.unwrap_or(0.0)
    }

    // ---- derived quantities ----

    /// `h - p/rho`. Only meaningful with energy tracking enabled.
    pub fn internal_energy(&self, phase: Phase) -> Real {
        self.check_defined();
        self.enthalpy(phase) - self.pressure(phase) / self.density(phase)
    }

    /// Viscosity from the fluid system's PVT laws.
    pub fn viscosity(&self, phase: Phase) -> Real {
        self.check_defined();
        self.system.viscosity(self, phase, self.pvt_region_index())
    }

    /// Panic in debug builds if any enabled slot is still undefined.
    /// No-op in release builds.
    pub fn check_defined(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for phase in self.system.phase_indices().active_phases() {
            let i = self.slot(phase);
            debug_assert!(is_defined(self.pressure[i]), "{phase} pressure is undefined");
            debug_assert!(is_defined(self.saturation[i]), "{phase} saturation is undefined");
            debug_assert!(is_defined(self.density[i]), "{phase} density is undefined");
            debug_assert!(is_defined(self.inv_b[i]), "{phase} inverse FVF is undefined");
            if let Some(h) = &self.enthalpy {
                debug_assert!(is_defined(h[i]), "{phase} enthalpy is undefined");
            }
        }
        if let Some(t) = self.temperature {
            debug_assert!(is_defined(t), "temperature is undefined");
        }
        if let Some(rs) = self.rs {
            debug_assert!(is_defined(rs), "Rs is undefined");
        }
        if let Some(rv) = self.rv {
            debug_assert!(is_defined(rv), "Rv is undefined");
        }
    }

    /// Copy every enabled quantity from another fluid state.
    ///
    /// Rs, Rv and `b` are taken from the source when it exposes them and
    /// derived through the fluid system otherwise.
    pub fn assign<S: FluidStateView + ?Sized>(&mut self, other: &S) -> FluidStateResult<()> {
        let region = other.pvt_region().unwrap_or(0);
        self.set_pvt_region_index(region);

        let phases: Vec<Phase> = self.system.phase_indices().active_phases().collect();
        for &phase in &phases {
            self.set_pressure(phase, other.pressure(phase));
            self.set_saturation(phase, other.saturation(phase));
            self.set_density(phase, other.density(phase));
        }

        if self.temperature.is_some() {
            self.set_temperature(other.temperature(phases[0]));
        }

        if self.config.enable_dissolution {
            self.set_rs(self.system.gas_dissolution_factor_of(other, region));
            self.set_rv(self.system.oil_vaporization_factor_of(other, region));
        }

        for &phase in &phases {
            let b = other
                .inverse_fvf(phase)
                .unwrap_or_else(|| {
                    self.system
                        .inverse_formation_volume_factor(other, phase, region)
                });
            self.set_inv_b(phase, b);
        }

        if self.config.enable_energy {
            for &phase in &phases {
                let h = other
                    .phase_enthalpy(phase)
                    .ok_or(FluidStateError::MissingQuantity {
                        what: "enthalpy",
                        phase,
                    })?;
                self.set_enthalpy(phase, h);
            }
        }

        Ok(())
    }
}

impl FluidStateView for BlackOilFluidState<'_> {
    fn pressure(&self, phase: Phase) -> Real {
        BlackOilFluidState::pressure(self, phase)
    }

    fn saturation(&self, phase: Phase) -> Real {
        BlackOilFluidState::saturation(self, phase)
    }

    fn density(&self, phase: Phase) -> Real {
        BlackOilFluidState::density(self, phase)
    }

    fn temperature(&self, phase: Phase) -> Real {
        BlackOilFluidState::temperature(self, phase)
    }

    fn pvt_region(&self) -> Option<usize> {
        Some(self.pvt_region_index())
    }

    fn gas_dissolution_factor(&self) -> Option<Real> {
        self.rs
    }

    fn oil_vaporization_factor(&self) -> Option<Real> {
        self.rv
    }

    fn inverse_fvf(&self, phase: Phase) -> Option<Real> {
        let b = self.inv_b(phase);
        is_defined(b).then_some(b)
    }

    fn phase_enthalpy(&self, phase: Phase) -> Option<Real> {
        let i = self.slot(phase);
        self.enthalpy.map(|h| h[i])
    }
}
