//! The black-oil fluid system: PVT laws, reference densities and phase map.

use bo_core::Real;
use bo_core::units::constants::{SURFACE_PRESSURE_PA, SURFACE_TEMPERATURE_K};
use bo_input::PvtInput;
use bo_pvt::{
    ConsistencyCheck, GasPvt, GasPvtLaw, OilPvt, OilPvtLaw, WaterPvt, WaterPvtLaw, verify_gas,
    verify_oil,
};
use rayon::prelude::*;

use crate::error::{FluidSystemError, FluidSystemResult};
use crate::fluid_state::BlackOilFluidState;
use crate::phase::{ActivePhases, Component, Phase, PhaseIndices};
use crate::view::FluidStateView;

/// Surface-condition densities of one region [kg/m³].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceDensities {
    pub oil: Real,
    pub water: Real,
    pub gas: Real,
}

impl ReferenceDensities {
    pub fn of(&self, phase: Phase) -> Real {
        match phase {
            Phase::Water => self.water,
            Phase::Oil => self.oil,
            Phase::Gas => self.gas,
        }
    }
}

/// Immutable set of PVT laws shared by every fluid state of a run.
///
/// Queries on a phase without a PVT law are programming errors and panic.
#[derive(Debug, Clone)]
pub struct BlackOilFluidSystem {
    oil: Option<OilPvt>,
    gas: Option<GasPvt>,
    water: Option<WaterPvt>,
    phase_indices: PhaseIndices,
    reference_densities: Vec<ReferenceDensities>,
    reservoir_temperature: Vec<Real>,
}

impl BlackOilFluidSystem {
    pub const SURFACE_PRESSURE: Real = SURFACE_PRESSURE_PA;
    pub const SURFACE_TEMPERATURE: Real = SURFACE_TEMPERATURE_K;

    pub fn builder() -> FluidSystemBuilder {
        FluidSystemBuilder::new()
    }

    // ---- metadata ----

    pub fn phase_is_active(&self, phase: Phase) -> bool {
        self.phase_indices.is_active(phase)
    }

    pub fn num_active_phases(&self) -> usize {
        self.phase_indices.num_active()
    }

    pub fn phase_indices(&self) -> &PhaseIndices {
        &self.phase_indices
    }

    pub fn phase_name(phase: Phase) -> &'static str {
        phase.name()
    }

    pub fn num_regions(&self) -> usize {
        self.reference_densities.len()
    }

    pub fn reference_density(&self, phase: Phase, region: usize) -> Real {
        self.reference_densities[region].of(phase)
    }

    pub fn reservoir_temperature(&self, region: usize) -> Real {
        self.reservoir_temperature[region]
    }

    /// Gas dissolves in oil: live oil with an active gas phase.
    pub fn enable_dissolved_gas(&self) -> bool {
        self.phase_is_active(Phase::Gas) && self.oil.as_ref().is_some_and(OilPvt::has_dissolution)
    }

    /// Oil vaporizes into gas: wet gas with an active oil phase.
    pub fn enable_vaporized_oil(&self) -> bool {
        self.phase_is_active(Phase::Oil) && self.gas.as_ref().is_some_and(GasPvt::has_vaporization)
    }

    pub fn oil_pvt(&self) -> Option<&OilPvt> {
        self.oil.as_ref()
    }

    pub fn gas_pvt(&self) -> Option<&GasPvt> {
        self.gas.as_ref()
    }

    pub fn water_pvt(&self) -> Option<&WaterPvt> {
        self.water.as_ref()
    }

    fn oil(&self) -> &OilPvt {
        self.oil.as_ref().expect("oil phase is not active")
    }

    fn gas(&self) -> &GasPvt {
        self.gas.as_ref().expect("gas phase is not active")
    }

    fn water(&self) -> &WaterPvt {
        self.water.as_ref().expect("water phase is not active")
    }

    // ---- composition conversions ----

    /// Mass fraction of gas in the oil phase to dissolved gas-oil ratio.
    pub fn convert_xog_to_rs(&self, xog: Real, region: usize) -> Real {
        let d = &self.reference_densities[region];
        xog / (1.0 - xog) * d.oil / d.gas
    }

    pub fn convert_rs_to_xog(&self, rs: Real, region: usize) -> Real {
        let d = &self.reference_densities[region];
        let gas = rs * d.gas;
        gas / (d.oil + gas)
    }

    /// Mass fraction of oil in the gas phase to vaporized oil-gas ratio.
    pub fn convert_xgo_to_rv(&self, xgo: Real, region: usize) -> Real {
        let d = &self.reference_densities[region];
        xgo / (1.0 - xgo) * d.gas / d.oil
    }

    pub fn convert_rv_to_xgo(&self, rv: Real, region: usize) -> Real {
        let d = &self.reference_densities[region];
        let oil = rv * d.oil;
        oil / (d.gas + oil)
    }

    /// Rs of a view: its own value, else derived from its mass fractions, else zero.
    pub fn gas_dissolution_factor_of<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        region: usize,
    ) -> Real {
        state
            .gas_dissolution_factor()
            .or_else(|| {
                state
                    .mass_fraction(Phase::Oil, Component::Gas)
                    .map(|x| self.convert_xog_to_rs(x, region))
            })
            .unwrap_or(0.0)
    }

    /// Rv of a view: its own value, else derived from its mass fractions, else zero.
    pub fn oil_vaporization_factor_of<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        region: usize,
    ) -> Real {
        state
            .oil_vaporization_factor()
            .or_else(|| {
                state
                    .mass_fraction(Phase::Gas, Component::Oil)
                    .map(|x| self.convert_xgo_to_rv(x, region))
            })
            .unwrap_or(0.0)
    }

    // ---- property queries ----

    pub fn inverse_formation_volume_factor<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        phase: Phase,
        region: usize,
    ) -> Real {
        let p = state.pressure(phase);
        let t = state.temperature(phase);
        match phase {
            Phase::Oil => {
                let rs = self.gas_dissolution_factor_of(state, region);
                self.oil().inverse_formation_volume_factor(region, t, p, rs)
            }
            Phase::Gas => {
                let rv = self.oil_vaporization_factor_of(state, region);
                self.gas().inverse_formation_volume_factor(region, t, p, rv)
            }
            Phase::Water => self.water().inverse_formation_volume_factor(region, t, p),
        }
    }

    pub fn saturated_inverse_formation_volume_factor<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        phase: Phase,
        region: usize,
    ) -> Real {
        let p = state.pressure(phase);
        let t = state.temperature(phase);
        match phase {
            Phase::Oil => self.oil().saturated_inverse_formation_volume_factor(region, t, p),
            Phase::Gas => self.gas().saturated_inverse_formation_volume_factor(region, t, p),
            Phase::Water => self.water().inverse_formation_volume_factor(region, t, p),
        }
    }

    pub fn viscosity<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        phase: Phase,
        region: usize,
    ) -> Real {
        let p = state.pressure(phase);
        let t = state.temperature(phase);
        match phase {
            Phase::Oil => {
                let rs = self.gas_dissolution_factor_of(state, region);
                self.oil().viscosity(region, t, p, rs)
            }
            Phase::Gas => {
                let rv = self.oil_vaporization_factor_of(state, region);
                self.gas().viscosity(region, t, p, rv)
            }
            Phase::Water => self.water().viscosity(region, t, p),
        }
    }

    /// Reservoir density [kg/m³]: surface densities carried by `b`, plus the
    /// dissolved or vaporized component when that mechanism is enabled.
    ///
    /// Uses the view's own `b` if it has one.
    pub fn density<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        phase: Phase,
        region: usize,
    ) -> Real {
        let b = state
            .inverse_fvf(phase)
            .unwrap_or_else(|| self.inverse_formation_volume_factor(state, phase, region));
        let d = &self.reference_densities[region];
        match phase {
            Phase::Water => b * d.water,
            Phase::Gas => {
                if self.enable_vaporized_oil() {
                    b * (d.gas + self.oil_vaporization_factor_of(state, region) * d.oil)
                } else {
                    b * d.gas
                }
            }
            Phase::Oil => {
                if self.enable_dissolved_gas() {
                    b * (d.oil + self.gas_dissolution_factor_of(state, region) * d.gas)
                } else {
                    b * d.oil
                }
            }
        }
    }

    /// Rs_sat for oil, Rv_sat for gas, zero for water.
    pub fn saturated_dissolution_factor<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        phase: Phase,
        region: usize,
    ) -> Real {
        let p = state.pressure(phase);
        let t = state.temperature(phase);
        match phase {
            Phase::Oil => self.oil().saturated_gas_dissolution_factor(region, t, p),
            Phase::Gas => self.gas().saturated_oil_vaporization_factor(region, t, p),
            Phase::Water => 0.0,
        }
    }

    /// Bubble point for oil, dew point for gas, zero for water.
    pub fn saturation_pressure<S: FluidStateView + ?Sized>(
        &self,
        state: &S,
        phase: Phase,
        region: usize,
    ) -> Real {
        let t = state.temperature(phase);
        match phase {
            Phase::Oil => {
                let rs = self.gas_dissolution_factor_of(state, region);
                self.oil().saturation_pressure(region, t, rs)
            }
            Phase::Gas => {
                let rv = self.oil_vaporization_factor_of(state, region);
                self.gas().saturation_pressure(region, t, rv)
            }
            Phase::Water => 0.0,
        }
    }

    // ---- state updates ----

    /// Fill `inv_b` and density of every active phase from the state's
    /// pressure, temperature and Rs/Rv.
    pub fn update_state(&self, state: &mut BlackOilFluidState<'_>) {
        let region = state.pvt_region_index();
        for phase in self.phase_indices.active_phases() {
            let b = self.inverse_formation_volume_factor(&*state, phase, region);
            state.set_inv_b(phase, b);
            let rho = self.density(&*state, phase, region);
            state.set_density(phase, rho);
        }
    }

    /// [`update_state`](Self::update_state) over many cells in parallel.
    pub fn update_states(&self, states: &mut [BlackOilFluidState<'_>]) {
        states
            .par_iter_mut()
            .for_each(|state| self.update_state(state));
    }
}

/// Builder for [`BlackOilFluidSystem`].
///
/// Active phases follow from the PVT laws supplied; the region count from
/// the reference densities.
#[derive(Debug, Clone)]
pub struct FluidSystemBuilder {
    oil: Option<OilPvt>,
    gas: Option<GasPvt>,
    water: Option<WaterPvt>,
    reference_densities: Vec<Option<ReferenceDensities>>,
    reservoir_temperature: Vec<Option<Real>>,
    check: Option<ConsistencyCheck>,
}

impl Default for FluidSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidSystemBuilder {
    pub fn new() -> Self {
        Self {
            oil: None,
            gas: None,
            water: None,
            reference_densities: Vec::new(),
            reservoir_temperature: Vec::new(),
            check: Some(ConsistencyCheck::default()),
        }
    }

    pub fn with_oil(mut self, oil: OilPvt) -> Self {
        self.oil = Some(oil);
        self
    }

    pub fn with_gas(mut self, gas: GasPvt) -> Self {
        self.gas = Some(gas);
        self
    }

    pub fn with_water(mut self, water: WaterPvt) -> Self {
        self.water = Some(water);
        self
    }

    /// Surface densities of `region` [kg/m³].
    pub fn with_reference_densities(
        mut self,
        region: usize,
        oil: Real,
        water: Real,
        gas: Real,
    ) -> Self {
        if self.reference_densities.len() <= region {
            self.reference_densities.resize(region + 1, None);
        }
        self.reference_densities[region] = Some(ReferenceDensities { oil, water, gas });
        self
    }

    /// Reservoir temperature of `region` [K]. Regions left unset use the
    /// surface temperature.
    pub fn with_reservoir_temperature(mut self, region: usize, temperature: Real) -> Self {
        if self.reservoir_temperature.len() <= region {
            self.reservoir_temperature.resize(region + 1, None);
        }
        self.reservoir_temperature[region] = Some(temperature);
        self
    }

    /// Replace the saturated-line check run by [`build`](Self::build).
    pub fn with_consistency_check(mut self, check: ConsistencyCheck) -> Self {
        self.check = Some(check);
        self
    }

    pub fn without_consistency_check(mut self) -> Self {
        self.check = None;
        self
    }

    /// Populate a builder from an input document in any unit system.
    pub fn from_input(input: &PvtInput) -> FluidSystemResult<Self> {
        bo_input::validate_input(input).map_err(bo_input::InputError::from)?;
        let si = input.to_si();

        let mut builder = Self::new();
        if let Some(def) = &si.oil {
            builder = builder.with_oil(OilPvt::from_input(def)?);
        }
        if let Some(def) = &si.gas {
            builder = builder.with_gas(GasPvt::from_input(def)?);
        }
        if let Some(def) = &si.water {
            builder = builder.with_water(WaterPvt::from_input(def)?);
        }
        for (region, d) in si.density.iter().enumerate() {
            builder = builder.with_reference_densities(region, d.oil, d.water, d.gas);
            if let Some(t) = si.reservoir_temperature_of(region) {
                builder = builder.with_reservoir_temperature(region, t);
            }
        }
        tracing::debug!(name = %si.name, regions = si.num_regions(), "fluid system input loaded");
        Ok(builder)
    }

    pub fn build(self) -> FluidSystemResult<BlackOilFluidSystem> {
        let active = ActivePhases {
            water: self.water.is_some(),
            oil: self.oil.is_some(),
            gas: self.gas.is_some(),
        };
        let phase_indices = PhaseIndices::new(active).map_err(|_| FluidSystemError::NoPhase)?;

        let num_regions = self.reference_densities.len();
        if num_regions == 0 {
            return Err(FluidSystemError::MissingReferenceDensities { region: 0 });
        }
        let mut reference_densities = Vec::with_capacity(num_regions);
        for (region, d) in self.reference_densities.into_iter().enumerate() {
            let d = d.ok_or(FluidSystemError::MissingReferenceDensities { region })?;
            for (what, value) in [
                ("oil density", d.oil),
                ("water density", d.water),
                ("gas density", d.gas),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(FluidSystemError::NonPhysical { what, region, value });
                }
            }
            reference_densities.push(d);
        }

        if self.reservoir_temperature.len() > num_regions {
            return Err(FluidSystemError::RegionCount {
                what: "reservoir temperature",
                expected: num_regions,
                actual: self.reservoir_temperature.len(),
            });
        }
        let mut reservoir_temperature = vec![SURFACE_TEMPERATURE_K; num_regions];
        for (region, t) in self.reservoir_temperature.into_iter().enumerate() {
            if let Some(t) = t {
                if !t.is_finite() || t <= 0.0 {
                    return Err(FluidSystemError::NonPhysical {
                        what: "reservoir temperature",
                        region,
                        value: t,
                    });
                }
                reservoir_temperature[region] = t;
            }
        }

        let counts = [
            ("oil PVT", self.oil.as_ref().map(|l| l.num_regions())),
            ("gas PVT", self.gas.as_ref().map(|l| l.num_regions())),
            ("water PVT", self.water.as_ref().map(|l| l.num_regions())),
        ];
        for (what, actual) in counts {
            if let Some(actual) = actual {
                if actual != num_regions {
                    return Err(FluidSystemError::RegionCount {
                        what,
                        expected: num_regions,
                        actual,
                    });
                }
            }
        }

        if let Some(check) = &self.check {
            if let Some(oil) = &self.oil {
                let report = verify_oil(oil, check)?;
                tracing::info!(max_deviation = report.max_deviation, "oil saturated line verified");
            }
            if let Some(gas) = &self.gas {
                let report = verify_gas(gas, check)?;
                tracing::info!(max_deviation = report.max_deviation, "gas saturated line verified");
            }
        }

        tracing::info!(
            phases = phase_indices.num_active(),
            regions = num_regions,
            "black-oil fluid system built"
        );

        Ok(BlackOilFluidSystem {
            oil: self.oil,
            gas: self.gas,
            water: self.water,
            phase_indices,
            reference_densities,
            reservoir_temperature,
        })
    }
}
