//! Read access to any fluid-state-like object.

use bo_core::Real;

use crate::phase::{Component, Phase};

/// Capability trait for "a compatible fluid state".
///
/// Pressure, saturation, density and temperature are required. Everything
/// else is optional: the default methods return `None`, and consumers fall
/// back to deriving the quantity through the fluid system.
pub trait FluidStateView {
    fn pressure(&self, phase: Phase) -> Real;

    fn saturation(&self, phase: Phase) -> Real;

    fn density(&self, phase: Phase) -> Real;

    fn temperature(&self, phase: Phase) -> Real;

    fn pvt_region(&self) -> Option<usize> {
        None
    }

    /// Dissolved gas-oil ratio, if the source tracks it.
    fn gas_dissolution_factor(&self) -> Option<Real> {
        None
    }

    /// Vaporized oil-gas ratio, if the source tracks it.
    fn oil_vaporization_factor(&self) -> Option<Real> {
        None
    }

    fn inverse_fvf(&self, _phase: Phase) -> Option<Real> {
        None
    }

    fn phase_enthalpy(&self, _phase: Phase) -> Option<Real> {
        None
    }

    /// Mass fraction of `component` in `phase`.
    fn mass_fraction(&self, _phase: Phase, _component: Component) -> Option<Real> {
        None
    }
}
