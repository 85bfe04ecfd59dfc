//! PVT law traits and construction-time validation helpers.
//!
//! All quantities are plain SI reals: pressure in Pa, temperature in K,
//! viscosity in Pa·s, Rs and Rv in sm³/sm³. The isothermal laws accept a
//! temperature argument for interface uniformity and ignore it.

use bo_core::Real;

/// Contract of every oil PVT law.
///
/// Implementations must be thread-safe (Send + Sync): one law instance is
/// shared by every cell of a run.
pub trait OilPvtLaw: Send + Sync {
    /// Number of PVT regions with tables in this law.
    fn num_regions(&self) -> usize;

    /// Inverse formation volume factor `b = 1/B` at `(p, Rs)`, which may be
    /// undersaturated.
    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
        rs: Real,
    ) -> Real;

    /// `b` on the saturated line at `pressure`.
    fn saturated_inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real;

    fn viscosity(&self, region: usize, temperature: Real, pressure: Real, rs: Real) -> Real;

    fn saturated_viscosity(&self, region: usize, temperature: Real, pressure: Real) -> Real;

    /// Maximum dissolved gas-oil ratio at `pressure`. Zero without dissolution.
    fn saturated_gas_dissolution_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real;

    /// Bubble point pressure of oil carrying `rs`. Zero without dissolution.
    fn saturation_pressure(&self, region: usize, temperature: Real, rs: Real) -> Real;

    /// Pressure span covered by the tables of `region`.
    fn pressure_range(&self, region: usize) -> (Real, Real);
}

/// Contract of every gas PVT law.
pub trait GasPvtLaw: Send + Sync {
    fn num_regions(&self) -> usize;

    fn inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
        rv: Real,
    ) -> Real;

    fn saturated_inverse_formation_volume_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real;

    fn viscosity(&self, region: usize, temperature: Real, pressure: Real, rv: Real) -> Real;

    fn saturated_viscosity(&self, region: usize, temperature: Real, pressure: Real) -> Real;

    /// Maximum vaporized oil-gas ratio at `pressure`. Zero for dry gas.
    fn saturated_oil_vaporization_factor(
        &self,
        region: usize,
        temperature: Real,
        pressure: Real,
    ) -> Real;

    /// Dew point pressure of gas carrying `rv`. Zero for dry gas.
    fn saturation_pressure(&self, region: usize, temperature: Real, rv: Real) -> Real;

    fn pressure_range(&self, region: usize) -> (Real, Real);
}

/// Contract of every water PVT law. Water never carries a dissolved component.
pub trait WaterPvtLaw: Send + Sync {
    fn num_regions(&self) -> usize;

    fn inverse_formation_volume_factor(&self, region: usize, temperature: Real, pressure: Real)
    -> Real;

    fn viscosity(&self, region: usize, temperature: Real, pressure: Real) -> Real;

    fn pressure_range(&self, region: usize) -> (Real, Real);
}

/// Validation helpers for law construction.
pub(crate) mod validation {
    use bo_core::Real;

    use crate::error::{PvtError, PvtResult};

    /// Ensure a value is positive and finite.
    pub fn positive(what: &'static str, value: Real) -> PvtResult<Real> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PvtError::NonPhysical { what, value });
        }
        Ok(value)
    }

    /// Ensure a value is finite (sign unrestricted).
    pub fn finite(what: &'static str, value: Real) -> PvtResult<Real> {
        if !value.is_finite() {
            return Err(PvtError::NonPhysical { what, value });
        }
        Ok(value)
    }

    /// Ensure at least one region was supplied.
    pub fn non_empty<T>(what: &'static str, regions: &[T]) -> PvtResult<()> {
        if regions.is_empty() {
            return Err(PvtError::NoRegions { what });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use crate::error::PvtError;

    #[test]
    fn positive_rejects_zero_negative_nan() {
        assert_eq!(positive("b", 1.5), Ok(1.5));
        assert!(positive("b", 0.0).is_err());
        assert!(positive("b", -1.0).is_err());
        assert!(positive("b", f64::NAN).is_err());
        assert!(positive("b", f64::INFINITY).is_err());
    }

    #[test]
    fn finite_allows_negative() {
        assert_eq!(finite("c", -2.0), Ok(-2.0));
        assert!(finite("c", f64::NAN).is_err());
    }

    #[test]
    fn empty_region_list_is_error() {
        let none: [u8; 0] = [];
        assert_eq!(
            non_empty("dead oil", &none),
            Err(PvtError::NoRegions { what: "dead oil" })
        );
        assert!(non_empty("dead oil", &[1]).is_ok());
    }
}
