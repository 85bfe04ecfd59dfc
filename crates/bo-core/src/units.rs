//! uom quantity types and constructors for the units PVT tables arrive in.
//!
//! Laws work on raw SI `f64`; these types only appear where input values
//! are converted.

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, MassDensity as UomMassDensity,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn psia(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn fahrenheit(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn centipoise(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::centipoise;
    DynVisc::new::<centipoise>(v)
}

#[inline]
pub fn lb_per_ft3(v: f64) -> Density {
    use uom::si::mass_density::pound_per_cubic_foot;
    Density::new::<pound_per_cubic_foot>(v)
}

/// Raw SI magnitudes of the quantity types above.
pub mod si {
    use super::*;

    #[inline]
    pub fn pascals(p: Pressure) -> f64 {
        p.get::<uom::si::pressure::pascal>()
    }

    #[inline]
    pub fn kelvins(t: Temperature) -> f64 {
        t.get::<uom::si::thermodynamic_temperature::kelvin>()
    }

    #[inline]
    pub fn pascal_seconds(mu: DynVisc) -> f64 {
        mu.get::<uom::si::dynamic_viscosity::pascal_second>()
    }

    #[inline]
    pub fn kg_per_cubic_meter(rho: Density) -> f64 {
        rho.get::<uom::si::mass_density::kilogram_per_cubic_meter>()
    }
}

pub mod constants {
    /// Standard-condition pressure [Pa] (1 atm).
    pub const SURFACE_PRESSURE_PA: f64 = 101_325.0;

    /// Standard-condition temperature [K] (60 °F).
    pub const SURFACE_TEMPERATURE_K: f64 = 288.705_555_555_555_6;

    /// One oil barrel [m³].
    pub const BARREL_M3: f64 = 0.158_987_294_928;

    /// One cubic foot [m³].
    pub const CUBIC_FOOT_M3: f64 = 0.028_316_846_592;
}
