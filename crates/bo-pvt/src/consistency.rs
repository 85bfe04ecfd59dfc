//! Saturated-line verification.
//!
//! For every region, the general (possibly undersaturated) evaluation at the
//! saturated ratio must reproduce the saturated evaluation, and the saturated
//! ratio must not decrease with pressure. Failures are reported as
//! [`ConsistencyError`] values; nothing here aborts.

use bo_core::{BoError, Real, Tolerances, linear_points, nearly_equal};
use thiserror::Error;

use crate::law::{GasPvtLaw, OilPvtLaw};

pub type ConsistencyResult<T> = Result<T, ConsistencyError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsistencyError {
    #[error(
        "{fluid} {quantity} off the saturated line in region {region} at p = {pressure} Pa: \
         saturated {saturated}, general {general}"
    )]
    Mismatch {
        fluid: &'static str,
        quantity: &'static str,
        region: usize,
        pressure: Real,
        saturated: Real,
        general: Real,
    },

    #[error(
        "{fluid} saturated {ratio} decreases in region {region} at p = {pressure} Pa: \
         {previous} -> {value}"
    )]
    Decreasing {
        fluid: &'static str,
        ratio: &'static str,
        region: usize,
        pressure: Real,
        previous: Real,
        value: Real,
    },
}

impl From<ConsistencyError> for BoError {
    fn from(err: ConsistencyError) -> Self {
        BoError::Pvt {
            what: err.to_string(),
        }
    }
}

/// Sampling parameters of a verification run.
#[derive(Debug, Clone, Copy)]
pub struct ConsistencyCheck {
    /// Pressures sampled per region.
    pub samples: usize,
    pub temperature: Real,
    /// Fixed pressure span; `None` uses each region's table span.
    pub pressure_range: Option<(Real, Real)>,
    pub tolerances: Tolerances,
}

impl Default for ConsistencyCheck {
    fn default() -> Self {
        Self {
            samples: 50,
            temperature: 273.0,
            pressure_range: None,
            tolerances: Tolerances::saturated_line(),
        }
    }
}

/// Summary of a passed verification.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyReport {
    pub fluid: &'static str,
    pub regions: usize,
    pub samples: usize,
    /// Largest `|general - saturated|` seen over every sample and quantity.
    pub max_deviation: Real,
}

/// Saturated and general evaluations of one fluid at one sample.
struct Sample {
    ratio: Real,
    b_saturated: Real,
    b_general: Real,
    mu_saturated: Real,
    mu_general: Real,
}

fn verify(
    fluid: &'static str,
    ratio_name: &'static str,
    num_regions: usize,
    range_of: impl Fn(usize) -> (Real, Real),
    sample: impl Fn(usize, Real) -> Sample,
    check: &ConsistencyCheck,
) -> ConsistencyResult<ConsistencyReport> {
    let mut max_deviation: Real = 0.0;

    for region in 0..num_regions {
        let (lo, hi) = check.pressure_range.unwrap_or_else(|| range_of(region));
        let mut previous: Option<Real> = None;

        for pressure in linear_points(lo, hi, check.samples) {
            let s = sample(region, pressure);

            if let Some(prev) = previous {
                if s.ratio < prev {
                    return Err(ConsistencyError::Decreasing {
                        fluid,
                        ratio: ratio_name,
                        region,
                        pressure,
                        previous: prev,
                        value: s.ratio,
                    });
                }
            }
            previous = Some(s.ratio);

            for (quantity, saturated, general) in [
                ("inverse formation volume factor", s.b_saturated, s.b_general),
                ("viscosity", s.mu_saturated, s.mu_general),
            ] {
                if !nearly_equal(saturated, general, check.tolerances) {
                    return Err(ConsistencyError::Mismatch {
                        fluid,
                        quantity,
                        region,
                        pressure,
                        saturated,
                        general,
                    });
                }
                max_deviation = max_deviation.max((general - saturated).abs());
            }
        }
    }

    tracing::debug!(
        fluid,
        regions = num_regions,
        samples = check.samples,
        max_deviation,
        "saturated line verified"
    );
    Ok(ConsistencyReport {
        fluid,
        regions: num_regions,
        samples: check.samples,
        max_deviation,
    })
}

/// Verify an oil law along its bubble point curve.
pub fn verify_oil<L: OilPvtLaw + ?Sized>(
    law: &L,
    check: &ConsistencyCheck,
) -> ConsistencyResult<ConsistencyReport> {
    let t = check.temperature;
    verify(
        "oil",
        "Rs",
        law.num_regions(),
        |region| law.pressure_range(region),
        |region, p| {
            let rs = law.saturated_gas_dissolution_factor(region, t, p);
            Sample {
                ratio: rs,
                b_saturated: law.saturated_inverse_formation_volume_factor(region, t, p),
                b_general: law.inverse_formation_volume_factor(region, t, p, rs),
                mu_saturated: law.saturated_viscosity(region, t, p),
                mu_general: law.viscosity(region, t, p, rs),
            }
        },
        check,
    )
}

/// Verify a gas law along its dew point curve.
pub fn verify_gas<L: GasPvtLaw + ?Sized>(
    law: &L,
    check: &ConsistencyCheck,
) -> ConsistencyResult<ConsistencyReport> {
    let t = check.temperature;
    verify(
        "gas",
        "Rv",
        law.num_regions(),
        |region| law.pressure_range(region),
        |region, p| {
            let rv = law.saturated_oil_vaporization_factor(region, t, p);
            Sample {
                ratio: rv,
                b_saturated: law.saturated_inverse_formation_volume_factor(region, t, p),
                b_general: law.inverse_formation_volume_factor(region, t, p, rv),
                mu_saturated: law.saturated_viscosity(region, t, p),
                mu_general: law.viscosity(region, t, p, rv),
            }
        },
        check,
    )
}
