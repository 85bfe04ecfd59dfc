//! PVT input validation logic.
//!
//! Validation runs on the SI form of the document so that physical bounds
//! (positive pressures, positive temperatures) are unit independent.

use bo_core::numeric::{is_non_decreasing, is_strictly_increasing};

use crate::schema::{
    ConstantCompressibilityDef, GasPvtDef, LiveOilTableDef, OilPvtDef, PressureTableDef,
    PvtInput, PvtRowDef, WaterPvtDef, WetGasTableDef,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Region count mismatch for {what}: expected {expected}, found {actual}")]
    RegionCount {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Table {field} of region {region} has too few entries ({found}, need {required})")]
    TooShort {
        field: String,
        region: usize,
        found: usize,
        required: usize,
    },

    #[error("Table {field} of region {region} is not monotonic ({reason})")]
    NonMonotonic {
        field: String,
        region: usize,
        reason: String,
    },

    #[error("No fluid phase defined")]
    NoPhase,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

impl From<ValidationError> for bo_core::BoError {
    fn from(err: ValidationError) -> Self {
        bo_core::BoError::Input {
            what: err.to_string(),
        }
    }
}

pub fn validate_input(input: &PvtInput) -> Result<(), ValidationError> {
    if input.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: input.version,
        });
    }

    let si = input.to_si();
    let num_regions = si.num_regions();
    if num_regions == 0 {
        return Err(ValidationError::TooShort {
            field: "density".to_string(),
            region: 0,
            found: 0,
            required: 1,
        });
    }
    if num_regions > bo_core::RegionIdx::MAX_REGIONS {
        return Err(invalid(
            "density",
            num_regions,
            "more regions than the compact region index supports",
        ));
    }

    for (region, d) in si.density.iter().enumerate() {
        positive(&format!("density[{region}].oil"), d.oil)?;
        positive(&format!("density[{region}].water"), d.water)?;
        positive(&format!("density[{region}].gas"), d.gas)?;
    }

    match si.reservoir_temperature.len() {
        0 | 1 => {}
        n if n == num_regions => {}
        n => {
            return Err(ValidationError::RegionCount {
                what: "reservoir_temperature".to_string(),
                expected: num_regions,
                actual: n,
            });
        }
    }
    for (i, &t) in si.reservoir_temperature.iter().enumerate() {
        positive(&format!("reservoir_temperature[{i}]"), t)?;
    }

    if si.oil.is_none() && si.gas.is_none() && si.water.is_none() {
        return Err(ValidationError::NoPhase);
    }

    if let Some(oil) = &si.oil {
        check_region_count("oil", oil.num_regions(), num_regions)?;
        validate_oil(oil)?;
    }
    if let Some(gas) = &si.gas {
        check_region_count("gas", gas.num_regions(), num_regions)?;
        validate_gas(gas)?;
    }
    if let Some(water) = &si.water {
        check_region_count("water", water.num_regions(), num_regions)?;
        validate_water(water)?;
    }

    Ok(())
}

fn validate_oil(oil: &OilPvtDef) -> Result<(), ValidationError> {
    match oil {
        OilPvtDef::Live { regions } => {
            for (region, table) in regions.iter().enumerate() {
                validate_live_oil(region, table)?;
            }
        }
        OilPvtDef::Dead { regions } => {
            for (region, table) in regions.iter().enumerate() {
                validate_pressure_table("oil", region, table)?;
            }
        }
        OilPvtDef::ConstantCompressibility { regions } => {
            for (region, def) in regions.iter().enumerate() {
                validate_const_comp("oil", region, def)?;
            }
        }
    }
    Ok(())
}

fn validate_gas(gas: &GasPvtDef) -> Result<(), ValidationError> {
    match gas {
        GasPvtDef::Wet { regions } => {
            for (region, table) in regions.iter().enumerate() {
                validate_wet_gas(region, table)?;
            }
        }
        GasPvtDef::Dry { regions } => {
            for (region, table) in regions.iter().enumerate() {
                validate_pressure_table("gas", region, table)?;
            }
        }
    }
    Ok(())
}

fn validate_water(water: &WaterPvtDef) -> Result<(), ValidationError> {
    match water {
        WaterPvtDef::ConstantCompressibility { regions } => {
            for (region, def) in regions.iter().enumerate() {
                validate_const_comp("water", region, def)?;
            }
        }
    }
    Ok(())
}

fn validate_live_oil(region: usize, table: &LiveOilTableDef) -> Result<(), ValidationError> {
    let field = "oil.records";
    if table.records.len() < 2 {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            region,
            found: table.records.len(),
            required: 2,
        });
    }

    for (i, rec) in table.records.iter().enumerate() {
        non_negative(&format!("oil[{region}].records[{i}].rs"), rec.rs)?;
        if rec.rows.is_empty() {
            return Err(ValidationError::TooShort {
                field: format!("oil.records[{i}].rows"),
                region,
                found: 0,
                required: 1,
            });
        }
        validate_rows(&format!("oil[{region}].records[{i}]"), &rec.rows)?;
        let pressures: Vec<f64> = rec.rows.iter().map(|r| r.p).collect();
        if !is_strictly_increasing(&pressures) {
            return Err(ValidationError::NonMonotonic {
                field: format!("oil.records[{i}].rows.p"),
                region,
                reason: "pressures must strictly increase".to_string(),
            });
        }
    }

    let rs: Vec<f64> = table.records.iter().map(|r| r.rs).collect();
    if !is_strictly_increasing(&rs) {
        return Err(ValidationError::NonMonotonic {
            field: "oil.records.rs".to_string(),
            region,
            reason: "dissolved gas-oil ratio must strictly increase".to_string(),
        });
    }
    let bubble: Vec<f64> = table.records.iter().map(|r| r.rows[0].p).collect();
    if !is_strictly_increasing(&bubble) {
        return Err(ValidationError::NonMonotonic {
            field: "oil.records.rows[0].p".to_string(),
            region,
            reason: "bubble point pressure must strictly increase with rs".to_string(),
        });
    }

    if table.records.iter().all(|r| r.rows.len() < 2) {
        return Err(ValidationError::TooShort {
            field: "oil.records.rows (undersaturated)".to_string(),
            region,
            found: 1,
            required: 2,
        });
    }
    Ok(())
}

fn validate_wet_gas(region: usize, table: &WetGasTableDef) -> Result<(), ValidationError> {
    let field = "gas.records";
    if table.records.len() < 2 {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            region,
            found: table.records.len(),
            required: 2,
        });
    }

    for (i, rec) in table.records.iter().enumerate() {
        positive(&format!("gas[{region}].records[{i}].p"), rec.p)?;
        if rec.rows.is_empty() {
            return Err(ValidationError::TooShort {
                field: format!("gas.records[{i}].rows"),
                region,
                found: 0,
                required: 1,
            });
        }
        for (j, row) in rec.rows.iter().enumerate() {
            let ctx = format!("gas[{region}].records[{i}].rows[{j}]");
            non_negative(&format!("{ctx}.rv"), row.rv)?;
            positive(&format!("{ctx}.b"), row.b)?;
            positive(&format!("{ctx}.mu"), row.mu)?;
        }
        // Undersaturated rows run from the dew point towards dry gas.
        let mut rv: Vec<f64> = rec.rows.iter().map(|r| r.rv).collect();
        rv.reverse();
        if !is_strictly_increasing(&rv) {
            return Err(ValidationError::NonMonotonic {
                field: format!("gas.records[{i}].rows.rv"),
                region,
                reason: "vaporized oil-gas ratio must strictly decrease within a record"
                    .to_string(),
            });
        }
    }

    let pressures: Vec<f64> = table.records.iter().map(|r| r.p).collect();
    if !is_strictly_increasing(&pressures) {
        return Err(ValidationError::NonMonotonic {
            field: "gas.records.p".to_string(),
            region,
            reason: "pressures must strictly increase".to_string(),
        });
    }
    let rv_sat: Vec<f64> = table.records.iter().map(|r| r.rows[0].rv).collect();
    if !is_non_decreasing(&rv_sat) {
        return Err(ValidationError::NonMonotonic {
            field: "gas.records.rows[0].rv".to_string(),
            region,
            reason: "saturated vaporized oil-gas ratio must not decrease with pressure"
                .to_string(),
        });
    }

    if table.records.iter().all(|r| r.rows.len() < 2) {
        return Err(ValidationError::TooShort {
            field: "gas.records.rows (undersaturated)".to_string(),
            region,
            found: 1,
            required: 2,
        });
    }
    Ok(())
}

fn validate_pressure_table(
    phase: &str,
    region: usize,
    table: &PressureTableDef,
) -> Result<(), ValidationError> {
    if table.rows.len() < 2 {
        return Err(ValidationError::TooShort {
            field: format!("{phase}.rows"),
            region,
            found: table.rows.len(),
            required: 2,
        });
    }
    validate_rows(&format!("{phase}[{region}]"), &table.rows)?;
    let pressures: Vec<f64> = table.rows.iter().map(|r| r.p).collect();
    if !is_strictly_increasing(&pressures) {
        return Err(ValidationError::NonMonotonic {
            field: format!("{phase}.rows.p"),
            region,
            reason: "pressures must strictly increase".to_string(),
        });
    }
    Ok(())
}

fn validate_rows(ctx: &str, rows: &[PvtRowDef]) -> Result<(), ValidationError> {
    for (j, row) in rows.iter().enumerate() {
        positive(&format!("{ctx}.rows[{j}].p"), row.p)?;
        positive(&format!("{ctx}.rows[{j}].b"), row.b)?;
        positive(&format!("{ctx}.rows[{j}].mu"), row.mu)?;
    }
    Ok(())
}

fn validate_const_comp(
    phase: &str,
    region: usize,
    def: &ConstantCompressibilityDef,
) -> Result<(), ValidationError> {
    let ctx = format!("{phase}[{region}]");
    finite(&format!("{ctx}.reference_pressure"), def.reference_pressure)?;
    positive(
        &format!("{ctx}.formation_volume_factor"),
        def.formation_volume_factor,
    )?;
    finite(&format!("{ctx}.compressibility"), def.compressibility)?;
    positive(&format!("{ctx}.viscosity"), def.viscosity)?;
    finite(&format!("{ctx}.viscosibility"), def.viscosibility)?;
    Ok(())
}

fn check_region_count(what: &str, actual: usize, expected: usize) -> Result<(), ValidationError> {
    if actual != expected {
        return Err(ValidationError::RegionCount {
            what: what.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, v: f64) -> Result<(), ValidationError> {
    if !v.is_finite() {
        return Err(invalid(field, v, "must be finite"));
    }
    Ok(())
}

fn positive(field: &str, v: f64) -> Result<(), ValidationError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(invalid(field, v, "must be positive and finite"));
    }
    Ok(())
}

fn non_negative(field: &str, v: f64) -> Result<(), ValidationError> {
    if !v.is_finite() || v < 0.0 {
        return Err(invalid(field, v, "must be non-negative and finite"));
    }
    Ok(())
}
