//! Schema migration framework.

use crate::InputError;
use crate::schema::PvtInput;
use crate::units::UnitSystem;

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut input: PvtInput) -> Result<PvtInput, InputError> {
    while input.version < LATEST_VERSION {
        input = migrate_one_version(input)?;
    }
    Ok(input)
}

fn migrate_one_version(input: PvtInput) -> Result<PvtInput, InputError> {
    match input.version {
        1 => migrate_v1_to_v2(input),
        v => Err(InputError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 1 documents had no `units` field and were always written in metric units.
fn migrate_v1_to_v2(mut input: PvtInput) -> Result<PvtInput, InputError> {
    if input.units.is_none() {
        input.units = Some(UnitSystem::Metric);
    }
    input.version = 2;
    Ok(input)
}
