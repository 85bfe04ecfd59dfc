//! bo-input: PVT table input format, unit conversion and validation.
//!
//! The tables consumed by the PVT laws arrive here as a versioned YAML or
//! JSON document. Loading migrates old versions and validates the result;
//! saving validates first.

pub mod migrate;
pub mod schema;
pub mod units;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use units::UnitSystem;
pub use validate::{ValidationError, validate_input};

pub type InputResult<T> = Result<T, InputError>;

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<InputError> for bo_core::BoError {
    fn from(err: InputError) -> Self {
        bo_core::BoError::Input {
            what: err.to_string(),
        }
    }
}

pub fn from_yaml_str(content: &str) -> InputResult<PvtInput> {
    let mut input: PvtInput = serde_yaml::from_str(content)?;
    input = migrate_to_latest(input)?;
    validate_input(&input)?;
    Ok(input)
}

pub fn load_yaml(path: &std::path::Path) -> InputResult<PvtInput> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &std::path::Path, input: &PvtInput) -> InputResult<()> {
    validate_input(input)?;
    let content = serde_yaml::to_string(input)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> InputResult<PvtInput> {
    let content = std::fs::read_to_string(path)?;
    let mut input: PvtInput = serde_json::from_str(&content)?;
    input = migrate_to_latest(input)?;
    validate_input(&input)?;
    Ok(input)
}

pub fn save_json(path: &std::path::Path, input: &PvtInput) -> InputResult<()> {
    validate_input(input)?;
    let content = serde_json::to_string_pretty(input)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by file extension: `.json` is JSON, anything else YAML.
pub fn load(path: &std::path::Path) -> InputResult<PvtInput> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
