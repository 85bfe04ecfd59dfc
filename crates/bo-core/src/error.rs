//! Workspace-wide error type.
//!
//! Every crate keeps its own error enum and converts into [`BoError`] when
//! errors cross crate boundaries.

use thiserror::Error;

pub type BoResult<T> = Result<T, BoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// The input document could not be read, migrated or validated.
    #[error("PVT input: {what}")]
    Input { what: String },

    /// A PVT law rejected its tables or failed saturated-line verification.
    #[error("PVT tables: {what}")]
    Pvt { what: String },

    /// The fluid system or a fluid state was assembled inconsistently.
    #[error("Fluid system: {what}")]
    FluidSystem { what: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_layer() {
        let err = BoError::Pvt {
            what: "oil Rs decreasing".to_string(),
        };
        assert_eq!(err.to_string(), "PVT tables: oil Rs decreasing");

        let err = BoError::IndexOob {
            what: "pvt region",
            index: 3,
            len: 2,
        };
        assert!(err.to_string().contains("index=3"));
    }
}
