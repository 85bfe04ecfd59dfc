//! PVT law errors.

use bo_core::BoError;
use thiserror::Error;

/// Result type for PVT law construction.
pub type PvtResult<T> = Result<T, PvtError>;

/// Errors raised while building PVT laws from tables.
///
/// Evaluation itself never fails: once a law exists every query is a bounded
/// interpolation or closed-form expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PvtError {
    /// Table shape is unusable (too short, mismatched lengths).
    #[error("Invalid table for {what}: {reason}")]
    InvalidTable { what: &'static str, reason: String },

    /// Abscissa values are not strictly increasing.
    #[error("Table for {what} is not strictly increasing at entry {index}")]
    NonMonotonic { what: &'static str, index: usize },

    /// Non-physical parameter (non-positive FVF or viscosity, non-finite values).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// No regions were supplied.
    #[error("No PVT regions supplied for {what}")]
    NoRegions { what: &'static str },
}

impl From<PvtError> for BoError {
    fn from(err: PvtError) -> Self {
        BoError::Pvt {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PvtError::NonMonotonic {
            what: "dead oil pressure",
            index: 3,
        };
        assert!(err.to_string().contains("dead oil pressure"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn error_to_bo_error() {
        let err: BoError = PvtError::NoRegions { what: "wet gas" }.into();
        assert!(matches!(err, BoError::Pvt { .. }));
        assert!(err.to_string().contains("wet gas"));
    }
}
