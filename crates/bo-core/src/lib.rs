//! bo-core: shared foundation for the black-oil workspace.
//!
//! Contains:
//! - units (uom SI types, constructors and field/metric conversions)
//! - numeric (Real + tolerances + float helpers)
//! - region (compact PVT region index)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod region;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BoError, BoResult};
pub use numeric::*;
pub use region::RegionIdx;
pub use units::*;
