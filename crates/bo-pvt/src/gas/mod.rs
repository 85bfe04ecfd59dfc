//! Gas PVT laws.

pub mod dry;
pub mod wet;

pub use dry::DryGasPvt;
pub use wet::WetGasPvt;
