//! Oil PVT laws.

pub mod constant_compressibility;
pub mod dead;
pub mod live;

pub use constant_compressibility::ConstantCompressibilityOilPvt;
pub use dead::DeadOilPvt;
pub use live::LiveOilPvt;
