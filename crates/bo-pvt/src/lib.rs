//! bo-pvt: black-oil PVT laws.
//!
//! Provides:
//! - Piecewise linear tables ([`Tabulated1D`])
//! - Oil laws: live, dead and constant-compressibility oil
//! - Gas laws: wet and dry gas
//! - Water law: constant-compressibility water
//! - One multiplexer enum per fluid ([`OilPvt`], [`GasPvt`], [`WaterPvt`])
//! - Saturated-line verification ([`verify_oil`], [`verify_gas`])
//!
//! # Architecture
//!
//! Every law implements one of [`OilPvtLaw`], [`GasPvtLaw`] or
//! [`WaterPvtLaw`]. Laws are built once from SI input tables and are
//! immutable afterwards, so a single instance is shared by every cell.
//! Construction is fallible; evaluation is not.
//!
//! # Example
//!
//! ```
//! use bo_input::{PressureTableDef, PvtRowDef};
//! use bo_pvt::{DeadOilPvt, OilPvtLaw};
//!
//! let oil = DeadOilPvt::from_tables(&[PressureTableDef {
//!     rows: vec![
//!         PvtRowDef { p: 1.0e6, b: 1.10, mu: 1.2e-3 },
//!         PvtRowDef { p: 2.0e7, b: 1.05, mu: 1.5e-3 },
//!     ],
//! }])
//! .unwrap();
//! let b = oil.inverse_formation_volume_factor(0, 350.0, 1.0e7, 0.0);
//! assert!(b > 1.0 / 1.10 && b < 1.0 / 1.05);
//! ```

mod branch;
pub mod const_comp;
pub mod consistency;
pub mod error;
pub mod gas;
pub mod law;
pub mod multiplexer;
pub mod oil;
pub mod pressure_table;
pub mod tabulated;
pub mod water;

// Re-exports for ergonomics
pub use const_comp::ConstantCompressibility;
pub use consistency::{
    ConsistencyCheck, ConsistencyError, ConsistencyReport, ConsistencyResult, verify_gas,
    verify_oil,
};
pub use error::{PvtError, PvtResult};
pub use gas::{DryGasPvt, WetGasPvt};
pub use law::{GasPvtLaw, OilPvtLaw, WaterPvtLaw};
pub use multiplexer::{GasPvt, GasPvtApproach, OilPvt, OilPvtApproach, WaterPvt, WaterPvtApproach};
pub use oil::{ConstantCompressibilityOilPvt, DeadOilPvt, LiveOilPvt};
pub use pressure_table::PressureTable;
pub use tabulated::Tabulated1D;
pub use water::ConstantCompressibilityWaterPvt;
