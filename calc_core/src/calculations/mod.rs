//! # Bearing Capacity Calculations
//!
//! Each calculation follows the pattern:
//!
//! - an input type (JSON-serializable) with `validate()`
//! - a result type (JSON-serializable)
//! - a pure function over a shared, read-only [`SoilProfile`](crate::soil::SoilProfile)
//!   and [`AnalysisConfig`](crate::project::AnalysisConfig)
//!
//! ## Available Calculations
//!
//! - [`bilayer`] - Single-layer capacity plus the two-layer check
//! - [`bearing`] - Full chain for one footing, including allowable capacity
//! - [`capacity_table`] - (Df, B, L) sweep
//! - [`compliance`] - Loaded footing schedule against allowable capacity

pub mod bearing;
pub mod bilayer;
pub mod capacity_table;
pub mod compliance;

// Re-export commonly used types
pub use bearing::{CapacityResult, FootingCase};
pub use bilayer::{BilayerCase, BilayerInput, BilayerResult};
pub use capacity_table::{generate_capacity_table, CapacityRow};
pub use compliance::{check_footings, ComplianceRow, FootingRecord};
