//! # calc_core - Shallow Foundation Bearing Capacity Engine
//!
//! `calc_core` is the computational heart of Subgrade: Meyerhof ultimate bearing
//! capacity for rectangular footings on a layered soil profile, a two-layer
//! check for a weaker or stronger stratum inside the failure zone, and the
//! allowable capacity under a chosen design code. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over a read-only profile and config
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No global state**: Settings travel in an explicit [`AnalysisConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::bearing::{calculate, FootingCase};
//! use calc_core::project::AnalysisConfig;
//! use calc_core::soil::{SoilProfile, Stratum};
//!
//! let profile = SoilProfile::new(
//!     vec![
//!         Stratum::new("E-1", "Medium sand", 0.0, 1.5, 17.5, 19.5, 0.0, 30.0),
//!         Stratum::new("E-2", "Soft clay", 1.5, 10.0, 16.0, 17.5, 30.0, 0.0),
//!     ],
//!     1e-9,
//! )
//! .unwrap();
//!
//! let result = calculate(&profile, &FootingCase::new(1.0, 1.5, 2.0), &AnalysisConfig::default()).unwrap();
//! assert!(result.ultimate_capacity_kpa <= result.q_ult_single_layer_kpa);
//! ```
//!
//! ## Modules
//!
//! - [`soil`] - Strata, profile lookup and effective overburden
//! - [`equations`] - Meyerhof factors and the equation registry
//! - [`calculations`] - Two-layer check, footing chain, capacity table, compliance
//! - [`design_codes`] - Factor of safety per design code
//! - [`project`] - Project container, metadata, and analysis settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves

pub mod calculations;
pub mod design_codes;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod project;
pub mod soil;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{BilayerCase, CapacityResult, CapacityRow, ComplianceRow, FootingCase, FootingRecord};
pub use design_codes::DesignCode;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{AnalysisConfig, Project, ProjectMetadata, SweepParameters};
pub use soil::{SoilProfile, Stratum};
