//! # Soil Model
//!
//! Layered soil profiles and the stresses they produce at footing level.
//!
//! ## Modules
//!
//! - [`profile`] - Strata, the validated [`SoilProfile`], and depth lookups
//! - [`overburden`] - Effective overburden pressure and effective unit weight
//!
//! ## Conventions
//!
//! - Depths are measured downward from the ground surface, in meters
//! - A stratum covers `[initial_depth_m, final_depth_m)`
//! - Unit weights in kN/m³, cohesion in kPa, friction angles in degrees

pub mod overburden;
pub mod profile;

pub use overburden::{effective_overburden, Overburden};
pub use profile::{LayerParameters, SoilProfile, Stratum};

/// Unit weight of water (kN/m³)
pub const WATER_UNIT_WEIGHT_KN_M3: f64 = 9.81;
