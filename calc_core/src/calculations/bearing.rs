//! # Footing Bearing Capacity
//!
//! Runs the full chain for one footing: stratum lookup, overburden,
//! single-layer capacity, two-layer check and allowable capacity.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::bearing::{calculate, FootingCase};
//! use calc_core::project::AnalysisConfig;
//! use calc_core::soil::{SoilProfile, Stratum};
//!
//! let profile = SoilProfile::new(
//!     vec![
//!         Stratum::new("E-1", "Soft clay", 0.0, 2.0, 17.0, 18.5, 50.0, 0.0),
//!         Stratum::new("E-2", "Stiff clay", 2.0, 10.0, 18.0, 19.5, 80.0, 0.0),
//!     ],
//!     1e-9,
//! )
//! .unwrap();
//!
//! let footing = FootingCase::new(1.0, 1.0, 1.0);
//! let result = calculate(&profile, &footing, &AnalysisConfig::default()).unwrap();
//!
//! println!("q_ult = {:.1} kPa", result.ultimate_capacity_kpa);
//! println!("q_adm = {:.1} kPa", result.allowable_capacity_kpa);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::project::AnalysisConfig;
use crate::soil::SoilProfile;

use super::bilayer::{self, BilayerCase, BilayerInput};

/// Footing geometry (and optional load) to evaluate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "embedment_depth_m": 1.5,
///   "width_m": 2.0,
///   "length_m": 2.5,
///   "design_load_kn": 900.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootingCase {
    /// Depth of the footing base below ground, Df (m)
    pub embedment_depth_m: f64,

    /// Footing width B (m)
    pub width_m: f64,

    /// Footing length L (m); L ≥ B by convention, not enforced here
    pub length_m: f64,

    /// Design load (kN), only used by compliance checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_load_kn: Option<f64>,
}

impl FootingCase {
    /// Create an unloaded footing case.
    pub fn new(embedment_depth_m: f64, width_m: f64, length_m: f64) -> Self {
        FootingCase {
            embedment_depth_m,
            width_m,
            length_m,
            design_load_kn: None,
        }
    }

    /// Attach a design load (kN)
    pub fn with_load(mut self, design_load_kn: f64) -> Self {
        self.design_load_kn = Some(design_load_kn);
        self
    }

    /// Validate input parameters.
    ///
    /// The embedment depth is left to the profile lookup, which reports any
    /// depth it does not cover (negative and NaN included) as
    /// `CalcError::DepthOutOfRange`.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.width_m.is_finite() && self.width_m > 0.0) {
            return Err(CalcError::invalid_geometry(
                "width_m",
                self.width_m.to_string(),
                "Width must be positive",
            ));
        }
        if !(self.length_m.is_finite() && self.length_m > 0.0) {
            return Err(CalcError::invalid_geometry(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if let Some(load) = self.design_load_kn {
            if !load.is_finite() {
                return Err(CalcError::invalid_input(
                    "design_load_kn",
                    load.to_string(),
                    "Design load must be a finite number",
                ));
            }
        }
        Ok(())
    }

    /// Aspect ratio B/L
    pub fn width_to_length_ratio(&self) -> f64 {
        self.width_m / self.length_m
    }
}

/// Results from the bearing capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "q_ult_single_layer_kpa": 387.2,
///   "q_ult_bilayer_kpa": 387.2,
///   "ultimate_capacity_kpa": 387.2,
///   "allowable_capacity_kpa": 129.1,
///   "factor_of_safety": 3.0,
///   "bilayer_case": "NoInteraction"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Single-layer ultimate capacity with embedment-stratum parameters (kPa)
    pub q_ult_single_layer_kpa: f64,

    /// Controlling two-layer ultimate capacity (kPa)
    pub q_ult_bilayer_kpa: f64,

    /// Ultimate capacity used for design, equal to the two-layer value (kPa)
    pub ultimate_capacity_kpa: f64,

    /// Allowable capacity q_ult / FS (kPa)
    pub allowable_capacity_kpa: f64,

    /// Factor of safety applied
    pub factor_of_safety: f64,

    /// Two-layer case that governed
    pub bilayer_case: BilayerCase,
}

/// Calculate ultimate and allowable bearing capacity for one footing.
///
/// # Arguments
///
/// * `profile` - Validated soil profile
/// * `footing` - Footing geometry
/// * `config` - Groundwater, load inclination, ε and design code
///
/// # Returns
///
/// * `Ok(CapacityResult)` - Calculation results
/// * `Err(CalcError)` - Invalid geometry or a depth outside the profile
pub fn calculate(
    profile: &SoilProfile,
    footing: &FootingCase,
    config: &AnalysisConfig,
) -> CalcResult<CapacityResult> {
    footing.validate()?;
    config.validate()?;

    let outcome = bilayer::evaluate(
        profile,
        &BilayerInput {
            df_m: footing.embedment_depth_m,
            width_m: footing.width_m,
            length_m: footing.length_m,
            gwl_m: config.groundwater_level_m,
            theta_deg: config.load_inclination_deg,
            epsilon: config.epsilon,
        },
    )?;

    let factor_of_safety = config.design_code().factor_of_safety();
    let ultimate_capacity_kpa = outcome.q_ult_bilayer_kpa;

    Ok(CapacityResult {
        q_ult_single_layer_kpa: outcome.q_ult_single_layer_kpa,
        q_ult_bilayer_kpa: outcome.q_ult_bilayer_kpa,
        ultimate_capacity_kpa,
        allowable_capacity_kpa: ultimate_capacity_kpa / factor_of_safety,
        factor_of_safety,
        bilayer_case: outcome.case,
    })
}
