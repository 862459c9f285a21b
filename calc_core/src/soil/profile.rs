//! # Soil Profile
//!
//! A [`SoilProfile`] is an ordered, depth-contiguous stack of [`Stratum`]
//! records. Ordering and contiguity are checked once when the profile is built,
//! so lookups can rely on them without re-deriving anything.
//!
//! ## Zero-strength guard
//!
//! Cohesion and friction angle are each raised by a small `epsilon` when the
//! profile is built. A "cohesionless" sand keeps `c = ε` and a "frictionless"
//! clay keeps `φ = ε`, which keeps `tan φ` and `c1` out of denominators as
//! exact zeros.
//!
//! ## Example
//!
//! ```rust
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
//! assert_eq!(profile.locate(1.0).unwrap().id, "E-1");
//! assert_eq!(profile.locate(2.0).unwrap().id, "E-2");
//! assert!(profile.locate(10.0).is_err());
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

use super::WATER_UNIT_WEIGHT_KN_M3;

/// A depth-bounded soil layer with uniform strength and weight parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "E-1",
///   "description": "Silty clay, medium stiff",
///   "initial_depth_m": 0.0,
///   "final_depth_m": 2.0,
///   "moist_unit_weight_kn_m3": 17.0,
///   "saturated_unit_weight_kn_m3": 18.5,
///   "cohesion_kpa": 50.0,
///   "friction_angle_deg": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stratum {
    /// Stratum identifier, unique within a profile
    pub id: String,

    /// Free-text soil description
    pub description: String,

    /// Top of the stratum (m below ground)
    pub initial_depth_m: f64,

    /// Bottom of the stratum (m below ground), exclusive
    pub final_depth_m: f64,

    /// Moist unit weight above the water table (kN/m³)
    pub moist_unit_weight_kn_m3: f64,

    /// Saturated unit weight (kN/m³)
    pub saturated_unit_weight_kn_m3: f64,

    /// Cohesion (kPa)
    pub cohesion_kpa: f64,

    /// Friction angle (degrees)
    pub friction_angle_deg: f64,
}

impl Stratum {
    /// Create a stratum from its table row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        initial_depth_m: f64,
        final_depth_m: f64,
        moist_unit_weight_kn_m3: f64,
        saturated_unit_weight_kn_m3: f64,
        cohesion_kpa: f64,
        friction_angle_deg: f64,
    ) -> Self {
        Stratum {
            id: id.into(),
            description: description.into(),
            initial_depth_m,
            final_depth_m,
            moist_unit_weight_kn_m3,
            saturated_unit_weight_kn_m3,
            cohesion_kpa,
            friction_angle_deg,
        }
    }

    /// Stratum thickness (m)
    pub fn thickness_m(&self) -> f64 {
        self.final_depth_m - self.initial_depth_m
    }

    /// Submerged (buoyant) unit weight γ' = γ_sat − γ_w (kN/m³)
    pub fn submerged_unit_weight_kn_m3(&self) -> f64 {
        self.saturated_unit_weight_kn_m3 - WATER_UNIT_WEIGHT_KN_M3
    }

    /// Whether `depth_m` falls in `[initial, final)`
    pub fn contains(&self, depth_m: f64) -> bool {
        self.initial_depth_m <= depth_m && depth_m < self.final_depth_m
    }
}

/// Strength parameters of the embedment stratum (1) and the stratum below it (2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerParameters {
    /// Cohesion of the embedment stratum (kPa)
    pub c1_kpa: f64,
    /// Friction angle of the embedment stratum (degrees)
    pub phi1_deg: f64,
    /// Cohesion of the stratum below (kPa)
    pub c2_kpa: f64,
    /// Friction angle of the stratum below (degrees)
    pub phi2_deg: f64,
}

impl LayerParameters {
    /// True when both layers carry identical strength parameters, i.e. there
    /// is no strength change at the stratum interface.
    pub fn is_uniform(&self) -> bool {
        self.c1_kpa == self.c2_kpa && self.phi1_deg == self.phi2_deg
    }
}

/// Validated, depth-sorted, contiguous soil profile.
///
/// Immutable once built; share it by reference across any number of
/// evaluations.
#[derive(Debug, Clone, Serialize)]
pub struct SoilProfile {
    strata: Vec<Stratum>,
    epsilon: f64,
}

impl SoilProfile {
    /// Build a profile from raw stratum rows.
    ///
    /// Strata must be supplied top-down, contiguous and with unique ids.
    /// Cohesion and friction angle of every stratum are raised by `epsilon`.
    ///
    /// # Errors
    ///
    /// * `CalcError::InvalidProfile` - empty table, non-positive thickness,
    ///   gaps/overlaps between strata, duplicate ids
    /// * `CalcError::InvalidInput` - `epsilon` not strictly positive
    pub fn new(strata: Vec<Stratum>, epsilon: f64) -> CalcResult<Self> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(CalcError::invalid_input(
                "epsilon",
                epsilon.to_string(),
                "Epsilon must be a small positive number",
            ));
        }
        if strata.is_empty() {
            return Err(CalcError::invalid_profile("Profile has no strata"));
        }

        let mut seen = HashSet::new();
        for stratum in &strata {
            if !seen.insert(stratum.id.as_str()) {
                return Err(CalcError::invalid_profile(format!(
                    "Duplicate stratum id '{}'",
                    stratum.id
                )));
            }
            if !(stratum.initial_depth_m.is_finite() && stratum.final_depth_m.is_finite()) {
                return Err(CalcError::invalid_profile(format!(
                    "Stratum '{}' has a non-finite depth",
                    stratum.id
                )));
            }
            if stratum.final_depth_m <= stratum.initial_depth_m {
                return Err(CalcError::invalid_profile(format!(
                    "Stratum '{}' final depth {} m must exceed initial depth {} m",
                    stratum.id, stratum.final_depth_m, stratum.initial_depth_m
                )));
            }
        }

        for pair in strata.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            if upper.final_depth_m != lower.initial_depth_m {
                return Err(CalcError::invalid_profile(format!(
                    "Stratum '{}' ends at {} m but '{}' starts at {} m",
                    upper.id, upper.final_depth_m, lower.id, lower.initial_depth_m
                )));
            }
        }

        let strata = strata
            .into_iter()
            .map(|mut s| {
                s.cohesion_kpa += epsilon;
                s.friction_angle_deg += epsilon;
                s
            })
            .collect();

        Ok(SoilProfile { strata, epsilon })
    }

    /// All strata, top-down, with ε-adjusted strength parameters
    pub fn strata(&self) -> &[Stratum] {
        &self.strata
    }

    /// The ε applied to cohesion and friction angle
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Top of the profile (m)
    pub fn top_m(&self) -> f64 {
        self.strata[0].initial_depth_m
    }

    /// Bottom of the profile (m), exclusive
    pub fn bottom_m(&self) -> f64 {
        self.strata[self.strata.len() - 1].final_depth_m
    }

    /// Index of the stratum whose `[initial, final)` interval contains `depth_m`.
    pub fn locate_index(&self, depth_m: f64) -> CalcResult<usize> {
        let (top, bottom) = (self.top_m(), self.bottom_m());
        if !(depth_m >= top && depth_m < bottom) {
            return Err(CalcError::depth_out_of_range(depth_m, top, bottom));
        }
        Ok(self.strata.partition_point(|s| s.final_depth_m <= depth_m))
    }

    /// Stratum containing `depth_m`.
    ///
    /// # Errors
    ///
    /// * `CalcError::DepthOutOfRange` - depth outside `[top, bottom)`
    pub fn locate(&self, depth_m: f64) -> CalcResult<&Stratum> {
        let index = self.locate_index(depth_m)?;
        Ok(&self.strata[index])
    }

    /// Stratum immediately below the one containing `depth_m`.
    ///
    /// The bottom stratum repeats itself: there is no layer change below it.
    pub fn stratum_below(&self, depth_m: f64) -> CalcResult<&Stratum> {
        let index = self.locate_index(depth_m)?;
        Ok(self.strata.get(index + 1).unwrap_or(&self.strata[index]))
    }

    /// Cohesion and friction angle of the stratum at `depth_m` and the one below.
    pub fn parameters_at(&self, depth_m: f64) -> CalcResult<LayerParameters> {
        let upper = self.locate(depth_m)?;
        let lower = self.stratum_below(depth_m)?;
        Ok(LayerParameters {
            c1_kpa: upper.cohesion_kpa,
            phi1_deg: upper.friction_angle_deg,
            c2_kpa: lower.cohesion_kpa,
            phi2_deg: lower.friction_angle_deg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn three_layer_strata() -> Vec<Stratum> {
        vec![
            Stratum::new("E-1", "Fill", 0.0, 1.5, 16.0, 18.0, 0.0, 28.0),
            Stratum::new("E-2", "Soft clay", 1.5, 4.0, 17.0, 18.5, 35.0, 0.0),
            Stratum::new("E-3", "Dense sand", 4.0, 12.0, 19.0, 20.5, 0.0, 36.0),
        ]
    }

    #[test]
    fn test_epsilon_adjustment() {
        let profile = SoilProfile::new(three_layer_strata(), EPS).unwrap();
        let fill = &profile.strata()[0];
        assert_eq!(fill.cohesion_kpa, EPS);
        assert_eq!(fill.friction_angle_deg, 28.0 + EPS);
        assert!(profile.strata().iter().all(|s| s.cohesion_kpa > 0.0 && s.friction_angle_deg > 0.0));
    }

    #[test]
    fn test_locate_boundaries() {
        let profile = SoilProfile::new(three_layer_strata(), EPS).unwrap();
        assert_eq!(profile.locate(0.0).unwrap().id, "E-1");
        assert_eq!(profile.locate(1.49).unwrap().id, "E-1");
        // Final depth is exclusive
        assert_eq!(profile.locate(1.5).unwrap().id, "E-2");
        assert_eq!(profile.locate(4.0).unwrap().id, "E-3");
        assert_eq!(profile.locate(11.99).unwrap().id, "E-3");
    }

    #[test]
    fn test_locate_out_of_range() {
        let profile = SoilProfile::new(three_layer_strata(), EPS).unwrap();
        assert_eq!(
            profile.locate(12.0).unwrap_err(),
            CalcError::depth_out_of_range(12.0, 0.0, 12.0)
        );
        assert!(profile.locate(-0.1).is_err());
        assert!(profile.locate(f64::NAN).is_err());
    }

    #[test]
    fn test_parameters_at_uses_next_stratum() {
        let profile = SoilProfile::new(three_layer_strata(), EPS).unwrap();
        let params = profile.parameters_at(2.0).unwrap();
        assert_eq!(params.c1_kpa, 35.0 + EPS);
        assert_eq!(params.phi1_deg, EPS);
        assert_eq!(params.c2_kpa, EPS);
        assert_eq!(params.phi2_deg, 36.0 + EPS);
        assert!(!params.is_uniform());
    }

    #[test]
    fn test_bottom_stratum_repeats_itself() {
        let profile = SoilProfile::new(three_layer_strata(), EPS).unwrap();
        let params = profile.parameters_at(8.0).unwrap();
        assert_eq!(params.c1_kpa, params.c2_kpa);
        assert_eq!(params.phi1_deg, params.phi2_deg);
        assert!(params.is_uniform());
        assert_eq!(profile.stratum_below(8.0).unwrap().id, "E-3");
    }

    #[test]
    fn test_rejects_gap_between_strata() {
        let mut strata = three_layer_strata();
        strata[1].initial_depth_m = 1.6;
        let err = SoilProfile::new(strata, EPS).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PROFILE");
    }

    #[test]
    fn test_rejects_out_of_order_strata() {
        let mut strata = three_layer_strata();
        strata.swap(0, 1);
        assert!(SoilProfile::new(strata, EPS).is_err());
    }

    #[test]
    fn test_rejects_inverted_and_duplicate_strata() {
        let inverted = vec![Stratum::new("E-1", "Fill", 2.0, 1.0, 16.0, 18.0, 0.0, 28.0)];
        assert!(SoilProfile::new(inverted, EPS).is_err());

        let mut duplicate = three_layer_strata();
        duplicate[2].id = "E-1".to_string();
        assert!(SoilProfile::new(duplicate, EPS).is_err());

        assert!(SoilProfile::new(Vec::new(), EPS).is_err());
    }

    #[test]
    fn test_rejects_non_positive_epsilon() {
        let err = SoilProfile::new(three_layer_strata(), 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_submerged_unit_weight() {
        let stratum = Stratum::new("E-1", "Sand", 0.0, 1.0, 18.0, 20.0, 0.0, 30.0);
        assert!((stratum.submerged_unit_weight_kn_m3() - 10.19).abs() < 1e-12);
        assert!((stratum.thickness_m() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stratum_serialization() {
        let stratum = Stratum::new("E-1", "Sand", 0.0, 1.0, 18.0, 20.0, 0.0, 30.0);
        let json = serde_json::to_string(&stratum).unwrap();
        assert!(json.contains("\"friction_angle_deg\":30.0"));
        let roundtrip: Stratum = serde_json::from_str(&json).unwrap();
        assert_eq!(stratum, roundtrip);
    }
}
