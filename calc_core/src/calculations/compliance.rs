//! # Footing Compliance
//!
//! Checks a schedule of loaded footings against the allowable bearing
//! capacity. A footing passes when `q_adm ≥ P / (B·L)`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::compliance::{check_footings, FootingRecord};
//! use calc_core::project::AnalysisConfig;
//! use calc_core::soil::{SoilProfile, Stratum};
//!
//! let profile = SoilProfile::new(
//!     vec![Stratum::new("E-1", "Dense sand", 0.0, 15.0, 18.0, 20.0, 0.0, 34.0)],
//!     1e-9,
//! )
//! .unwrap();
//!
//! let footings = vec![FootingRecord::new("Z-1", 2.0, 2.0, 1.5, 800.0)];
//! let rows = check_footings(&profile, &AnalysisConfig::default(), &footings).unwrap();
//! assert!(rows[0].passes);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::CalcResult;
use crate::project::AnalysisConfig;
use crate::soil::SoilProfile;
use crate::units::{KiloNewtons, Meters};

use super::bearing::{calculate, FootingCase};

/// A loaded footing from the foundation schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingRecord {
    /// Support label (e.g. "Z-1", "C-4")
    pub support_name: String,
    pub width_m: f64,
    pub length_m: f64,
    pub embedment_depth_m: f64,
    /// Service load on the footing (kN)
    pub design_load_kn: f64,
}

impl FootingRecord {
    pub fn new(
        support_name: impl Into<String>,
        width_m: f64,
        length_m: f64,
        embedment_depth_m: f64,
        design_load_kn: f64,
    ) -> Self {
        FootingRecord {
            support_name: support_name.into(),
            width_m,
            length_m,
            embedment_depth_m,
            design_load_kn,
        }
    }

    /// Geometry and load as a footing case
    pub fn footing_case(&self) -> FootingCase {
        FootingCase::new(self.embedment_depth_m, self.width_m, self.length_m).with_load(self.design_load_kn)
    }

    /// Contact stress P / (B·L) (kPa)
    pub fn design_stress_kpa(&self) -> f64 {
        (KiloNewtons(self.design_load_kn) / (Meters(self.width_m) * Meters(self.length_m))).0
    }
}

/// A footing record with its capacity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRow {
    #[serde(flatten)]
    pub record: FootingRecord,
    pub ultimate_capacity_kpa: f64,
    pub allowable_capacity_kpa: f64,
    pub design_stress_kpa: f64,
    pub passes: bool,
}

/// Check every footing record against the allowable capacity.
///
/// Rows are returned in the same order as `records`.
///
/// # Errors
///
/// Fails on the first record with invalid geometry, a non-finite load or an
/// embedment depth outside the profile.
pub fn check_footings(
    profile: &SoilProfile,
    config: &AnalysisConfig,
    records: &[FootingRecord],
) -> CalcResult<Vec<ComplianceRow>> {
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let result = calculate(profile, &record.footing_case(), config)?;
        let design_stress_kpa = record.design_stress_kpa();

        rows.push(ComplianceRow {
            record: record.clone(),
            ultimate_capacity_kpa: result.ultimate_capacity_kpa,
            allowable_capacity_kpa: result.allowable_capacity_kpa,
            design_stress_kpa,
            passes: result.allowable_capacity_kpa >= design_stress_kpa,
        });
    }

    let failing = rows.iter().filter(|r| !r.passes).count();
    debug!(footings = rows.len(), failing, "compliance check complete");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::Stratum;

    fn sand_profile() -> SoilProfile {
        SoilProfile::new(
            vec![Stratum::new("E-1", "Dense sand", 0.0, 15.0, 18.0, 20.0, 0.0, 34.0)],
            1e-9,
        )
        .unwrap()
    }

    #[test]
    fn test_design_stress() {
        let record = FootingRecord::new("Z-1", 2.0, 3.0, 1.0, 600.0);
        assert!((record.design_stress_kpa() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_pass_and_fail() {
        let profile = sand_profile();
        let config = AnalysisConfig::default();
        let records = vec![
            FootingRecord::new("Z-1", 2.0, 2.0, 1.5, 400.0),
            FootingRecord::new("Z-2", 1.0, 1.0, 0.5, 50_000.0),
        ];

        let rows = check_footings(&profile, &config, &records).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].record.support_name, "Z-1");
        assert!(rows[0].passes);
        assert!(rows[0].allowable_capacity_kpa >= rows[0].design_stress_kpa);
        assert!(!rows[1].passes);
        assert!((rows[1].design_stress_kpa - 50_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_matches_single_evaluation() {
        let profile = sand_profile();
        let config = AnalysisConfig::default();
        let record = FootingRecord::new("Z-3", 1.5, 2.5, 1.2, 300.0);

        let rows = check_footings(&profile, &config, std::slice::from_ref(&record)).unwrap();
        let single = calculate(&profile, &record.footing_case(), &config).unwrap();
        assert_eq!(rows[0].ultimate_capacity_kpa, single.ultimate_capacity_kpa);
        assert_eq!(rows[0].allowable_capacity_kpa, single.allowable_capacity_kpa);
    }

    #[test]
    fn test_non_finite_load_rejected() {
        let records = vec![FootingRecord::new("Z-1", 1.0, 1.0, 1.0, f64::NAN)];
        let err = check_footings(&sand_profile(), &AnalysisConfig::default(), &records).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_row_serializes_flat() {
        let rows = check_footings(
            &sand_profile(),
            &AnalysisConfig::default(),
            &[FootingRecord::new("Z-1", 2.0, 2.0, 1.5, 400.0)],
        )
        .unwrap();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["support_name"], "Z-1");
        assert!(json.get("record").is_none());
        assert_eq!(json["passes"], true);
    }
}
