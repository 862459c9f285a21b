//! # Capacity Table
//!
//! Sweeps every (Df, B, L) combination through the bearing chain and emits
//! one row per footing. Combinations with `L < B` are outside the footing
//! convention and are skipped, not reported as errors.
//!
//! Rows come out in the order of the supplied lists: Df, then B, then L.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::CalcResult;
use crate::project::AnalysisConfig;
use crate::soil::SoilProfile;

use super::bearing::{calculate, FootingCase};
use super::bilayer::BilayerCase;

/// One row of the capacity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRow {
    pub stratum_id: String,
    pub stratum_description: String,
    pub embedment_depth_m: f64,
    pub width_m: f64,
    pub length_m: f64,
    /// B/L
    pub width_to_length_ratio: f64,
    pub c1_kpa: f64,
    pub phi1_deg: f64,
    pub c2_kpa: f64,
    pub phi2_deg: f64,
    pub q_ult_single_layer_kpa: f64,
    pub q_ult_bilayer_kpa: f64,
    pub ultimate_capacity_kpa: f64,
    pub allowable_capacity_kpa: f64,
    pub bilayer_case: BilayerCase,
}

/// Generate the capacity table for the given sweep.
///
/// # Errors
///
/// Fails on the first combination that cannot be evaluated, typically a
/// depth outside the profile (`CalcError::DepthOutOfRange`) or a
/// non-positive dimension (`CalcError::InvalidGeometry`).
pub fn generate_capacity_table(
    profile: &SoilProfile,
    config: &AnalysisConfig,
    embedment_depths_m: &[f64],
    widths_m: &[f64],
    lengths_m: &[f64],
) -> CalcResult<Vec<CapacityRow>> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for &df in embedment_depths_m {
        let stratum = profile.locate(df)?;
        let parameters = profile.parameters_at(df)?;

        for &width in widths_m {
            for &length in lengths_m {
                if length < width {
                    skipped += 1;
                    continue;
                }

                let footing = FootingCase::new(df, width, length);
                let result = calculate(profile, &footing, config)?;
                trace!(
                    df_m = df,
                    width_m = width,
                    length_m = length,
                    q_ult = result.ultimate_capacity_kpa,
                    "capacity row"
                );

                rows.push(CapacityRow {
                    stratum_id: stratum.id.clone(),
                    stratum_description: stratum.description.clone(),
                    embedment_depth_m: df,
                    width_m: width,
                    length_m: length,
                    width_to_length_ratio: footing.width_to_length_ratio(),
                    c1_kpa: parameters.c1_kpa,
                    phi1_deg: parameters.phi1_deg,
                    c2_kpa: parameters.c2_kpa,
                    phi2_deg: parameters.phi2_deg,
                    q_ult_single_layer_kpa: result.q_ult_single_layer_kpa,
                    q_ult_bilayer_kpa: result.q_ult_bilayer_kpa,
                    ultimate_capacity_kpa: result.ultimate_capacity_kpa,
                    allowable_capacity_kpa: result.allowable_capacity_kpa,
                    bilayer_case: result.bilayer_case,
                });
            }
        }
    }

    debug!(rows = rows.len(), skipped, "capacity table generated");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::Stratum;

    fn test_profile() -> SoilProfile {
        SoilProfile::new(
            vec![
                Stratum::new("E-1", "Silty sand", 0.0, 3.0, 17.5, 19.0, 5.0, 28.0),
                Stratum::new("E-2", "Soft clay", 3.0, 12.0, 16.5, 18.0, 40.0, 0.0),
            ],
            1e-9,
        )
        .unwrap()
    }

    #[test]
    fn test_skips_length_shorter_than_width() {
        let rows = generate_capacity_table(
            &test_profile(),
            &AnalysisConfig::default(),
            &[1.0],
            &[2.0, 3.0],
            &[1.0, 2.0, 4.0],
        )
        .unwrap();

        let geometry: Vec<(f64, f64)> = rows.iter().map(|r| (r.width_m, r.length_m)).collect();
        assert_eq!(geometry, vec![(2.0, 2.0), (2.0, 4.0), (3.0, 4.0)]);
    }

    #[test]
    fn test_row_order_and_stratum_identity() {
        let rows = generate_capacity_table(
            &test_profile(),
            &AnalysisConfig::default(),
            &[1.0, 4.0],
            &[1.0, 2.0],
            &[2.0],
        )
        .unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].stratum_id, "E-1");
        assert_eq!((rows[0].embedment_depth_m, rows[0].width_m), (1.0, 1.0));
        assert_eq!((rows[1].embedment_depth_m, rows[1].width_m), (1.0, 2.0));
        assert_eq!(rows[2].stratum_id, "E-2");
        assert_eq!(rows[2].stratum_description, "Soft clay");
        assert!((rows[0].width_to_length_ratio - 0.5).abs() < 1e-12);
        assert!((rows[1].width_to_length_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_row_values_match_single_evaluation() {
        let profile = test_profile();
        let config = AnalysisConfig::default();
        let rows = generate_capacity_table(&profile, &config, &[2.0], &[2.0], &[3.0]).unwrap();
        let single = calculate(&profile, &FootingCase::new(2.0, 2.0, 3.0), &config).unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.q_ult_single_layer_kpa, single.q_ult_single_layer_kpa);
        assert_eq!(row.q_ult_bilayer_kpa, single.q_ult_bilayer_kpa);
        assert_eq!(row.ultimate_capacity_kpa, single.ultimate_capacity_kpa);
        assert_eq!(row.allowable_capacity_kpa, single.allowable_capacity_kpa);
        // Embedment stratum over the clay below
        assert!((row.phi1_deg - 28.0).abs() < 1e-6);
        assert!(row.phi2_deg < 1e-6);
    }

    #[test]
    fn test_depth_outside_profile_fails() {
        let err = generate_capacity_table(
            &test_profile(),
            &AnalysisConfig::default(),
            &[12.0],
            &[1.0],
            &[1.0],
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "DEPTH_OUT_OF_RANGE");
    }

    #[test]
    fn test_empty_sweep() {
        let rows =
            generate_capacity_table(&test_profile(), &AnalysisConfig::default(), &[], &[1.0], &[1.0]).unwrap();
        assert!(rows.is_empty());
    }
}
