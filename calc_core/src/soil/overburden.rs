//! # Effective Overburden
//!
//! Effective vertical stress at footing level (`q̄`) and the effective unit
//! weight (`γ̄`) used in the self-weight term of the bearing capacity equation.
//!
//! ## Groundwater
//!
//! ```text
//!   ground ───────────────────────────  z = 0
//!            moist γ
//!   GWL    ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─  z = GWL
//!            submerged γ' = γ_sat − γ_w
//!   base   ═════════[ footing ]═══════  z = Df
//!            influence zone of depth B
//!          ───────────────────────────  z = Df + B
//! ```
//!
//! `q̄` integrates the applicable unit weight of every stratum over `[0, Df)`.
//! `γ̄` takes the stratum at `Df` and blends its moist and submerged weights
//! by where the water table sits in `[Df, Df + B)`.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

use super::profile::SoilProfile;

/// Effective stresses at footing level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overburden {
    /// Effective overburden pressure at the footing base q̄ (kPa)
    pub q_bar_kpa: f64,
    /// Effective unit weight for the Nγ term γ̄ (kN/m³)
    pub gamma_bar_kn_m3: f64,
}

/// Compute `q̄` and `γ̄` for a footing at `df_m` with width `width_m`.
///
/// # Rules
///
/// For each stratum intersecting `[0, Df)`:
/// - `GWL ≥ Df`: moist unit weight over the whole intersected thickness
/// - `GWL ≤ top of stratum`: submerged unit weight over the whole thickness
/// - otherwise the thickness is split at the GWL (moist above, submerged below)
///
/// For `γ̄`, using the stratum located at `Df`:
/// - `GWL < Df`: γ'
/// - `Df ≤ GWL < Df + B`: γ' + ((GWL − Df)/B)(γ − γ')
/// - `GWL ≥ Df + B`: γ
///
/// # Errors
///
/// * `CalcError::DepthOutOfRange` - `df_m` is not covered by the profile
pub fn effective_overburden(
    profile: &SoilProfile,
    df_m: f64,
    gwl_m: f64,
    width_m: f64,
) -> CalcResult<Overburden> {
    let base_stratum = profile.locate(df_m)?;

    let mut q_bar_kpa = 0.0;
    for stratum in profile.strata() {
        let thickness = if stratum.final_depth_m <= df_m {
            stratum.thickness_m()
        } else if stratum.initial_depth_m <= df_m {
            df_m - stratum.initial_depth_m
        } else {
            break;
        };

        let gamma = stratum.moist_unit_weight_kn_m3;
        let gamma_sub = stratum.submerged_unit_weight_kn_m3();

        q_bar_kpa += if gwl_m >= df_m {
            thickness * gamma
        } else if gwl_m <= stratum.initial_depth_m {
            thickness * gamma_sub
        } else {
            let h_moist = (gwl_m - stratum.initial_depth_m).clamp(0.0, thickness);
            let h_submerged = (thickness - h_moist).max(0.0);
            h_moist * gamma + h_submerged * gamma_sub
        };
    }

    let gamma = base_stratum.moist_unit_weight_kn_m3;
    let gamma_sub = base_stratum.submerged_unit_weight_kn_m3();
    let gamma_bar_kn_m3 = if gwl_m < df_m {
        gamma_sub
    } else if gwl_m - df_m < width_m {
        gamma_sub + ((gwl_m - df_m) / width_m) * (gamma - gamma_sub)
    } else {
        gamma
    };

    Ok(Overburden {
        q_bar_kpa,
        gamma_bar_kn_m3,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::{Stratum, WATER_UNIT_WEIGHT_KN_M3};

    fn two_layer_profile() -> SoilProfile {
        SoilProfile::new(
            vec![
                Stratum::new("E-1", "Silty sand", 0.0, 2.0, 18.0, 20.0, 0.0, 30.0),
                Stratum::new("E-2", "Clay", 2.0, 10.0, 17.0, 19.0, 60.0, 0.0),
            ],
            1e-9,
        )
        .unwrap()
    }

    #[test]
    fn test_dry_profile_uses_moist_weights() {
        let profile = two_layer_profile();
        let ob = effective_overburden(&profile, 3.0, 100.0, 1.5).unwrap();
        // 2.0 * 18 + 1.0 * 17
        assert!((ob.q_bar_kpa - 53.0).abs() < 1e-9);
        // Stratum at Df = 3 m is the clay
        assert!((ob.gamma_bar_kn_m3 - 17.0).abs() < 1e-12);
    }

    #[test]
    fn test_water_at_surface_uses_submerged_weights() {
        let profile = two_layer_profile();
        let ob = effective_overburden(&profile, 3.0, 0.0, 1.5).unwrap();
        let expected = 2.0 * (20.0 - WATER_UNIT_WEIGHT_KN_M3) + 1.0 * (19.0 - WATER_UNIT_WEIGHT_KN_M3);
        assert!((ob.q_bar_kpa - expected).abs() < 1e-9);
        assert!((ob.gamma_bar_kn_m3 - (19.0 - WATER_UNIT_WEIGHT_KN_M3)).abs() < 1e-12);
    }

    #[test]
    fn test_water_table_splits_stratum() {
        let profile = two_layer_profile();
        // GWL at 1.5 m: sand split 1.5 moist + 0.5 submerged, clay fully submerged
        let ob = effective_overburden(&profile, 3.0, 1.5, 1.5).unwrap();
        let expected = 1.5 * 18.0 + 0.5 * (20.0 - 9.81) + 1.0 * (19.0 - 9.81);
        assert!((ob.q_bar_kpa - expected).abs() < 1e-9);
    }

    #[test]
    fn test_gamma_bar_interpolates_within_influence_zone() {
        let profile = two_layer_profile();
        // Df = 3, B = 2, GWL = 4 -> halfway through [Df, Df + B)
        let ob = effective_overburden(&profile, 3.0, 4.0, 2.0).unwrap();
        let gamma_sub = 19.0 - 9.81;
        let expected = gamma_sub + 0.5 * (17.0 - gamma_sub);
        assert!((ob.gamma_bar_kn_m3 - expected).abs() < 1e-12);
        // Water below the base: q̄ stays on moist weights
        assert!((ob.q_bar_kpa - 53.0).abs() < 1e-9);
    }

    #[test]
    fn test_gamma_bar_at_influence_zone_limit_is_moist() {
        let profile = two_layer_profile();
        let ob = effective_overburden(&profile, 3.0, 5.0, 2.0).unwrap();
        assert!((ob.gamma_bar_kn_m3 - 17.0).abs() < 1e-12);
    }

    #[test]
    fn test_gamma_bar_uses_stratum_at_base_on_boundary() {
        let profile = two_layer_profile();
        // Df on the interface: the base sits on the clay
        let ob = effective_overburden(&profile, 2.0, 100.0, 1.0).unwrap();
        assert!((ob.q_bar_kpa - 36.0).abs() < 1e-9);
        assert!((ob.gamma_bar_kn_m3 - 17.0).abs() < 1e-12);
    }

    #[test]
    fn test_surface_footing_has_no_overburden() {
        let profile = two_layer_profile();
        let ob = effective_overburden(&profile, 0.0, 100.0, 1.0).unwrap();
        assert_eq!(ob.q_bar_kpa, 0.0);
        assert!((ob.gamma_bar_kn_m3 - 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_depth_outside_profile_fails() {
        let profile = two_layer_profile();
        assert!(effective_overburden(&profile, 10.0, 100.0, 1.0).is_err());
    }
}
