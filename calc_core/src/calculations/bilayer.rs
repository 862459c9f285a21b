//! # Two-Layer (Bilayer) Bearing Capacity
//!
//! Meyerhof single-layer capacity with a check for a second stratum inside the
//! failure zone, following Bowles, *Foundation Analysis and Design*, §4-8.
//!
//! ## Decision
//!
//! ```text
//!   base ═════[ B ]═════  z = Df
//!          ╲         ╱      d1 = bottom of embedment stratum − Df
//!   ─────── ╲ ───── ╱ ───  interface
//!            ╲     ╱        H = (B/2)·tan(45° + φ1/2)
//!             ╲   ╱
//! ```
//!
//! - `d1 ≥ H`: the wedge never reaches the lower stratum ([`BilayerCase::NoInteraction`])
//! - same c and φ below: nothing changes at the interface ([`BilayerCase::UniformLayer`])
//! - otherwise the pair is classified and the capacity recomputed:
//!   - clay on clay: corrected cohesion factor Ncs
//!   - sand on clay / clay on sand: punching shear, `min(q_ult,1, q')`
//!   - c-φ on c-φ: thickness-weighted φ and c over H
//!
//! Classification is a hard threshold on the parameters as entered: a stratum
//! is clay when its friction angle (before the ε-guard) is below ε, and sand
//! when its cohesion is. Values either side of the threshold switch case
//! discontinuously.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::meyerhof::{
    influence_depth, passive_coefficient, ultimate_capacity, CorrectionFactors, MeyerhofFactors,
};
use crate::errors::CalcResult;
use crate::soil::{effective_overburden, LayerParameters, SoilProfile, WATER_UNIT_WEIGHT_KN_M3};
use crate::units::Degrees;

/// Interaction case that produced the controlling capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BilayerCase {
    /// Influence depth stays inside the embedment stratum
    NoInteraction,
    /// The stratum below has the same strength parameters
    UniformLayer,
    /// Frictionless stratum over frictionless stratum
    ClayOnClay,
    /// Cohesionless stratum over frictionless stratum
    SandOnClay,
    /// Frictionless stratum over cohesionless stratum
    ClayOnSand,
    /// Any other pair, averaged parameters
    CPhiOnCPhi,
}

impl BilayerCase {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            BilayerCase::NoInteraction => "No interaction",
            BilayerCase::UniformLayer => "Uniform layer",
            BilayerCase::ClayOnClay => "Clay on clay",
            BilayerCase::SandOnClay => "Sand on clay",
            BilayerCase::ClayOnSand => "Clay on sand",
            BilayerCase::CPhiOnCPhi => "c-φ on c-φ",
        }
    }

    /// True for the two punching-shear cases
    pub fn is_punching(&self) -> bool {
        matches!(self, BilayerCase::SandOnClay | BilayerCase::ClayOnSand)
    }
}

impl std::fmt::Display for BilayerCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Geometry and loading passed to the two-layer check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilayerInput {
    pub df_m: f64,
    pub width_m: f64,
    pub length_m: f64,
    pub gwl_m: f64,
    pub theta_deg: f64,
    /// Guard added to denominators
    pub epsilon: f64,
}

/// Outcome of the two-layer check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilayerResult {
    /// Single-layer capacity with embedment-stratum parameters (kPa)
    pub q_ult_single_layer_kpa: f64,
    /// Controlling two-layer capacity (kPa)
    pub q_ult_bilayer_kpa: f64,
    /// Case that produced `q_ult_bilayer_kpa`
    pub case: BilayerCase,
    /// Strength parameters of the embedment stratum and the one below
    pub parameters: LayerParameters,
    /// Influence depth H (m)
    pub influence_depth_m: f64,
    /// Embedment stratum thickness remaining below the base, d1 (m)
    pub remaining_thickness_m: f64,
    /// Punching-shear capacity q' when a punching case governs (kPa)
    pub q_ult_punching_kpa: Option<f64>,
}

/// Classify a stratum pair from its ε-adjusted parameters.
///
/// `epsilon` is the guard the profile added to c and φ.
pub fn classify(parameters: &LayerParameters, epsilon: f64) -> BilayerCase {
    let below_threshold = |value: f64| value - epsilon < epsilon;

    let is_clay1 = below_threshold(parameters.phi1_deg);
    let is_clay2 = below_threshold(parameters.phi2_deg);
    let is_sand1 = below_threshold(parameters.c1_kpa);
    let is_sand2 = below_threshold(parameters.c2_kpa);

    if is_clay1 && is_clay2 {
        BilayerCase::ClayOnClay
    } else if is_sand1 && is_clay2 {
        BilayerCase::SandOnClay
    } else if is_clay1 && is_sand2 {
        BilayerCase::ClayOnSand
    } else {
        BilayerCase::CPhiOnCPhi
    }
}

/// Corrected cohesion factor Ncs for clay over clay.
///
/// # Formulas (CR = c2/c1)
/// - CR < 0.7: Ncs = 1.5·d1/B + 5.14·CR
/// - 0.7 ≤ CR ≤ 1: Ncs = 0.9·(1.5·d1/B + 5.14·CR)
/// - CR > 1: Ncs = 2·N1s·N2s/(N1s + N2s), N1s = 4.14 + 0.5·B/d1, N2s = 4.14 + 1.1·B/d1
pub fn clay_on_clay_factor(c1_kpa: f64, c2_kpa: f64, d1_m: f64, width_m: f64, epsilon: f64) -> f64 {
    let cr = c2_kpa / (c1_kpa + epsilon);

    if cr < 0.7 {
        1.5 * d1_m / width_m + 5.14 * cr
    } else if cr <= 1.0 {
        0.9 * (1.5 * d1_m / width_m + 5.14 * cr)
    } else {
        let n1s = 4.14 + 0.5 * width_m / (d1_m + epsilon);
        let n2s = 4.14 + 1.1 * width_m / (d1_m + epsilon);
        2.0 * (n1s * n2s) / (n1s + n2s + epsilon)
    }
}

/// Capacity with thickness-weighted parameters over the influence depth.
///
/// Only the φ-dependent factors are recomputed; `Sc`, `dc`, `ic` and `iq`
/// keep their embedment-stratum values.
#[allow(clippy::too_many_arguments)]
pub fn averaged_capacity(
    parameters: &LayerParameters,
    layer1: &CorrectionFactors,
    h_m: f64,
    d1_m: f64,
    q_bar_kpa: f64,
    gamma_bar_kn_m3: f64,
    input: &BilayerInput,
) -> f64 {
    let eps = input.epsilon;
    let phi_avg = (d1_m * parameters.phi1_deg + (h_m - d1_m) * parameters.phi2_deg) / (h_m + eps);
    let c_avg = (d1_m * parameters.c1_kpa + (h_m - d1_m) * parameters.c2_kpa) / (h_m + eps);

    let averaged = MeyerhofFactors::new(phi_avg, input.df_m, input.width_m, input.length_m, input.theta_deg);
    let correction = CorrectionFactors {
        sc: layer1.sc,
        dc: layer1.dc,
        ic: layer1.ic,
        iq: layer1.iq,
        ..averaged.correction
    };

    ultimate_capacity(
        c_avg,
        averaged.bearing.nc,
        q_bar_kpa,
        gamma_bar_kn_m3,
        input.width_m,
        &averaged.bearing,
        &correction,
    )
}

/// Punching-shear capacity q' through the embedment stratum.
///
/// ```text
/// P  = 2(B + L),  A = B·L
/// pv = Df·q̄·d1 + γw·d1²/2
/// q' = q_ult,2 + P·pv·Kp1·tan φ1/A + P·d1·c1/A
/// ```
///
/// The `pv` expression is the simplified form used by the source method and
/// is reproduced as is.
pub fn punching_shear_capacity(
    q_ult_lower_kpa: f64,
    parameters: &LayerParameters,
    d1_m: f64,
    q_bar_kpa: f64,
    input: &BilayerInput,
) -> f64 {
    let eps = input.epsilon;
    let perimeter = 2.0 * (input.width_m + input.length_m);
    let area = input.width_m * input.length_m;
    let pv = input.df_m * q_bar_kpa * d1_m + WATER_UNIT_WEIGHT_KN_M3 * (d1_m.powi(2) / 2.0);
    let ks = passive_coefficient(parameters.phi1_deg);

    q_ult_lower_kpa
        + (perimeter * pv * ks * Degrees(parameters.phi1_deg).tan()) / (area + eps)
        + (perimeter * d1_m * parameters.c1_kpa) / (area + eps)
}

/// Run the single-layer and two-layer capacity checks for one footing.
///
/// # Errors
///
/// * `CalcError::DepthOutOfRange` - `df_m` is not covered by the profile
pub fn evaluate(profile: &SoilProfile, input: &BilayerInput) -> CalcResult<BilayerResult> {
    let base_stratum = profile.locate(input.df_m)?;
    let parameters = profile.parameters_at(input.df_m)?;
    let overburden = effective_overburden(profile, input.df_m, input.gwl_m, input.width_m)?;
    let (q_bar, gamma_bar) = (overburden.q_bar_kpa, overburden.gamma_bar_kn_m3);

    let layer1 = MeyerhofFactors::new(
        parameters.phi1_deg,
        input.df_m,
        input.width_m,
        input.length_m,
        input.theta_deg,
    );
    let q_ult_1 = layer1.ultimate_capacity(parameters.c1_kpa, q_bar, gamma_bar, input.width_m);

    let h = influence_depth(parameters.phi1_deg, input.width_m);
    let d1 = base_stratum.final_depth_m - input.df_m;

    let mut q_ult_punching_kpa = None;
    let (case, q_ult_bilayer) = if d1 >= h {
        (BilayerCase::NoInteraction, q_ult_1)
    } else if parameters.is_uniform() {
        (BilayerCase::UniformLayer, q_ult_1)
    } else {
        let case = classify(&parameters, profile.epsilon());
        let q = match case {
            BilayerCase::ClayOnClay => {
                let ncs = clay_on_clay_factor(
                    parameters.c1_kpa,
                    parameters.c2_kpa,
                    d1,
                    input.width_m,
                    input.epsilon,
                );
                ultimate_capacity(
                    parameters.c1_kpa,
                    ncs,
                    q_bar,
                    gamma_bar,
                    input.width_m,
                    &layer1.bearing,
                    &layer1.correction,
                )
            }
            BilayerCase::SandOnClay | BilayerCase::ClayOnSand => {
                let layer2 = MeyerhofFactors::new(
                    parameters.phi2_deg,
                    input.df_m,
                    input.width_m,
                    input.length_m,
                    input.theta_deg,
                );
                let q_ult_2 = layer2.ultimate_capacity(parameters.c2_kpa, q_bar, gamma_bar, input.width_m);
                let q_prime = punching_shear_capacity(q_ult_2, &parameters, d1, q_bar, input);
                q_ult_punching_kpa = Some(q_prime);
                q_ult_1.min(q_prime)
            }
            _ => averaged_capacity(&parameters, &layer1.correction, h, d1, q_bar, gamma_bar, input),
        };
        (case, q)
    };

    debug!(
        stratum = %base_stratum.id,
        df_m = input.df_m,
        width_m = input.width_m,
        length_m = input.length_m,
        case = %case,
        q_ult_1,
        q_ult_bilayer,
        "two-layer check"
    );

    Ok(BilayerResult {
        q_ult_single_layer_kpa: q_ult_1,
        q_ult_bilayer_kpa: q_ult_bilayer,
        case,
        parameters,
        influence_depth_m: h,
        remaining_thickness_m: d1,
        q_ult_punching_kpa,
    })
}
