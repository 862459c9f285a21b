//! # Meyerhof Bearing Capacity Formulas
//!
//! Bearing capacity factors and shape/depth/inclination corrections per
//! Meyerhof (1963), in the form tabulated by Bowles, *Foundation Analysis and
//! Design*, 5th ed., Table 4-1 and Table 4-5a.
//!
//! ## Notation
//!
//! - `φ` = friction angle (degrees)
//! - `c` = cohesion (kPa)
//! - `Df` = embedment depth (m)
//! - `B`, `L` = footing width and length (m)
//! - `θ` = load inclination from vertical (degrees)
//! - `q̄` = effective overburden at footing level (kPa)
//! - `γ̄` = effective unit weight below the footing (kN/m³)
//! - `Kp` = tan²(45° + φ/2)
//!
//! ## Ultimate Capacity
//!
//! ```text
//! q_ult = c·Nc·Sc·dc·ic + q̄·Nq·Sq·dq·iq + ½·γ̄·B·Nγ·Sγ·dγ·iγ
//! ```
//!
//! All functions are pure. `φ = 0` exactly is never supplied by a
//! [`crate::soil::SoilProfile`]; as `φ → 0` the formulas stay finite
//! (Nc → π + 2).

use serde::{Deserialize, Serialize};

use crate::units::Degrees;

/// Friction angle above which the φ-dependent shape and depth factors apply (degrees)
pub const SHAPE_DEPTH_PHI_THRESHOLD_DEG: f64 = 10.0;

/// Passive earth pressure coefficient Kp = tan²(45° + φ/2)
#[inline]
pub fn passive_coefficient(phi_deg: f64) -> f64 {
    Degrees(45.0 + phi_deg / 2.0).tan().powi(2)
}

/// Depth below the footing base reached by the failure wedge.
///
/// # Formula
/// - H = (B/2)·tan(45° + φ/2)
#[inline]
pub fn influence_depth(phi_deg: f64, width_m: f64) -> f64 {
    (width_m / 2.0) * Degrees(45.0 + phi_deg / 2.0).tan()
}

/// Bearing capacity factors Nc, Nq, Nγ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingCapacityFactors {
    pub nc: f64,
    pub nq: f64,
    pub ngamma: f64,
}

/// Meyerhof bearing capacity factors.
///
/// # Formulas
/// - Nq = e^(π·tan φ)·tan²(45° + φ/2)
/// - Nc = (Nq − 1)/tan φ
/// - Nγ = (Nq − 1)·tan(1.4φ)
pub fn bearing_capacity_factors(phi_deg: f64) -> BearingCapacityFactors {
    let tan_phi = Degrees(phi_deg).tan();
    let nq = (std::f64::consts::PI * tan_phi).exp() * passive_coefficient(phi_deg);
    let nc = (nq - 1.0) / tan_phi;
    let ngamma = (nq - 1.0) * Degrees(1.4 * phi_deg).tan();
    BearingCapacityFactors { nc, nq, ngamma }
}

/// Shape, depth and inclination factors for the three capacity terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionFactors {
    pub sc: f64,
    pub sq: f64,
    pub sgamma: f64,
    pub dc: f64,
    pub dq: f64,
    pub dgamma: f64,
    pub ic: f64,
    pub iq: f64,
    pub igamma: f64,
}

/// Shape factors (Sc, Sq, Sγ).
///
/// # Formulas
/// - Sc = 1 + 0.2·Kp·(B/L)
/// - Sq = Sγ = 1 + 0.1·Kp·(B/L) for φ > 10°, else 1
#[inline]
pub fn shape_factors(phi_deg: f64, width_m: f64, length_m: f64) -> (f64, f64, f64) {
    let kp = passive_coefficient(phi_deg);
    let sc = 1.0 + 0.2 * kp * (width_m / length_m);
    let sq = if phi_deg > SHAPE_DEPTH_PHI_THRESHOLD_DEG {
        1.0 + 0.1 * kp * (width_m / length_m)
    } else {
        1.0
    };
    (sc, sq, sq)
}

/// Depth factors (dc, dq, dγ).
///
/// # Formulas
/// - dc = 1 + 0.2·√Kp·(Df/B)
/// - dq = dγ = 1 + 0.1·√Kp·(Df/B) for φ > 10°, else 1
#[inline]
pub fn depth_factors(phi_deg: f64, df_m: f64, width_m: f64) -> (f64, f64, f64) {
    let sqrt_kp = passive_coefficient(phi_deg).sqrt();
    let dc = 1.0 + 0.2 * sqrt_kp * (df_m / width_m);
    let dq = if phi_deg > SHAPE_DEPTH_PHI_THRESHOLD_DEG {
        1.0 + 0.1 * sqrt_kp * (df_m / width_m)
    } else {
        1.0
    };
    (dc, dq, dq)
}

/// Inclination factors (ic, iq, iγ).
///
/// # Formulas
/// - ic = iq = (1 − θ/90)²
/// - iγ = (1 − θ/φ)² for φ > 0; otherwise 0 when θ > 0, 1 when θ = 0
#[inline]
pub fn inclination_factors(phi_deg: f64, theta_deg: f64) -> (f64, f64, f64) {
    let ic = (1.0 - theta_deg / 90.0).powi(2);
    let igamma = if phi_deg > 0.0 {
        (1.0 - theta_deg / phi_deg).powi(2)
    } else if theta_deg > 0.0 {
        0.0
    } else {
        1.0
    };
    (ic, ic, igamma)
}

/// All correction factors for one friction angle and footing geometry.
pub fn correction_factors(
    phi_deg: f64,
    df_m: f64,
    width_m: f64,
    length_m: f64,
    theta_deg: f64,
) -> CorrectionFactors {
    let (sc, sq, sgamma) = shape_factors(phi_deg, width_m, length_m);
    let (dc, dq, dgamma) = depth_factors(phi_deg, df_m, width_m);
    let (ic, iq, igamma) = inclination_factors(phi_deg, theta_deg);
    CorrectionFactors {
        sc,
        sq,
        sgamma,
        dc,
        dq,
        dgamma,
        ic,
        iq,
        igamma,
    }
}

/// Bearing capacity and correction factors for one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeyerhofFactors {
    pub bearing: BearingCapacityFactors,
    pub correction: CorrectionFactors,
}

impl MeyerhofFactors {
    /// Evaluate every factor for friction angle `phi_deg`.
    pub fn new(phi_deg: f64, df_m: f64, width_m: f64, length_m: f64, theta_deg: f64) -> Self {
        MeyerhofFactors {
            bearing: bearing_capacity_factors(phi_deg),
            correction: correction_factors(phi_deg, df_m, width_m, length_m, theta_deg),
        }
    }

    /// Ultimate capacity with these factors (kPa).
    ///
    /// ```text
    /// q_ult = c·Nc·Sc·dc·ic + q̄·Nq·Sq·dq·iq + ½·γ̄·B·Nγ·Sγ·dγ·iγ
    /// ```
    pub fn ultimate_capacity(&self, cohesion_kpa: f64, q_bar_kpa: f64, gamma_bar_kn_m3: f64, width_m: f64) -> f64 {
        ultimate_capacity(
            cohesion_kpa,
            self.bearing.nc,
            q_bar_kpa,
            gamma_bar_kn_m3,
            width_m,
            &self.bearing,
            &self.correction,
        )
    }
}

/// Meyerhof ultimate capacity with an explicit cohesion factor (kPa).
///
/// `nc` is passed separately so that two-layer checks can substitute a
/// corrected factor (Ncs) while keeping every other term.
pub fn ultimate_capacity(
    cohesion_kpa: f64,
    nc: f64,
    q_bar_kpa: f64,
    gamma_bar_kn_m3: f64,
    width_m: f64,
    bearing: &BearingCapacityFactors,
    correction: &CorrectionFactors,
) -> f64 {
    let f = correction;
    cohesion_kpa * nc * f.sc * f.dc * f.ic
        + q_bar_kpa * bearing.nq * f.sq * f.dq * f.iq
        + 0.5 * gamma_bar_kn_m3 * width_m * bearing.ngamma * f.sgamma * f.dgamma * f.igamma
}
