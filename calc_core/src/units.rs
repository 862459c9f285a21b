//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in foundation design. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Bearing capacity work uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units
//!
//! - Length / depth: meters (m)
//! - Area: square meters (m²)
//! - Force: kilonewtons (kN)
//! - Stress, pressure, cohesion: kilopascals (kPa = kN/m²)
//! - Angles: degrees (°)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{KiloNewtons, KiloPascals, Meters};
//!
//! let area = Meters(2.0) * Meters(3.0);
//! let stress: KiloPascals = KiloNewtons(600.0) / area;
//! assert_eq!(stress.0, 100.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

// ============================================================================
// Length and Area
// ============================================================================

/// Length or depth in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

impl Mul<Meters> for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> Self::Output {
        SquareMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Force and Stress
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Stress or pressure in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

impl Div<SquareMeters> for KiloNewtons {
    type Output = KiloPascals;
    fn div(self, rhs: SquareMeters) -> Self::Output {
        KiloPascals(self.0 / rhs.0)
    }
}

// ============================================================================
// Angles
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Tangent of the angle
    pub fn tan(self) -> f64 {
        self.to_radians().tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_from_lengths() {
        let area = Meters(1.5) * Meters(2.0);
        assert_eq!(area, SquareMeters(3.0));
    }

    #[test]
    fn test_stress_from_force_and_area() {
        let stress = KiloNewtons(450.0) / SquareMeters(3.0);
        assert!((stress.0 - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_degrees_tan() {
        assert!((Degrees(45.0).tan() - 1.0).abs() < 1e-12);
        assert!(Degrees(0.0).tan().abs() < 1e-15);
    }

    #[test]
    fn test_serialization() {
        let depth = Meters(1.8);
        let json = serde_json::to_string(&depth).unwrap();
        assert_eq!(json, "1.8");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(depth, roundtrip);
    }
}
