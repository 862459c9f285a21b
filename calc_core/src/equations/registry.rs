//! # Equation Registry
//!
//! Central registry of every bearing capacity equation used in calculations.
//! Each equation has metadata including its reference, formula and variables.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for the generated equations reference
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::Equation;
//!
//! let meta = Equation::BearingFactorNq.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of an equation.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Meyerhof (1963), "Some recent research on the bearing capacity of foundations"
    Meyerhof1963,
    /// Bowles, Foundation Analysis and Design
    Bowles {
        edition: u8,
        section: &'static str,
    },
    /// AASHTO LRFD Bridge Design Specifications
    AashtoLrfd {
        year: u16,
        table: &'static str,
    },
    /// Fundamental soil mechanics (no specific code reference needed)
    SoilMechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Meyerhof1963 => "Meyerhof (1963), Can. Geotech. J. 1(1)".to_string(),
            CodeReference::Bowles { edition, section } => {
                format!("Bowles {}ed, Section {}", edition, section)
            }
            CodeReference::AashtoLrfd { year, table } => {
                format!("AASHTO LRFD {}, Table {}", year, table)
            }
            CodeReference::SoilMechanics => "Fundamental Soil Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Overburden and effective unit weight
    Stresses,
    /// Nc, Nq, Nγ
    BearingFactors,
    /// Shape, depth and inclination factors
    CorrectionFactors,
    /// Single-layer ultimate capacity
    UltimateCapacity,
    /// Two-layer interaction checks
    TwoLayer,
    /// Safety / resistance factors
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Stresses => "Stresses",
            EquationCategory::BearingFactors => "Bearing Capacity Factors",
            EquationCategory::CorrectionFactors => "Correction Factors",
            EquationCategory::UltimateCapacity => "Ultimate Capacity",
            EquationCategory::TwoLayer => "Two-Layer Soil",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for the reference (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Stresses => 1,
            EquationCategory::BearingFactors => 2,
            EquationCategory::CorrectionFactors => 3,
            EquationCategory::UltimateCapacity => 4,
            EquationCategory::TwoLayer => 5,
            EquationCategory::DesignChecks => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Df", "B", "φ")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m", "kPa", "°")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a bearing capacity equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All bearing capacity equations used in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// q̄ = Σ h·γ (moist above GWL, submerged below)
    EffectiveOverburden,
    /// γ̄ interpolated across [Df, Df + B)
    EffectiveUnitWeight,
    /// Kp = tan²(45° + φ/2)
    PassiveCoefficient,
    /// Nq = e^(π tan φ)·Kp
    BearingFactorNq,
    /// Nc = (Nq − 1)/tan φ
    BearingFactorNc,
    /// Nγ = (Nq − 1)·tan(1.4φ)
    BearingFactorNgamma,
    /// Sc, Sq, Sγ
    ShapeFactors,
    /// dc, dq, dγ
    DepthFactors,
    /// ic, iq, iγ
    InclinationFactors,
    /// q_ult for a homogeneous layer
    SingleLayerCapacity,
    /// H = (B/2)·tan(45° + φ1/2)
    InfluenceDepth,
    /// Ncs for clay over clay
    ClayOnClayCohesionFactor,
    /// Thickness-weighted φ and c over the influence depth
    AveragedParameters,
    /// Punching shear through the upper layer
    PunchingShearCapacity,
    /// q_adm = q_ult / FS
    AllowableCapacity,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::EffectiveOverburden => EquationMetadata {
                name: "Effective Overburden Pressure",
                description: "Effective vertical stress at footing level from all strata above Df",
                formula_plain: "q̄ = Σ h_moist·γ + h_sub·(γ_sat − γ_w)",
                reference: CodeReference::SoilMechanics,
                variables: vec![
                    Variable::new("h_moist", "Stratum thickness above the GWL and above Df", "m"),
                    Variable::new("h_sub", "Stratum thickness below the GWL and above Df", "m"),
                    Variable::new("γ", "Moist unit weight", "kN/m³"),
                    Variable::new("γ_sat", "Saturated unit weight", "kN/m³"),
                    Variable::new("γ_w", "Unit weight of water (9.81)", "kN/m³"),
                ],
                assumptions: vec!["Hydrostatic pore pressure below the GWL"],
                category: EquationCategory::Stresses,
                source_module: "soil/overburden.rs",
                source_function: "effective_overburden",
            },

            Equation::EffectiveUnitWeight => EquationMetadata {
                name: "Effective Unit Weight",
                description: "Unit weight for the Nγ term, blended by GWL position in the zone [Df, Df + B)",
                formula_plain: "γ̄ = γ' + ((GWL − Df)/B)·(γ − γ') for Df ≤ GWL < Df + B",
                reference: CodeReference::Bowles { edition: 5, section: "4-7" },
                variables: vec![
                    Variable::new("GWL", "Groundwater level depth", "m"),
                    Variable::new("γ'", "Submerged unit weight of the stratum at Df", "kN/m³"),
                ],
                assumptions: vec!["γ̄ = γ' when GWL < Df", "γ̄ = γ when GWL ≥ Df + B"],
                category: EquationCategory::Stresses,
                source_module: "soil/overburden.rs",
                source_function: "effective_overburden",
            },

            Equation::PassiveCoefficient => EquationMetadata {
                name: "Passive Earth Pressure Coefficient",
                description: "Rankine passive coefficient used by shape, depth and punching terms",
                formula_plain: "Kp = tan²(45° + φ/2)",
                reference: CodeReference::SoilMechanics,
                variables: vec![Variable::new("φ", "Friction angle", "°")],
                assumptions: vec![],
                category: EquationCategory::BearingFactors,
                source_module: "equations/meyerhof.rs",
                source_function: "passive_coefficient",
            },

            Equation::BearingFactorNq => EquationMetadata {
                name: "Bearing Capacity Factor Nq",
                description: "Surcharge bearing capacity factor",
                formula_plain: "Nq = e^(π·tan φ)·tan²(45° + φ/2)",
                reference: CodeReference::Meyerhof1963,
                variables: vec![Variable::new("φ", "Friction angle", "°")],
                assumptions: vec![],
                category: EquationCategory::BearingFactors,
                source_module: "equations/meyerhof.rs",
                source_function: "bearing_capacity_factors",
            },

            Equation::BearingFactorNc => EquationMetadata {
                name: "Bearing Capacity Factor Nc",
                description: "Cohesion bearing capacity factor",
                formula_plain: "Nc = (Nq − 1)/tan φ",
                reference: CodeReference::Meyerhof1963,
                variables: vec![Variable::new("φ", "Friction angle", "°")],
                assumptions: vec!["Tends to π + 2 as φ → 0"],
                category: EquationCategory::BearingFactors,
                source_module: "equations/meyerhof.rs",
                source_function: "bearing_capacity_factors",
            },

            Equation::BearingFactorNgamma => EquationMetadata {
                name: "Bearing Capacity Factor Nγ",
                description: "Self-weight bearing capacity factor",
                formula_plain: "Nγ = (Nq − 1)·tan(1.4φ)",
                reference: CodeReference::Meyerhof1963,
                variables: vec![Variable::new("φ", "Friction angle", "°")],
                assumptions: vec![],
                category: EquationCategory::BearingFactors,
                source_module: "equations/meyerhof.rs",
                source_function: "bearing_capacity_factors",
            },

            Equation::ShapeFactors => EquationMetadata {
                name: "Shape Factors",
                description: "Corrections for footing aspect ratio",
                formula_plain: "Sc = 1 + 0.2·Kp·B/L; Sq = Sγ = 1 + 0.1·Kp·B/L (φ > 10°), else 1",
                reference: CodeReference::Meyerhof1963,
                variables: vec![
                    Variable::new("B", "Footing width", "m"),
                    Variable::new("L", "Footing length", "m"),
                ],
                assumptions: vec!["φ = 10° uses Sq = Sγ = 1"],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/meyerhof.rs",
                source_function: "shape_factors",
            },

            Equation::DepthFactors => EquationMetadata {
                name: "Depth Factors",
                description: "Corrections for embedment",
                formula_plain: "dc = 1 + 0.2·√Kp·Df/B; dq = dγ = 1 + 0.1·√Kp·Df/B (φ > 10°), else 1",
                reference: CodeReference::Meyerhof1963,
                variables: vec![
                    Variable::new("Df", "Embedment depth", "m"),
                    Variable::new("B", "Footing width", "m"),
                ],
                assumptions: vec!["φ = 10° uses dq = dγ = 1"],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/meyerhof.rs",
                source_function: "depth_factors",
            },

            Equation::InclinationFactors => EquationMetadata {
                name: "Inclination Factors",
                description: "Corrections for load inclination from vertical",
                formula_plain: "ic = iq = (1 − θ/90)²; iγ = (1 − θ/φ)²",
                reference: CodeReference::Meyerhof1963,
                variables: vec![Variable::new("θ", "Load inclination from vertical", "°")],
                assumptions: vec!["iγ = 0 for φ = 0 with θ > 0"],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/meyerhof.rs",
                source_function: "inclination_factors",
            },

            Equation::SingleLayerCapacity => EquationMetadata {
                name: "Single-Layer Ultimate Capacity",
                description: "Meyerhof general bearing capacity equation for a homogeneous layer",
                formula_plain: "q_ult = c·Nc·Sc·dc·ic + q̄·Nq·Sq·dq·iq + 0.5·γ̄·B·Nγ·Sγ·dγ·iγ",
                reference: CodeReference::Meyerhof1963,
                variables: vec![
                    Variable::new("c", "Cohesion", "kPa"),
                    Variable::new("q̄", "Effective overburden at footing level", "kPa"),
                    Variable::new("γ̄", "Effective unit weight", "kN/m³"),
                ],
                assumptions: vec!["General shear failure"],
                category: EquationCategory::UltimateCapacity,
                source_module: "equations/meyerhof.rs",
                source_function: "ultimate_capacity",
            },

            Equation::InfluenceDepth => EquationMetadata {
                name: "Influence Depth",
                description: "Depth below the base reached by the failure wedge",
                formula_plain: "H = (B/2)·tan(45° + φ1/2)",
                reference: CodeReference::Bowles { edition: 5, section: "4-8" },
                variables: vec![Variable::new("φ1", "Friction angle of the embedment stratum", "°")],
                assumptions: vec!["No interaction when d1 ≥ H"],
                category: EquationCategory::TwoLayer,
                source_module: "equations/meyerhof.rs",
                source_function: "influence_depth",
            },

            Equation::ClayOnClayCohesionFactor => EquationMetadata {
                name: "Clay-on-Clay Cohesion Factor",
                description: "Corrected Nc for a clay stratum over another clay stratum",
                formula_plain: "CR < 0.7: Ncs = 1.5·d1/B + 5.14·CR; 0.7 ≤ CR ≤ 1: Ncs = 0.9·(1.5·d1/B + 5.14·CR); CR > 1: Ncs = 2·N1s·N2s/(N1s + N2s)",
                reference: CodeReference::Bowles { edition: 5, section: "4-8" },
                variables: vec![
                    Variable::new("CR", "Clay strength ratio c2/c1", "-"),
                    Variable::new("d1", "Embedment stratum thickness below the base", "m"),
                    Variable::new("N1s", "4.14 + 0.5·B/d1", "-"),
                    Variable::new("N2s", "4.14 + 1.1·B/d1", "-"),
                ],
                assumptions: vec!["Both strata frictionless"],
                category: EquationCategory::TwoLayer,
                source_module: "calculations/bilayer.rs",
                source_function: "clay_on_clay_factor",
            },

            Equation::AveragedParameters => EquationMetadata {
                name: "Averaged Strength Parameters",
                description: "Thickness-weighted φ and c over the influence depth",
                formula_plain: "φ_avg = (d1·φ1 + (H − d1)·φ2)/H; c_avg = (d1·c1 + (H − d1)·c2)/H",
                reference: CodeReference::Bowles { edition: 5, section: "4-8" },
                variables: vec![Variable::new("H", "Influence depth", "m")],
                assumptions: vec!["Sc, dc, ic stay at their layer-1 values"],
                category: EquationCategory::TwoLayer,
                source_module: "calculations/bilayer.rs",
                source_function: "averaged_capacity",
            },

            Equation::PunchingShearCapacity => EquationMetadata {
                name: "Punching Shear Capacity",
                description: "Lower-layer capacity plus shear on the punched perimeter through the upper layer",
                formula_plain: "q' = q_ult,2 + P·pv·Kp1·tan φ1/A + P·d1·c1/A; pv = Df·q̄·d1 + 9.81·d1²/2",
                reference: CodeReference::Bowles { edition: 5, section: "4-8" },
                variables: vec![
                    Variable::new("P", "Footing perimeter 2(B + L)", "m"),
                    Variable::new("A", "Footing area B·L", "m²"),
                    Variable::new("pv", "Vertical stress on the punched surface", "kN/m"),
                ],
                assumptions: vec!["Controlling capacity is min(q_ult,1, q')"],
                category: EquationCategory::TwoLayer,
                source_module: "calculations/bilayer.rs",
                source_function: "punching_shear_capacity",
            },

            Equation::AllowableCapacity => EquationMetadata {
                name: "Allowable Bearing Capacity",
                description: "Ultimate capacity reduced by the design code's safety factor",
                formula_plain: "q_adm = q_ult/FS (FS = 3.0, or 1/0.45 for AASHTO)",
                reference: CodeReference::AashtoLrfd { year: 2020, table: "10.5.5.2.2-1" },
                variables: vec![Variable::new("FS", "Factor of safety", "-")],
                assumptions: vec!["Unknown design codes use FS = 3.0"],
                category: EquationCategory::DesignChecks,
                source_module: "design_codes.rs",
                source_function: "allowable_capacity",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in reference order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            Stresses,
            BearingFactors,
            CorrectionFactors,
            UltimateCapacity,
            TwoLayer,
            DesignChecks,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::EffectiveOverburden,
    Equation::EffectiveUnitWeight,
    Equation::PassiveCoefficient,
    Equation::BearingFactorNq,
    Equation::BearingFactorNc,
    Equation::BearingFactorNgamma,
    Equation::ShapeFactors,
    Equation::DepthFactors,
    Equation::InclinationFactors,
    Equation::SingleLayerCapacity,
    Equation::InfluenceDepth,
    Equation::ClayOnClayCohesionFactor,
    Equation::AveragedParameters,
    Equation::PunchingShearCapacity,
    Equation::AllowableCapacity,
];

/// Generate the equations reference as markdown.
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Subgrade Equations Reference"));
/// assert!(markdown.contains("Two-Layer Soil"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Subgrade Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the bearing capacity engine.
Each equation includes its formula, reference, source location, and assumptions.

## Conventions

| Quantity | Convention |
|----------|------------|
| Depth | Positive downward from ground surface (m) |
| Stress, cohesion | kPa |
| Unit weight | kN/m³ |
| Angles | Degrees |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
