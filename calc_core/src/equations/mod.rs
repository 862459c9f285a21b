//! # Bearing Capacity Equations
//!
//! This module contains the fundamental shallow-foundation equations used in
//! calculations. Having equations in one place enables:
//! - Easy verification against references (Meyerhof, Bowles, AASHTO)
//! - Documentation of assumptions and conventions
//! - Consistent implementation across single-layer and two-layer checks
//!
//! ## Modules
//!
//! - [`meyerhof`] - Bearing capacity, shape, depth and inclination factors
//! - [`registry`] - Equation metadata for the generated reference document
//!
//! ## References
//!
//! - Meyerhof, G.G. (1963). Some recent research on the bearing capacity of foundations
//! - Bowles, J.E. Foundation Analysis and Design, 5th Edition, Chapter 4
//! - AASHTO LRFD Bridge Design Specifications, 2020

pub mod meyerhof;
pub mod registry;

pub use meyerhof::{
    bearing_capacity_factors,
    correction_factors,
    depth_factors,
    inclination_factors,
    influence_depth,
    passive_coefficient,
    shape_factors,
    ultimate_capacity,
    BearingCapacityFactors,
    CorrectionFactors,
    MeyerhofFactors,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
