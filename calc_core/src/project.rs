//! # Project Data Structures
//!
//! The `Project` struct is the root container for one bearing capacity study.
//! Projects serialize to `.sgp` (Subgrade project) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, title, engineer, job info, timestamps)
//! ├── settings: AnalysisConfig (groundwater, load inclination, ε, design code)
//! ├── strata: Vec<Stratum> (raw stratum table, as entered)
//! ├── sweep: SweepParameters (Df, B and L/B values for the capacity table)
//! └── footings: Vec<FootingRecord> (loaded footings for the compliance check)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::project::Project;
//! use calc_core::soil::Stratum;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! project.strata.push(Stratum::new("E-1", "Stiff clay", 0.0, 8.0, 18.0, 19.5, 75.0, 0.0));
//! project.sweep.embedment_depths_m = vec![1.0, 1.5];
//! project.sweep.widths_m = vec![1.0, 2.0];
//!
//! let table = project.capacity_table().unwrap();
//! assert!(!table.is_empty());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{check_footings, generate_capacity_table, CapacityRow, ComplianceRow, FootingRecord};
use crate::design_codes::{DesignCode, BOWLES_FS_3};
use crate::errors::{CalcError, CalcResult};
use crate::soil::{SoilProfile, Stratum};

/// Current schema version for .sgp files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default ε added to cohesion and friction angle
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default groundwater depth (m), deep enough to be inactive
pub const DEFAULT_GROUNDWATER_LEVEL_M: f64 = 100.0;

/// Default L/B ratios used to derive candidate lengths
pub const DEFAULT_LENGTH_SCALARS: [f64; 6] = [1.0, 1.25, 1.5, 2.0, 5.0, 10.0];

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Analysis settings shared by every evaluation
    pub settings: AnalysisConfig,

    /// Stratum table, top-down, as entered (no ε adjustment)
    #[serde(default)]
    pub strata: Vec<Stratum>,

    /// Capacity table sweep
    #[serde(default)]
    pub sweep: SweepParameters,

    /// Footing schedule for the compliance check
    #[serde(default)]
    pub footings: Vec<FootingRecord>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "25-001")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert!(project.strata.is_empty());
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                title: String::new(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: AnalysisConfig::default(),
            strata: Vec::new(),
            sweep: SweepParameters::default(),
            footings: Vec::new(),
        }
    }

    /// Build the validated, ε-adjusted soil profile from the stratum table.
    pub fn soil_profile(&self) -> CalcResult<SoilProfile> {
        SoilProfile::new(self.strata.clone(), self.settings.epsilon)
    }

    /// Run the capacity table over the project's sweep.
    pub fn capacity_table(&self) -> CalcResult<Vec<CapacityRow>> {
        let profile = self.soil_profile()?;
        generate_capacity_table(
            &profile,
            &self.settings,
            &self.sweep.embedment_depths_m,
            &self.sweep.widths_m,
            &self.sweep.lengths_m(),
        )
    }

    /// Check the project's footing schedule.
    pub fn check_footings(&self) -> CalcResult<Vec<ComplianceRow>> {
        let profile = self.soil_profile()?;
        check_footings(&profile, &self.settings, &self.footings)
    }

    /// Add a footing to the schedule.
    pub fn add_footing(&mut self, record: FootingRecord) {
        self.footings.push(record);
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Report title / header line
    #[serde(default)]
    pub title: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Settings passed explicitly into every evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "groundwater_level_m": 3.5,
///   "load_inclination_deg": 0.0,
///   "epsilon": 1e-9,
///   "design_code": "Bowles_FS_3.0"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Depth of the water table below ground (m)
    pub groundwater_level_m: f64,

    /// Load inclination from vertical (degrees)
    pub load_inclination_deg: f64,

    /// Zero-strength guard and denominator tolerance
    pub epsilon: f64,

    /// Design code identifier (`Bowles_FS_3.0`, `AASHTO_2020`)
    pub design_code: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            groundwater_level_m: DEFAULT_GROUNDWATER_LEVEL_M,
            load_inclination_deg: 0.0,
            epsilon: DEFAULT_EPSILON,
            design_code: BOWLES_FS_3.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Validate input parameters.
    ///
    /// Load inclination is restricted to `0 ≤ Θ < 90°`: a horizontal load is
    /// not a bearing case, even though the inclination factors are defined there.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.groundwater_level_m.is_finite() {
            return Err(CalcError::invalid_input(
                "groundwater_level_m",
                self.groundwater_level_m.to_string(),
                "Groundwater level must be a finite depth",
            ));
        }
        if !(self.load_inclination_deg >= 0.0 && self.load_inclination_deg < 90.0) {
            return Err(CalcError::invalid_input(
                "load_inclination_deg",
                self.load_inclination_deg.to_string(),
                "Load inclination must be in [0, 90) degrees",
            ));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(CalcError::invalid_input(
                "epsilon",
                self.epsilon.to_string(),
                "Epsilon must be a small positive number",
            ));
        }
        Ok(())
    }

    /// Parsed design code; unknown identifiers fall back to FS = 3.0
    pub fn design_code(&self) -> DesignCode {
        DesignCode::from_identifier(&self.design_code)
    }
}

/// Geometry sweep for the capacity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepParameters {
    /// Embedment depths Df (m)
    pub embedment_depths_m: Vec<f64>,

    /// Footing widths B (m)
    pub widths_m: Vec<f64>,

    /// L/B ratios; candidate lengths are `B × scalar`
    pub length_scalars: Vec<f64>,
}

impl Default for SweepParameters {
    fn default() -> Self {
        SweepParameters {
            embedment_depths_m: Vec::new(),
            widths_m: Vec::new(),
            length_scalars: DEFAULT_LENGTH_SCALARS.to_vec(),
        }
    }
}

impl SweepParameters {
    /// Candidate lengths: every `width × scalar`, sorted ascending, duplicates removed.
    ///
    /// ```rust
    /// use calc_core::project::SweepParameters;
    ///
    /// let sweep = SweepParameters {
    ///     embedment_depths_m: vec![1.0],
    ///     widths_m: vec![1.0, 2.0],
    ///     length_scalars: vec![1.0, 2.0],
    /// };
    /// assert_eq!(sweep.lengths_m(), vec![1.0, 2.0, 4.0]);
    /// ```
    pub fn lengths_m(&self) -> Vec<f64> {
        let mut lengths: Vec<f64> = self
            .widths_m
            .iter()
            .flat_map(|&b| self.length_scalars.iter().map(move |&s| b * s))
            .collect();
        lengths.sort_by(f64::total_cmp);
        lengths.dedup();
        lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_codes::AASHTO_2020;

    fn sample_project() -> Project {
        let mut project = Project::new("Jane Engineer", "25-042", "Test Client");
        project.meta.title = "Bodega norte".to_string();
        project.strata = vec![
            Stratum::new("E-1", "Clayey sand", 0.0, 2.5, 17.5, 19.0, 10.0, 26.0),
            Stratum::new("E-2", "Soft clay", 2.5, 12.0, 16.0, 17.5, 35.0, 0.0),
        ];
        project.sweep.embedment_depths_m = vec![1.0, 2.0];
        project.sweep.widths_m = vec![1.0, 2.0];
        project
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.client, "Acme Corp");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings, AnalysisConfig::default());
    }

    #[test]
    fn test_project_serialization() {
        let project = sample_project();
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("Bowles_FS_3.0"));
        assert!(json.contains("Soft clay"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.title, "Bodega norte");
        assert_eq!(roundtrip.strata, project.strata);
        assert_eq!(roundtrip.sweep, project.sweep);
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"design_code": "AASHTO_2020"}"#).unwrap();
        assert_eq!(config.design_code, AASHTO_2020);
        assert_eq!(config.groundwater_level_m, DEFAULT_GROUNDWATER_LEVEL_M);
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert_eq!(config.design_code(), DesignCode::Aashto2020);
    }

    #[test]
    fn test_config_validation() {
        assert!(AnalysisConfig::default().validate().is_ok());

        let bad_theta = AnalysisConfig {
            load_inclination_deg: 90.0,
            ..AnalysisConfig::default()
        };
        assert_eq!(bad_theta.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let negative_theta = AnalysisConfig {
            load_inclination_deg: -5.0,
            ..AnalysisConfig::default()
        };
        assert_eq!(negative_theta.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let inclined = AnalysisConfig {
            load_inclination_deg: 89.9,
            ..AnalysisConfig::default()
        };
        assert!(inclined.validate().is_ok());

        let bad_eps = AnalysisConfig {
            epsilon: 0.0,
            ..AnalysisConfig::default()
        };
        assert!(bad_eps.validate().is_err());

        let bad_gwl = AnalysisConfig {
            groundwater_level_m: f64::NAN,
            ..AnalysisConfig::default()
        };
        assert!(bad_gwl.validate().is_err());
    }

    #[test]
    fn test_lengths_deduplicated_and_sorted() {
        let sweep = SweepParameters {
            embedment_depths_m: vec![],
            widths_m: vec![2.0, 1.0],
            length_scalars: vec![1.0, 2.0, 1.5],
        };
        assert_eq!(sweep.lengths_m(), vec![1.0, 1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_soil_profile_applies_epsilon() {
        let project = sample_project();
        let profile = project.soil_profile().unwrap();
        assert_eq!(profile.strata().len(), 2);
        assert_eq!(profile.strata()[1].friction_angle_deg, DEFAULT_EPSILON);
        // Raw table is untouched
        assert_eq!(project.strata[1].friction_angle_deg, 0.0);
    }

    #[test]
    fn test_capacity_table_from_project() {
        let project = sample_project();
        let rows = project.capacity_table().unwrap();
        // lengths = [1, 1.25, 1.5, 2, 2.5, 3, 4, 5, 10, 20]; B=1 keeps 10, B=2 keeps 7
        assert_eq!(rows.len(), 2 * (10 + 7));
        assert!(rows.iter().all(|r| r.length_m >= r.width_m));
    }

    #[test]
    fn test_check_footings_from_project() {
        let mut project = sample_project();
        project.add_footing(FootingRecord::new("Z-1", 1.5, 1.5, 1.2, 150.0));
        let rows = project.check_footings().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.support_name, "Z-1");
    }

    #[test]
    fn test_empty_strata_is_invalid_profile() {
        let project = Project::new("Engineer", "25-001", "Client");
        assert_eq!(project.soil_profile().unwrap_err().error_code(), "INVALID_PROFILE");
    }
}
