//! # File I/O Module
//!
//! Handles project file operations:
//! - **Atomic writes**: [`write_atomic`] backs project saves and table exports
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Projects are saved as `.sgp` (Subgrade project) files containing JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{load_project, save_project};
//! use calc_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("myproject.sgp");
//!
//! save_project(&project, path).unwrap();
//! let loaded = load_project(path).unwrap();
//! assert_eq!(loaded.meta.job_id, "25-001");
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Write `contents` to `path` so that readers see either the old file or the
/// complete new one, never a partial write.
///
/// The bytes go to a sibling `<name>.tmp`, are synced to disk, and the temp
/// file is renamed over `path`. On failure the temp file is removed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);
    let io_error = |operation: &str, target: &Path, e: std::io::Error| {
        CalcError::file_error(operation, target.display().to_string(), e.to_string())
    };

    let written = File::create(&tmp_path)
        .map_err(|e| io_error("create temp file", &tmp_path, e))
        .and_then(|mut file| {
            file.write_all(contents)
                .map_err(|e| io_error("write temp file", &tmp_path, e))?;
            file.sync_all()
                .map_err(|e| io_error("sync temp file", &tmp_path, e))
        })
        .and_then(|()| fs::rename(&tmp_path, path).map_err(|e| io_error("rename to final", path, e)));

    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}

/// Serialize any value as pretty JSON and write it atomically.
///
/// Used for project files and for exporting result tables.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(path, json.as_bytes())?;
    debug!(path = %path.display(), bytes = json.len(), "json written");
    Ok(())
}

/// Save a project to a `.sgp` file.
///
/// # Example
///
/// ```rust,no_run
/// use calc_core::file_io::save_project;
/// use calc_core::project::Project;
/// use std::path::Path;
///
/// let project = Project::new("Engineer", "25-001", "Client");
/// save_project(&project, Path::new("myproject.sgp"))?;
/// # Ok::<(), calc_core::errors::CalcError>(())
/// ```
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    write_json(project, path)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    debug!(
        path = %path.display(),
        strata = project.strata.len(),
        footings = project.footings.len(),
        "project loaded"
    );
    Ok(project)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // 0.x: a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}
