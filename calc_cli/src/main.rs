//! # Subgrade CLI Application
//!
//! Command-line front end for the bearing capacity engine. Reads a `.sgp`
//! project file and prints the capacity table, the footing compliance check or
//! a single footing evaluation, as text or as JSON.
//!
//! ```bash
//! calc_cli init site.sgp
//! calc_cli table site.sgp --json
//! calc_cli table site.sgp --output table.json
//! calc_cli check site.sgp
//! calc_cli evaluate site.sgp --df 1.5 --width 2.0 --length 3.0
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use calc_core::calculations::bearing::{calculate, FootingCase};
use calc_core::calculations::{CapacityRow, ComplianceRow, FootingRecord};
use calc_core::file_io::{load_project, save_project, write_json};
use calc_core::project::Project;
use calc_core::soil::Stratum;
use calc_core::CalcError;

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Shallow foundation bearing capacity on layered soil")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write a sample project file
    Init {
        /// Path of the project file to create
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Generate the capacity table over the project's sweep
    Table {
        /// Project file
        path: PathBuf,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,

        /// Also write the rows as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the project's footing schedule against allowable capacity
    Check {
        /// Project file
        path: PathBuf,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,

        /// Also write the rows as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate a single footing
    Evaluate {
        /// Project file
        path: PathBuf,

        /// Embedment depth Df (m)
        #[arg(long)]
        df: f64,

        /// Footing width B (m)
        #[arg(long)]
        width: f64,

        /// Footing length L (m); defaults to the width
        #[arg(long)]
        length: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("calc_cli=info,calc_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        if let Some(calc_error) = e.downcast_ref::<CalcError>() {
            if let Ok(json) = serde_json::to_string_pretty(calc_error) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init { path, force } => init(&path, force),
        Commands::Table { path, json, output } => {
            let project = open(&path)?;
            let rows = project.capacity_table()?;
            info!(rows = rows.len(), "capacity table ready");
            if let Some(output) = &output {
                write_json(&rows, output).with_context(|| format!("writing {}", output.display()))?;
                info!(path = %output.display(), "rows exported");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_capacity_table(&project, &rows);
            }
            Ok(())
        }
        Commands::Check { path, json, output } => {
            let project = open(&path)?;
            let rows = project.check_footings()?;
            if let Some(output) = &output {
                write_json(&rows, output).with_context(|| format!("writing {}", output.display()))?;
                info!(path = %output.display(), "rows exported");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_compliance_table(&project, &rows);
            }
            Ok(())
        }
        Commands::Evaluate {
            path,
            df,
            width,
            length,
            json,
        } => {
            let project = open(&path)?;
            let profile = project.soil_profile()?;
            let footing = FootingCase::new(df, width, length.unwrap_or(width));
            let result = calculate(&profile, &footing, &project.settings)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("═══════════════════════════════════════");
            println!("  BEARING CAPACITY");
            println!("═══════════════════════════════════════");
            println!();
            println!("Footing:");
            println!("  Df = {:.2} m   B = {:.2} m   L = {:.2} m", footing.embedment_depth_m, footing.width_m, footing.length_m);
            println!("  GWL = {:.2} m   Θ = {:.1}°", project.settings.groundwater_level_m, project.settings.load_inclination_deg);
            println!();
            println!("Capacity:");
            println!("  q_ult (single layer) = {:.1} kPa", result.q_ult_single_layer_kpa);
            println!("  q_ult (two layer)    = {:.1} kPa  [{}]", result.q_ult_bilayer_kpa, result.bilayer_case);
            println!("  q_adm                = {:.1} kPa  (FS {:.2}, {})", result.allowable_capacity_kpa, result.factor_of_safety, project.settings.design_code());
            println!("═══════════════════════════════════════");
            Ok(())
        }
    }
}

fn open(path: &Path) -> anyhow::Result<Project> {
    let project = load_project(path).with_context(|| format!("loading {}", path.display()))?;
    info!(job = %project.meta.job_id, strata = project.strata.len(), "project loaded");
    Ok(project)
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    save_project(&sample_project(), path)?;
    info!(path = %path.display(), "sample project written");
    Ok(())
}

fn sample_project() -> Project {
    let mut project = Project::new("", "", "");
    project.meta.title = "Sample site".to_string();
    project.settings.groundwater_level_m = 3.0;
    project.strata = vec![
        Stratum::new("E-1", "Fill, silty sand", 0.0, 1.2, 17.0, 18.5, 0.0, 28.0),
        Stratum::new("E-2", "Stiff lean clay", 1.2, 4.0, 18.0, 19.5, 60.0, 0.0),
        Stratum::new("E-3", "Clayey sand", 4.0, 9.0, 18.5, 20.0, 15.0, 30.0),
        Stratum::new("E-4", "Dense gravelly sand", 9.0, 20.0, 19.5, 21.0, 0.0, 36.0),
    ];
    project.sweep.embedment_depths_m = vec![0.8, 1.5, 2.0, 3.5];
    project.sweep.widths_m = vec![1.0, 1.5, 2.0, 2.5];
    project.footings = vec![
        FootingRecord::new("Z-1", 1.5, 1.5, 1.5, 350.0),
        FootingRecord::new("Z-2", 2.0, 2.5, 1.5, 900.0),
        FootingRecord::new("Z-3", 1.0, 1.0, 0.8, 400.0),
    ];
    project
}

fn print_header(project: &Project) {
    let meta = &project.meta;
    if !meta.title.is_empty() {
        println!("{}", meta.title);
    }
    if !meta.job_id.is_empty() || !meta.client.is_empty() {
        println!("Job {}  {}", meta.job_id, meta.client);
    }
    println!("Design code: {}", project.settings.design_code());
    println!();
}

fn print_capacity_table(project: &Project, rows: &[CapacityRow]) {
    print_header(project);
    println!(
        "{:<6} {:>5} {:>5} {:>6} {:>5} {:>7} {:>6} {:>7} {:>6} {:>9} {:>9} {:>9}  {}",
        "Strat", "Df", "B", "L", "B/L", "c1", "φ1", "c2", "φ2", "q_ult,1", "q_ult", "q_adm", "Case"
    );
    for row in rows {
        println!(
            "{:<6} {:>5.2} {:>5.2} {:>6.2} {:>5.2} {:>7.1} {:>6.1} {:>7.1} {:>6.1} {:>9.1} {:>9.1} {:>9.1}  {}",
            row.stratum_id,
            row.embedment_depth_m,
            row.width_m,
            row.length_m,
            row.width_to_length_ratio,
            row.c1_kpa,
            row.phi1_deg,
            row.c2_kpa,
            row.phi2_deg,
            row.q_ult_single_layer_kpa,
            row.ultimate_capacity_kpa,
            row.allowable_capacity_kpa,
            row.bilayer_case,
        );
    }
}

fn print_compliance_table(project: &Project, rows: &[ComplianceRow]) {
    print_header(project);
    println!(
        "{:<8} {:>5} {:>5} {:>5} {:>8} {:>9} {:>9} {:>9}  {}",
        "Support", "B", "L", "Df", "P (kN)", "q (kPa)", "q_ult", "q_adm", "Status"
    );
    for row in rows {
        println!(
            "{:<8} {:>5.2} {:>5.2} {:>5.2} {:>8.1} {:>9.1} {:>9.1} {:>9.1}  {}",
            row.record.support_name,
            row.record.width_m,
            row.record.length_m,
            row.record.embedment_depth_m,
            row.record.design_load_kn,
            row.design_stress_kpa,
            row.ultimate_capacity_kpa,
            row.allowable_capacity_kpa,
            status_icon(row.passes),
        );
    }
    let failing = rows.iter().filter(|r| !r.passes).count();
    println!();
    println!("{} of {} footings pass", rows.len() - failing, rows.len());
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_project_runs() {
        let project = sample_project();
        let table = project.capacity_table().unwrap();
        assert!(!table.is_empty());
        assert!(table.iter().all(|r| r.length_m >= r.width_m));

        let checks = project.check_footings().unwrap();
        assert_eq!(checks.len(), 3);
    }

    #[test]
    fn test_cli_parses_table_output() {
        let cli = Cli::parse_from(["calc_cli", "table", "site.sgp", "-o", "rows.json"]);
        match cli.command {
            Commands::Table { json, output, .. } => {
                assert!(!json);
                assert_eq!(output, Some(PathBuf::from("rows.json")));
            }
            _ => panic!("expected table"),
        }
    }

    #[test]
    fn test_cli_parses_evaluate() {
        let cli = Cli::parse_from([
            "calc_cli", "evaluate", "site.sgp", "--df", "1.5", "--width", "2", "--json",
        ]);
        match cli.command {
            Commands::Evaluate { df, width, length, json, .. } => {
                assert_eq!(df, 1.5);
                assert_eq!(width, 2.0);
                assert_eq!(length, None);
                assert!(json);
            }
            _ => panic!("expected evaluate"),
        }
    }
}
