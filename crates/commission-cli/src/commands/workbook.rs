use clap::Args;
use serde_json::{json, Value};
use std::path::Path;

use commission_core::editing::validate_configuration;
use tracing::{info, warn};

use crate::{state, workbook};

/// Import the six workbook tables, replacing the saved state
#[derive(Args)]
pub struct ImportArgs {
    /// Directory holding the CSV tables
    #[arg(long)]
    pub dir: String,
}

pub fn run_import(args: ImportArgs, state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let imported = workbook::import_tables(Path::new(&args.dir))?;

    // Imports are accepted as-is; a bad distribution only blocks later edits
    if let Err(e) = validate_configuration(&imported.configuration) {
        warn!(error = %e, "imported configuration fails validation");
    }

    state::save(state_path, &imported)?;
    info!(dir = %args.dir, "workbook imported");

    let config = &imported.configuration;
    Ok(json!({
        "advisors": config.advisor_roster.len(),
        "months": config.monthly_goals.iter().map(|g| &g.month).collect::<Vec<_>>(),
        "current_month": config.current_month,
    }))
}

/// Export the saved state, or a blank template, as workbook tables
#[derive(Args)]
pub struct ExportArgs {
    /// Destination directory (created if missing)
    #[arg(long)]
    pub dir: String,

    /// Write the blank template instead of the saved data
    #[arg(long)]
    pub template: bool,
}

pub fn run_export(args: ExportArgs, state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let current = state::load_or_default(state_path)?;
    let dir = Path::new(&args.dir);

    let written = if args.template {
        workbook::export_template(dir, &current.configuration.advisor_roster)?
    } else {
        workbook::export_tables(dir, &current)?
    };

    Ok(json!({
        "written": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
    }))
}

pub fn run_reset(state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let removed = state::clear(state_path)?;
    Ok(json!({ "reset": removed, "state": state_path }))
}
