use clap::Args;
use serde_json::{json, Value};

use commission_core::commission::calculate_commissions;
use commission_core::editing::{select_month, validate_configuration};

use crate::input;

/// Arguments for the commission report
#[derive(Args)]
pub struct CalculateArgs {
    /// Path to JSON/YAML input with `configuration` and `performance`
    /// (defaults to piped stdin, then the saved state)
    #[arg(long)]
    pub input: Option<String>,

    /// Calculate for this month instead of the configured current month
    #[arg(long)]
    pub month: Option<String>,
}

pub fn run_calculate(args: CalculateArgs, state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut commission_input = input::resolve_commission_input(args.input.as_deref(), state_path)?;

    if let Some(ref month) = args.month {
        commission_input.configuration = select_month(&commission_input.configuration, month)?;
    }

    let result = calculate_commissions(&commission_input);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for configuration validation
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to JSON/YAML input with `configuration` and `performance`
    /// (defaults to piped stdin, then the saved state)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_validate(args: ValidateArgs, state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let commission_input = input::resolve_commission_input(args.input.as_deref(), state_path)?;
    let check = validate_configuration(&commission_input.configuration)?;
    Ok(json!({
        "valid": true,
        "distribution_entries": check.entries,
        "distribution_total_percent": check.total_percent.to_string(),
    }))
}
