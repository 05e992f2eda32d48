use clap::Args;
use serde_json::Value;

use commission_core::commission::calculate_commissions;
use commission_core::editing::{apply_performance_edit, parse_currency};
use tracing::info;

use crate::state;

/// Record an advisor's monthly figures and recalculate
#[derive(Args)]
pub struct RecordArgs {
    /// Advisor name as it appears on the roster
    #[arg(long)]
    pub advisor: String,

    /// Gross revenue, currency text accepted (e.g. "$ 2.290.000")
    #[arg(long, allow_hyphen_values = true)]
    pub gross_revenue: Option<String>,

    /// Whether the advisor earns the senior bonus
    #[arg(long)]
    pub senior: Option<bool>,
}

pub fn run_record(args: RecordArgs, state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut current = state::load_or_default(state_path)?;
    let advisor = args.advisor.trim();

    if !current
        .configuration
        .advisor_roster
        .iter()
        .any(|name| name == advisor)
    {
        return Err(format!("Advisor '{}' is not on the roster", advisor).into());
    }

    let gross_revenue = args.gross_revenue.as_deref().map(parse_currency);
    current.performance =
        apply_performance_edit(&current.performance, advisor, gross_revenue, args.senior)?;
    state::save(state_path, &current)?;
    info!(advisor, "performance recorded");

    let result = calculate_commissions(&current);
    Ok(serde_json::to_value(result)?)
}
