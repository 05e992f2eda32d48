use clap::Args;
use serde_json::{json, Value};

use commission_core::editing::{apply_form, select_month, ConfigurationForm};
use tracing::info;

use crate::{input, state};

/// Edit the saved configuration. Omitted flags leave fields unchanged.
#[derive(Args)]
pub struct ConfigureArgs {
    /// Subscription value, currency text accepted (e.g. "$ 229.000")
    #[arg(long)]
    pub subscription_value: Option<String>,

    /// Monthly fixed costs, currency text accepted
    #[arg(long)]
    pub fixed_costs: Option<String>,

    /// Senior advisor bonus, currency text accepted
    #[arg(long)]
    pub senior_bonus: Option<String>,

    /// Text file with one advisor name per line
    #[arg(long)]
    pub roster_file: Option<String>,

    /// Text file with `month=goal` lines
    #[arg(long)]
    pub goals_file: Option<String>,

    /// Advisor tiers as `min:rate` rows (e.g. "0:5,10:8")
    #[arg(long)]
    pub advisor_tiers: Option<String>,

    /// Leader tiers as `min:rate` rows (e.g. "80:1,100:1.5")
    #[arg(long)]
    pub leader_tiers: Option<String>,

    /// Leader distribution as `role:share` rows (e.g. "Líder 1:60,Líder 2:40")
    #[arg(long)]
    pub distribution: Option<String>,
}

pub fn run_configure(args: ConfigureArgs, state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut current = state::load_or_default(state_path)?;

    let form = ConfigurationForm {
        subscription_value: args.subscription_value,
        fixed_costs: args.fixed_costs,
        senior_bonus_value: args.senior_bonus,
        roster: args.roster_file.as_deref().map(input::file::read_text).transpose()?,
        monthly_goals: args.goals_file.as_deref().map(input::file::read_text).transpose()?,
        advisor_tiers: args.advisor_tiers,
        leader_tiers: args.leader_tiers,
        leader_distribution: args.distribution,
    };

    current.configuration = apply_form(&current.configuration, &form)?;
    state::save(state_path, &current)?;
    info!(state = state_path, "configuration saved");

    Ok(serde_json::to_value(&current.configuration)?)
}

/// Switch the month used for goal tracking
#[derive(Args)]
pub struct SelectMonthArgs {
    /// Month label with a configured goal
    pub month: String,
}

pub fn run_select_month(args: SelectMonthArgs, state_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut current = state::load_or_default(state_path)?;
    current.configuration = select_month(&current.configuration, &args.month)?;
    state::save(state_path, &current)?;

    Ok(json!({
        "current_month": current.configuration.current_month,
        "goal": current.configuration.current_month_goal().to_string(),
    }))
}
