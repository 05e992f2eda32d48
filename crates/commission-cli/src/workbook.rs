//! Tabular import/export: six CSV tables in one directory, one per sheet of
//! the commission workbook.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use commission_core::commission::config::{DEFAULT_SENIOR_BONUS_VALUE, DEFAULT_SUBSCRIPTION_VALUE};
use commission_core::commission::{
    CommissionInput, CommissionTier, Configuration, LeaderDistribution, PerformanceRecord,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const PERFORMANCE_TABLE: &str = "performance.csv";
pub const GENERAL_CONFIG_TABLE: &str = "general_config.csv";
pub const MONTHLY_GOALS_TABLE: &str = "monthly_goals.csv";
pub const ADVISOR_TIERS_TABLE: &str = "advisor_commission_tiers.csv";
pub const LEADER_TIERS_TABLE: &str = "leader_commission_tiers.csv";
pub const LEADER_DISTRIBUTION_TABLE: &str = "leader_distribution.csv";

const SENIOR_YES: &str = "Si";
const SENIOR_NO: &str = "No";

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PerformanceRow {
    advisor_name: String,
    gross_revenue: String,
    senior: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct GeneralConfigRow {
    subscription_value: String,
    fixed_costs: String,
    senior_bonus_value: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct MonthlyGoalRow {
    month: String,
    target_subscriptions: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AdvisorTierRow {
    min_subscriptions: String,
    rate_percent: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct LeaderTierRow {
    min_goal_percent: String,
    rate_percent: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct DistributionRow {
    role: String,
    share_percent: String,
}

fn cell(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Read the six tables from `dir` into fresh configuration and performance
/// snapshots.
///
/// A missing table counts as empty. The roster follows performance row
/// order and the current month is the first month with a goal.
pub fn import_tables(dir: &Path) -> Result<CommissionInput, Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()).into());
    }

    let performance_rows: Vec<PerformanceRow> = read_table(dir, PERFORMANCE_TABLE)?;
    let general: Vec<GeneralConfigRow> = read_table(dir, GENERAL_CONFIG_TABLE)?;
    let goal_rows: Vec<MonthlyGoalRow> = read_table(dir, MONTHLY_GOALS_TABLE)?;
    let advisor_tier_rows: Vec<AdvisorTierRow> = read_table(dir, ADVISOR_TIERS_TABLE)?;
    let leader_tier_rows: Vec<LeaderTierRow> = read_table(dir, LEADER_TIERS_TABLE)?;
    let distribution_rows: Vec<DistributionRow> = read_table(dir, LEADER_DISTRIBUTION_TABLE)?;

    let mut input = CommissionInput::default();
    let config = &mut input.configuration;

    let general = general.into_iter().next().unwrap_or_default();
    config.subscription_value =
        non_zero(cell(&general.subscription_value)).unwrap_or(DEFAULT_SUBSCRIPTION_VALUE);
    config.fixed_costs = cell(&general.fixed_costs).unwrap_or(Decimal::ZERO);
    config.senior_bonus_value =
        non_zero(cell(&general.senior_bonus_value)).unwrap_or(DEFAULT_SENIOR_BONUS_VALUE);

    for row in performance_rows {
        let name = row.advisor_name.trim().to_string();
        if name.is_empty() {
            warn!("skipping performance row without advisor name");
            continue;
        }
        let record = PerformanceRecord::new(
            cell(&row.gross_revenue).unwrap_or(Decimal::ZERO),
            row.senior.trim().eq_ignore_ascii_case("si"),
        );
        if !config.advisor_roster.contains(&name) {
            config.advisor_roster.push(name.clone());
        }
        input.performance.insert(name, record);
    }

    for row in goal_rows {
        let month = row.month.trim();
        if month.is_empty() {
            continue;
        }
        if let Some(goal) = non_zero(cell(&row.target_subscriptions)) {
            if config.current_month.is_empty() {
                config.current_month = month.to_string();
            }
            config.set_goal(month, goal);
        }
    }

    config.advisor_commission_tiers = advisor_tier_rows
        .iter()
        .filter_map(|r| Some(CommissionTier::new(cell(&r.min_subscriptions)?, cell(&r.rate_percent)?)))
        .collect();
    config.leader_commission_tiers = leader_tier_rows
        .iter()
        .filter_map(|r| Some(CommissionTier::new(cell(&r.min_goal_percent)?, cell(&r.rate_percent)?)))
        .collect();
    config.leader_distribution = distribution_rows
        .iter()
        .filter(|r| !r.role.trim().is_empty())
        .filter_map(|r| Some(LeaderDistribution::new(r.role.trim(), cell(&r.share_percent)?)))
        .collect();

    debug!(
        advisors = config.advisor_roster.len(),
        months = config.monthly_goals.len(),
        "workbook imported"
    );
    Ok(input)
}

fn read_table<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    let path = dir.join(name);
    if !path.exists() {
        debug!(table = name, "table missing, treated as empty");
        return Ok(Vec::new());
    }
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(&path)
        .map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: T = record.map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?;
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Write `input` as the six tables into `dir`, creating it if needed.
/// Returns the written paths.
pub fn export_tables(dir: &Path, input: &CommissionInput) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let config = &input.configuration;

    let performance: Vec<PerformanceRow> = config
        .advisor_roster
        .iter()
        .map(|name| {
            let record = input.performance.get(name).copied().unwrap_or_default();
            PerformanceRow {
                advisor_name: name.clone(),
                gross_revenue: record.gross_revenue.to_string(),
                senior: senior_flag(record.is_senior).into(),
            }
        })
        .collect();

    let general = vec![GeneralConfigRow {
        subscription_value: config.subscription_value.to_string(),
        fixed_costs: config.fixed_costs.to_string(),
        senior_bonus_value: config.senior_bonus_value.to_string(),
    }];

    let goals = config
        .monthly_goals
        .iter()
        .map(|g| MonthlyGoalRow {
            month: g.month.clone(),
            target_subscriptions: g.goal.to_string(),
        })
        .collect();

    write_workbook(dir, performance, general, goals, config)
}

/// Write a blank template: roster names with empty revenue, default general
/// settings and sample goals, tiers and distribution.
pub fn export_template(dir: &Path, roster: &[String]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let performance = roster
        .iter()
        .map(|name| PerformanceRow {
            advisor_name: name.clone(),
            gross_revenue: String::new(),
            senior: SENIOR_NO.into(),
        })
        .collect();

    let general = vec![GeneralConfigRow {
        subscription_value: DEFAULT_SUBSCRIPTION_VALUE.to_string(),
        fixed_costs: Decimal::ZERO.to_string(),
        senior_bonus_value: DEFAULT_SENIOR_BONUS_VALUE.to_string(),
    }];

    let goals = vec![
        MonthlyGoalRow {
            month: "Enero".into(),
            target_subscriptions: "100".into(),
        },
        MonthlyGoalRow {
            month: "Febrero".into(),
            target_subscriptions: "120".into(),
        },
    ];

    write_workbook(dir, performance, general, goals, &template_rules())
}

fn template_rules() -> Configuration {
    Configuration {
        advisor_commission_tiers: vec![
            CommissionTier::new(dec!(0), dec!(5)),
            CommissionTier::new(dec!(10), dec!(8)),
        ],
        leader_commission_tiers: vec![
            CommissionTier::new(dec!(80), dec!(1)),
            CommissionTier::new(dec!(100), dec!(1.5)),
        ],
        leader_distribution: vec![
            LeaderDistribution::new("Líder 1", dec!(60)),
            LeaderDistribution::new("Líder 2", dec!(40)),
        ],
        ..Configuration::default()
    }
}

fn write_workbook(
    dir: &Path,
    performance: Vec<PerformanceRow>,
    general: Vec<GeneralConfigRow>,
    goals: Vec<MonthlyGoalRow>,
    rules: &Configuration,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create '{}': {}", dir.display(), e))?;

    let advisor_tiers: Vec<AdvisorTierRow> = rules
        .advisor_commission_tiers
        .iter()
        .map(|t| AdvisorTierRow {
            min_subscriptions: t.min_threshold.to_string(),
            rate_percent: t.rate_percent.to_string(),
        })
        .collect();
    let leader_tiers: Vec<LeaderTierRow> = rules
        .leader_commission_tiers
        .iter()
        .map(|t| LeaderTierRow {
            min_goal_percent: t.min_threshold.to_string(),
            rate_percent: t.rate_percent.to_string(),
        })
        .collect();
    let distribution: Vec<DistributionRow> = rules
        .leader_distribution
        .iter()
        .map(|d| DistributionRow {
            role: d.role.clone(),
            share_percent: d.share_percent.to_string(),
        })
        .collect();

    Ok(vec![
        write_table(
            dir,
            PERFORMANCE_TABLE,
            &["advisor_name", "gross_revenue", "senior"],
            &performance,
        )?,
        write_table(
            dir,
            GENERAL_CONFIG_TABLE,
            &["subscription_value", "fixed_costs", "senior_bonus_value"],
            &general,
        )?,
        write_table(
            dir,
            MONTHLY_GOALS_TABLE,
            &["month", "target_subscriptions"],
            &goals,
        )?,
        write_table(
            dir,
            ADVISOR_TIERS_TABLE,
            &["min_subscriptions", "rate_percent"],
            &advisor_tiers,
        )?,
        write_table(
            dir,
            LEADER_TIERS_TABLE,
            &["min_goal_percent", "rate_percent"],
            &leader_tiers,
        )?,
        write_table(
            dir,
            LEADER_DISTRIBUTION_TABLE,
            &["role", "share_percent"],
            &distribution,
        )?,
    ])
}

fn write_table<T: Serialize>(
    dir: &Path,
    name: &str,
    headers: &[&str],
    rows: &[T],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = dir.join(name);
    // Headers are written explicitly so empty tables still carry them
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(|e| format!("Failed to create '{}': {}", path.display(), e))?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(path)
}

fn senior_flag(is_senior: bool) -> &'static str {
    if is_senior {
        SENIOR_YES
    } else {
        SENIOR_NO
    }
}
