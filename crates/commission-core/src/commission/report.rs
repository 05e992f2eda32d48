use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, trace};

use super::advisor::{compute_advisor, AdvisorResult};
use super::aggregation::{aggregate, Totals};
use super::config::{Configuration, PerformanceRecord, PerformanceSet};
use super::distribution::{distribute, PoolShare};
use super::goals::{derive_goal_and_profit, goal_progress, GoalProfitResult, GoalProgress};
use crate::types::*;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Configuration and performance snapshots for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionInput {
    pub configuration: Configuration,
    pub performance: PerformanceSet,
}

/// Complete payout report for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub totals: Totals,
    /// One row per roster entry, in roster order
    pub per_advisor: Vec<AdvisorResult>,
    pub goal_profit: GoalProfitResult,
    pub goal_progress: GoalProgress,
    /// Leader pool split by role, in configuration order
    pub pool_breakdown: Vec<PoolShare>,
}

impl Report {
    /// True when any reported figure was clamped to the decimal range.
    pub fn has_saturated_figures(&self) -> bool {
        let t = &self.totals;
        let g = &self.goal_profit;
        let team = [
            t.subscriptions,
            t.gross_revenue,
            t.real_revenue,
            t.commission_payment,
            t.total_payment,
            g.goal_percentage,
            g.gross_surplus_deficit,
            g.leader_pool,
            g.estimated_profit,
        ];
        team.into_iter().any(is_saturated)
            || self.per_advisor.iter().any(|r| {
                is_saturated(r.subscriptions)
                    || is_saturated(r.commission_payment)
                    || is_saturated(r.total_payment)
            })
            || self.pool_breakdown.iter().any(|s| is_saturated(s.amount))
    }
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Build a [`Report`] from configuration and performance snapshots.
///
/// Advisors are evaluated in roster order; an advisor with no performance
/// record is treated as having no revenue and no senior flag. Identical inputs
/// always produce an identical report.
pub fn compute(config: &Configuration, performance: &PerformanceSet) -> Report {
    let absent = PerformanceRecord::default();

    let per_advisor: Vec<AdvisorResult> = config
        .advisor_roster
        .iter()
        .map(|name| {
            let record = performance.get(name).unwrap_or(&absent);
            let result = compute_advisor(name, record, config);
            trace!(
                advisor = %name,
                subscriptions = %result.subscriptions,
                rate = %result.commission_rate,
                total_payment = %result.total_payment,
                "advisor payout computed"
            );
            result
        })
        .collect();

    let totals = aggregate(&per_advisor);
    let goal_profit = derive_goal_and_profit(&totals, config);
    let pool_breakdown = distribute(goal_profit.leader_pool, &config.leader_distribution);

    debug!(
        advisors = per_advisor.len(),
        month = %config.current_month,
        goal_percentage = %goal_profit.goal_percentage,
        leader_pool = %goal_profit.leader_pool,
        estimated_profit = %goal_profit.estimated_profit,
        "commission report assembled"
    );

    Report {
        goal_progress: goal_progress(goal_profit.goal_percentage),
        totals,
        per_advisor,
        goal_profit,
        pool_breakdown,
    }
}

/// Compute the report and wrap it in the standard output envelope.
///
/// Warnings describe configuration gaps that silently zero part of the
/// result; they never prevent the calculation.
pub fn calculate_commissions(input: &CommissionInput) -> ComputationOutput<Report> {
    let start = Instant::now();
    let config = &input.configuration;
    let mut warnings = collect_warnings(input);

    let report = compute(config, &input.performance);
    if report.has_saturated_figures() {
        warnings.push(
            "Some figures exceed the decimal range and were clamped to its limits".into(),
        );
    }

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Tiered advisor commissions with goal-gated leader pool",
        &serde_json::json!({
            "current_month": config.current_month,
            "subscription_value": config.subscription_value.to_string(),
            "senior_bonus_value": config.senior_bonus_value.to_string(),
            "fixed_costs": config.fixed_costs.to_string(),
            "num_advisors": config.advisor_roster.len(),
            "num_advisor_tiers": config.advisor_commission_tiers.len(),
            "num_leader_tiers": config.leader_commission_tiers.len(),
        }),
        warnings,
        elapsed,
        report,
    )
}

fn collect_warnings(input: &CommissionInput) -> Vec<String> {
    let config = &input.configuration;
    let mut warnings = Vec::new();

    if config.advisor_commission_tiers.is_empty() {
        warnings.push("No advisor commission tiers configured; all advisor rates are 0%".into());
    }
    if config.leader_commission_tiers.is_empty() {
        warnings.push("No leader commission tiers configured; leader pool is 0".into());
    }
    if !config.has_goal(&config.current_month) {
        warnings.push(format!(
            "No goal configured for month '{}'; goal percentage is 0%",
            config.current_month
        ));
    }
    if config.subscription_value.is_zero() || config.subscription_value.is_sign_negative() {
        warnings.push("Subscription value is not positive; subscriptions are reported as 0".into());
    }
    for name in &config.advisor_roster {
        if !input.performance.contains_key(name) {
            warnings.push(format!("No performance recorded for advisor '{}'", name));
        }
    }

    warnings
}
