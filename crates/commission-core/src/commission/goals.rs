use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::aggregation::Totals;
use super::config::Configuration;
use super::tiers::resolve_rate;
use crate::types::*;

/// Goal percentage at which the month counts as "approaching" its target.
pub const APPROACHING_GOAL_PERCENT: Percent = dec!(60);

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Team-level goal attainment, leader pool and profit estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProfitResult {
    /// Target subscriptions for the current month (0 when not configured)
    pub current_month_goal: Count,
    /// Team subscriptions as a percentage of the goal
    pub goal_percentage: Percent,
    /// Gross revenue minus goal * subscription value
    pub gross_surplus_deficit: Money,
    /// Leader tier rate resolved from the goal percentage (decimal)
    pub leader_pool_rate: Rate,
    /// Real revenue * leader pool rate
    pub leader_pool: Money,
    /// Real revenue less advisor payments, leader pool and fixed costs
    pub estimated_profit: Money,
}

/// Goal progress band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// 100% or more of the goal reached
    Met,
    /// At least 60% of the goal reached
    Approaching,
    Behind,
}

/// Goal percentage capped at 100 plus its status band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub progress_percent: Percent,
    pub status: GoalStatus,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Derive goal attainment, surplus/deficit, leader pool and estimated profit.
///
/// A zero or negative goal reports 0% attainment rather than dividing.
pub fn derive_goal_and_profit(totals: &Totals, config: &Configuration) -> GoalProfitResult {
    let current_month_goal = config.current_month_goal();

    let goal_percentage = if current_month_goal > Decimal::ZERO {
        saturating_div(totals.subscriptions, current_month_goal)
            .saturating_mul(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    let gross_surplus_deficit = totals
        .gross_revenue
        .saturating_sub(current_month_goal.saturating_mul(config.subscription_value));

    let leader_pool_rate = resolve_rate(&config.leader_commission_tiers, goal_percentage);
    let leader_pool = totals.real_revenue.saturating_mul(leader_pool_rate);

    let estimated_profit = totals
        .real_revenue
        .saturating_sub(totals.total_payment)
        .saturating_sub(leader_pool)
        .saturating_sub(config.fixed_costs);

    GoalProfitResult {
        current_month_goal,
        goal_percentage,
        gross_surplus_deficit,
        leader_pool_rate,
        leader_pool,
        estimated_profit,
    }
}

/// Cap the goal percentage at 100 and classify it.
pub fn goal_progress(goal_percentage: Percent) -> GoalProgress {
    let progress_percent = goal_percentage.min(Decimal::ONE_HUNDRED);
    let status = if progress_percent >= Decimal::ONE_HUNDRED {
        GoalStatus::Met
    } else if progress_percent >= APPROACHING_GOAL_PERCENT {
        GoalStatus::Approaching
    } else {
        GoalStatus::Behind
    };
    GoalProgress {
        progress_percent,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::config::CommissionTier;

    fn config_with_goal(goal: Count) -> Configuration {
        let mut config = Configuration {
            leader_commission_tiers: vec![
                CommissionTier::new(dec!(100), dec!(1.5)),
                CommissionTier::new(dec!(80), dec!(1)),
            ],
            current_month: "Enero".into(),
            ..Configuration::default()
        };
        config.set_goal("Enero", goal);
        config
    }

    fn totals(subscriptions: Count, real_revenue: Money, total_payment: Money) -> Totals {
        Totals {
            subscriptions,
            gross_revenue: subscriptions * dec!(229000),
            real_revenue,
            commission_payment: total_payment,
            senior_bonus: Decimal::ZERO,
            total_payment,
        }
    }

    #[test]
    fn test_zero_goal_reports_zero_percent() {
        let cfg = config_with_goal(Decimal::ZERO);
        let result = derive_goal_and_profit(&totals(dec!(50), dec!(1000), dec!(10)), &cfg);
        assert_eq!(result.current_month_goal, Decimal::ZERO);
        assert_eq!(result.goal_percentage, Decimal::ZERO);
        assert_eq!(result.leader_pool_rate, Decimal::ZERO);
        assert_eq!(result.leader_pool, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_month_treated_as_no_goal() {
        let mut cfg = config_with_goal(dec!(100));
        cfg.current_month = "Diciembre".into();
        let result = derive_goal_and_profit(&totals(dec!(95), dec!(1000), dec!(0)), &cfg);
        assert_eq!(result.current_month_goal, Decimal::ZERO);
        assert_eq!(result.goal_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_ninety_five_percent_gets_first_leader_tier() {
        let cfg = config_with_goal(dec!(100));
        let result = derive_goal_and_profit(&totals(dec!(95), dec!(1000000), dec!(50000)), &cfg);
        assert_eq!(result.goal_percentage, dec!(95));
        assert_eq!(result.leader_pool_rate, dec!(0.01));
        assert_eq!(result.leader_pool, dec!(10000));
        // 1,000,000 - 50,000 - 10,000 - 0
        assert_eq!(result.estimated_profit, dec!(940000));
    }

    #[test]
    fn test_surplus_and_deficit() {
        let cfg = config_with_goal(dec!(100));
        let over = derive_goal_and_profit(&totals(dec!(110), dec!(0), dec!(0)), &cfg);
        assert_eq!(over.gross_surplus_deficit, dec!(2290000));

        let under = derive_goal_and_profit(&totals(dec!(90), dec!(0), dec!(0)), &cfg);
        assert_eq!(under.gross_surplus_deficit, dec!(-2290000));
    }

    #[test]
    fn test_fixed_costs_reduce_profit() {
        let mut cfg = config_with_goal(dec!(100));
        cfg.fixed_costs = dec!(300000);
        let result = derive_goal_and_profit(&totals(dec!(120), dec!(2000000), dec!(100000)), &cfg);
        assert_eq!(result.leader_pool_rate, dec!(0.015));
        assert_eq!(result.leader_pool, dec!(30000));
        assert_eq!(result.estimated_profit, dec!(1570000));
    }

    #[test]
    fn test_tiny_goal_clamps_percentage() {
        let cfg = config_with_goal(Decimal::new(1, 28));
        let result = derive_goal_and_profit(&totals(dec!(95), dec!(1000000), dec!(0)), &cfg);
        assert_eq!(result.goal_percentage, Decimal::MAX);
        assert_eq!(result.leader_pool_rate, dec!(0.015));
        assert_eq!(goal_progress(result.goal_percentage).status, GoalStatus::Met);
    }

    #[test]
    fn test_profit_clamps_at_lower_bound() {
        let mut cfg = config_with_goal(dec!(100));
        cfg.fixed_costs = Decimal::MAX;
        let result = derive_goal_and_profit(&totals(dec!(10), dec!(0), Decimal::MAX), &cfg);
        assert_eq!(result.estimated_profit, Decimal::MIN);
    }

    #[test]
    fn test_goal_progress_bands() {
        assert_eq!(goal_progress(dec!(135)).progress_percent, dec!(100));
        assert_eq!(goal_progress(dec!(135)).status, GoalStatus::Met);
        assert_eq!(goal_progress(dec!(100)).status, GoalStatus::Met);
        assert_eq!(goal_progress(dec!(60)).status, GoalStatus::Approaching);
        assert_eq!(goal_progress(dec!(59.99)).status, GoalStatus::Behind);
        assert_eq!(goal_progress(Decimal::ZERO).status, GoalStatus::Behind);
    }
}
