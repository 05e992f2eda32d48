use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::*;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Price of a single subscription used when nothing else is configured.
pub const DEFAULT_SUBSCRIPTION_VALUE: Money = dec!(229000);

/// Monthly bonus paid to each senior advisor when nothing else is configured.
pub const DEFAULT_SENIOR_BONUS_VALUE: Money = dec!(85000);

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// One step of a commission table. Applies to any metric value at or above
/// `min_threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionTier {
    /// Lower bound of the metric (subscriptions for advisors, goal % for leaders)
    pub min_threshold: Decimal,
    /// Commission rate in percent units (8 = 8%)
    pub rate_percent: Percent,
}

impl CommissionTier {
    pub fn new(min_threshold: Decimal, rate_percent: Percent) -> Self {
        Self {
            min_threshold,
            rate_percent,
        }
    }
}

/// Target subscriptions for one month label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyGoal {
    pub month: String,
    pub goal: Count,
}

impl MonthlyGoal {
    pub fn new(month: impl Into<String>, goal: Count) -> Self {
        Self {
            month: month.into(),
            goal,
        }
    }
}

/// Share of the leader pool assigned to one leadership role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderDistribution {
    pub role: String,
    /// Share in percent units; the full set is expected to sum to 100
    pub share_percent: Percent,
}

impl LeaderDistribution {
    pub fn new(role: impl Into<String>, share_percent: Percent) -> Self {
        Self {
            role: role.into(),
            share_percent,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration snapshot
// ---------------------------------------------------------------------------

/// Business rules in force for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Price of one subscription; gross revenue / value = subscriptions sold
    pub subscription_value: Money,
    /// Monthly fixed costs deducted from estimated profit
    pub fixed_costs: Money,
    /// Flat bonus for every advisor flagged as senior
    pub senior_bonus_value: Money,
    /// Team membership; order defines report row order
    pub advisor_roster: Vec<String>,
    /// Target subscriptions per month, in the order months were entered
    pub monthly_goals: Vec<MonthlyGoal>,
    /// Advisor tiers keyed on subscriptions sold
    pub advisor_commission_tiers: Vec<CommissionTier>,
    /// Leader tiers keyed on team goal percentage
    pub leader_commission_tiers: Vec<CommissionTier>,
    pub leader_distribution: Vec<LeaderDistribution>,
    /// Month label used to look up the active goal
    pub current_month: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            subscription_value: DEFAULT_SUBSCRIPTION_VALUE,
            fixed_costs: Decimal::ZERO,
            senior_bonus_value: DEFAULT_SENIOR_BONUS_VALUE,
            advisor_roster: Vec::new(),
            monthly_goals: Vec::new(),
            advisor_commission_tiers: Vec::new(),
            leader_commission_tiers: Vec::new(),
            leader_distribution: Vec::new(),
            current_month: String::new(),
        }
    }
}

impl Configuration {
    /// Goal configured for `month`, if any.
    pub fn goal_for(&self, month: &str) -> Option<Count> {
        self.monthly_goals
            .iter()
            .find(|g| g.month == month)
            .map(|g| g.goal)
    }

    pub fn has_goal(&self, month: &str) -> bool {
        self.goal_for(month).is_some()
    }

    /// Set the goal for `month`. An existing month keeps its position; a new
    /// one is appended.
    pub fn set_goal(&mut self, month: impl Into<String>, goal: Count) {
        let month = month.into();
        match self.monthly_goals.iter_mut().find(|g| g.month == month) {
            Some(existing) => existing.goal = goal,
            None => self.monthly_goals.push(MonthlyGoal { month, goal }),
        }
    }

    /// Goal for `current_month`, or zero when the month has no goal.
    pub fn current_month_goal(&self) -> Count {
        self.goal_for(&self.current_month).unwrap_or(Decimal::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Performance snapshot
// ---------------------------------------------------------------------------

/// Monthly figures recorded for one advisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceRecord {
    pub gross_revenue: Money,
    pub is_senior: bool,
}

impl PerformanceRecord {
    pub fn new(gross_revenue: Money, is_senior: bool) -> Self {
        Self {
            gross_revenue,
            is_senior,
        }
    }
}

/// Performance records keyed by advisor name.
pub type PerformanceSet = BTreeMap<String, PerformanceRecord>;
