//! Commission engine: tier resolution, per-advisor payouts, team totals,
//! goal attainment, leader pool and its distribution.
//!
//! Every function in this module is pure. Callers pass immutable
//! [`Configuration`] and [`PerformanceSet`] snapshots and receive a fresh
//! [`Report`]; nothing is cached between calls.

pub mod advisor;
pub mod aggregation;
pub mod config;
pub mod distribution;
pub mod goals;
pub mod report;
pub mod tiers;

pub use advisor::{compute_advisor, AdvisorResult, REAL_REVENUE_FACTOR};
pub use aggregation::{aggregate, Totals};
pub use config::{
    CommissionTier, Configuration, LeaderDistribution, MonthlyGoal, PerformanceRecord,
    PerformanceSet,
};
pub use distribution::{distribute, PoolShare};
pub use goals::{derive_goal_and_profit, goal_progress, GoalProfitResult, GoalProgress, GoalStatus};
pub use report::{calculate_commissions, compute, CommissionInput, Report};
pub use tiers::resolve_rate;
