use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::LeaderDistribution;
use crate::types::Money;

/// Portion of the leader pool paid to one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolShare {
    pub role: String,
    pub amount: Money,
}

/// Split `leader_pool` across roles by their percentage share.
///
/// Input order is preserved. Shares are taken at face value; checking that
/// they sum to 100 is the job of whoever saves the configuration.
pub fn distribute(leader_pool: Money, distribution: &[LeaderDistribution]) -> Vec<PoolShare> {
    distribution
        .iter()
        .map(|d| PoolShare {
            role: d.role.clone(),
            amount: leader_pool.saturating_mul(d.share_percent / Decimal::ONE_HUNDRED),
        })
        .collect()
}
