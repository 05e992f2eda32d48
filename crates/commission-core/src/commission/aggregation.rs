use serde::{Deserialize, Serialize};

use super::advisor::AdvisorResult;
use crate::types::*;

/// Team totals across all advisors on the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subscriptions: Count,
    pub gross_revenue: Money,
    pub real_revenue: Money,
    pub commission_payment: Money,
    pub senior_bonus: Money,
    pub total_payment: Money,
}

/// Sum per-advisor figures into team totals. An empty slice yields zeros;
/// sums past the decimal range stay at `Decimal::MAX`/`Decimal::MIN`.
pub fn aggregate(results: &[AdvisorResult]) -> Totals {
    results.iter().fold(Totals::default(), |acc, r| Totals {
        subscriptions: acc.subscriptions.saturating_add(r.subscriptions),
        gross_revenue: acc.gross_revenue.saturating_add(r.gross_revenue),
        real_revenue: acc.real_revenue.saturating_add(r.real_revenue),
        commission_payment: acc.commission_payment.saturating_add(r.commission_payment),
        senior_bonus: acc.senior_bonus.saturating_add(r.senior_bonus),
        total_payment: acc.total_payment.saturating_add(r.total_payment),
    })
}

impl Totals {
    /// True when no revenue was recorded and nothing is owed.
    pub fn is_empty(&self) -> bool {
        self.gross_revenue.is_zero() && self.total_payment.is_zero()
    }
}
