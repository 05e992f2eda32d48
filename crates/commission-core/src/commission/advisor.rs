use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::config::{Configuration, PerformanceRecord};
use super::tiers::resolve_rate;
use crate::types::*;

/// Fraction of gross revenue recognised as real revenue, net of the fixed
/// non-configurable deduction.
pub const REAL_REVENUE_FACTOR: Rate = dec!(0.838427947598);

/// Derived payout figures for one advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorResult {
    pub name: String,
    pub gross_revenue: Money,
    pub is_senior: bool,
    /// Gross revenue expressed in subscriptions sold
    pub subscriptions: Count,
    /// Gross revenue scaled by [`REAL_REVENUE_FACTOR`]
    pub real_revenue: Money,
    /// Resolved tier rate (decimal)
    pub commission_rate: Rate,
    pub commission_payment: Money,
    pub senior_bonus: Money,
    /// Commission plus senior bonus
    pub total_payment: Money,
}

/// Compute one advisor's subscriptions, real revenue, tier rate and payout.
///
/// A non-positive `subscription_value` yields zero subscriptions instead of
/// dividing, so the advisor falls into whatever tier covers zero. Figures that
/// overflow the decimal range are clamped to `Decimal::MAX`/`Decimal::MIN`.
pub fn compute_advisor(
    name: &str,
    record: &PerformanceRecord,
    config: &Configuration,
) -> AdvisorResult {
    let gross_revenue = record.gross_revenue;

    let subscriptions = if config.subscription_value > Decimal::ZERO {
        saturating_div(gross_revenue, config.subscription_value)
    } else {
        Decimal::ZERO
    };

    let real_revenue = gross_revenue.saturating_mul(REAL_REVENUE_FACTOR);
    let commission_rate = resolve_rate(&config.advisor_commission_tiers, subscriptions);
    let commission_payment = real_revenue.saturating_mul(commission_rate);

    let senior_bonus = if record.is_senior {
        config.senior_bonus_value
    } else {
        Decimal::ZERO
    };

    AdvisorResult {
        name: name.to_string(),
        gross_revenue,
        is_senior: record.is_senior,
        subscriptions,
        real_revenue,
        commission_rate,
        commission_payment,
        senior_bonus,
        total_payment: commission_payment.saturating_add(senior_bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::config::CommissionTier;

    fn config() -> Configuration {
        Configuration {
            advisor_commission_tiers: vec![
                CommissionTier::new(dec!(0), dec!(5)),
                CommissionTier::new(dec!(10), dec!(8)),
            ],
            ..Configuration::default()
        }
    }

    #[test]
    fn test_ten_subscriptions_reach_second_tier() {
        let record = PerformanceRecord::new(dec!(2290000), false);
        let result = compute_advisor("Ana", &record, &config());

        assert_eq!(result.subscriptions, dec!(10));
        assert_eq!(result.commission_rate, dec!(0.08));
        assert_eq!(result.real_revenue, dec!(2290000) * REAL_REVENUE_FACTOR);
        assert!((result.real_revenue - dec!(1919999.99)).abs() < dec!(0.01));
        assert!((result.commission_payment - dec!(153599.99)).abs() < dec!(0.01));
        assert_eq!(result.senior_bonus, Decimal::ZERO);
        assert_eq!(result.total_payment, result.commission_payment);
    }

    #[test]
    fn test_senior_bonus_added() {
        let record = PerformanceRecord::new(dec!(458000), true);
        let result = compute_advisor("Luis", &record, &config());

        assert_eq!(result.subscriptions, dec!(2));
        assert_eq!(result.commission_rate, dec!(0.05));
        assert_eq!(result.senior_bonus, dec!(85000));
        assert_eq!(
            result.total_payment,
            result.commission_payment + dec!(85000)
        );
    }

    #[test]
    fn test_zero_subscription_value_guards_division() {
        let mut cfg = config();
        cfg.subscription_value = Decimal::ZERO;
        let record = PerformanceRecord::new(dec!(9000000), false);
        let result = compute_advisor("Ana", &record, &cfg);

        assert_eq!(result.subscriptions, Decimal::ZERO);
        assert_eq!(result.commission_rate, resolve_rate(&cfg.advisor_commission_tiers, Decimal::ZERO));
    }

    #[test]
    fn test_negative_subscription_value_guards_division() {
        let mut cfg = config();
        cfg.subscription_value = dec!(-1);
        let result = compute_advisor("Ana", &PerformanceRecord::new(dec!(500), false), &cfg);
        assert_eq!(result.subscriptions, Decimal::ZERO);
    }

    #[test]
    fn test_tiny_subscription_value_clamps_subscriptions() {
        let mut cfg = config();
        cfg.subscription_value = Decimal::new(1, 28);
        let result = compute_advisor("Ana", &PerformanceRecord::new(dec!(2290000), false), &cfg);

        assert_eq!(result.subscriptions, Decimal::MAX);
        assert_eq!(result.commission_rate, dec!(0.08));
        assert!(!is_saturated(result.commission_payment));
    }

    #[test]
    fn test_oversized_rate_clamps_commission() {
        let mut cfg = config();
        cfg.advisor_commission_tiers = vec![CommissionTier::new(dec!(0), dec!(1000000))];
        let record = PerformanceRecord::new(dec!(10000000000000000000000000), true);
        let result = compute_advisor("Ana", &record, &cfg);

        assert_eq!(result.commission_rate, dec!(10000));
        assert_eq!(result.commission_payment, Decimal::MAX);
        assert_eq!(result.total_payment, Decimal::MAX);
    }

    #[test]
    fn test_empty_record_yields_zero_payout() {
        let result = compute_advisor("Nadie", &PerformanceRecord::default(), &config());
        assert_eq!(result.gross_revenue, Decimal::ZERO);
        assert_eq!(result.real_revenue, Decimal::ZERO);
        assert_eq!(result.commission_payment, Decimal::ZERO);
        assert_eq!(result.total_payment, Decimal::ZERO);
    }
}
