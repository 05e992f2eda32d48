use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::commission::Configuration;
use crate::error::CommissionError;
use crate::types::*;
use crate::CommissionResult;

/// Summary of the leader distribution of a configuration that passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionCheck {
    pub entries: usize,
    pub total_percent: Percent,
}

/// Policy checks applied before a configuration is saved.
///
/// Rejects negative monetary settings, and a non-empty leader distribution
/// whose shares do not round to 100%. An empty distribution is accepted.
pub fn validate_configuration(config: &Configuration) -> CommissionResult<DistributionCheck> {
    check_non_negative("subscription_value", config.subscription_value)?;
    check_non_negative("fixed_costs", config.fixed_costs)?;
    check_non_negative("senior_bonus_value", config.senior_bonus_value)?;

    let total_percent: Percent = config
        .leader_distribution
        .iter()
        .map(|d| d.share_percent)
        .sum();

    let rounded = total_percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if !config.leader_distribution.is_empty() && rounded != Decimal::ONE_HUNDRED {
        return Err(CommissionError::DistributionShareMismatch {
            total: total_percent,
        });
    }

    Ok(DistributionCheck {
        entries: config.leader_distribution.len(),
        total_percent,
    })
}

fn check_non_negative(field: &str, value: Money) -> CommissionResult<()> {
    if value < Decimal::ZERO {
        return Err(CommissionError::InvalidInput {
            field: field.into(),
            reason: "Value cannot be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::LeaderDistribution;
    use rust_decimal_macros::dec;

    fn with_shares(shares: &[Percent]) -> Configuration {
        Configuration {
            leader_distribution: shares
                .iter()
                .enumerate()
                .map(|(i, s)| LeaderDistribution::new(format!("Líder {}", i + 1), *s))
                .collect(),
            ..Configuration::default()
        }
    }

    #[test]
    fn test_empty_distribution_accepted() {
        let check = validate_configuration(&Configuration::default()).unwrap();
        assert_eq!(check.entries, 0);
        assert_eq!(check.total_percent, Decimal::ZERO);
    }

    #[test]
    fn test_exact_hundred_accepted() {
        let check = validate_configuration(&with_shares(&[dec!(60), dec!(40)])).unwrap();
        assert_eq!(check.total_percent, dec!(100));
    }

    #[test]
    fn test_rounding_tolerance() {
        assert!(validate_configuration(&with_shares(&[dec!(33.33), dec!(33.33), dec!(33.33)])).is_ok());
        assert!(validate_configuration(&with_shares(&[dec!(60), dec!(39.5)])).is_ok());
        assert!(validate_configuration(&with_shares(&[dec!(60), dec!(39.4)])).is_err());
    }

    #[test]
    fn test_mismatch_reports_total() {
        match validate_configuration(&with_shares(&[dec!(70), dec!(40)])) {
            Err(CommissionError::DistributionShareMismatch { total }) => {
                assert_eq!(total, dec!(110))
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_settings_rejected() {
        let config = Configuration {
            fixed_costs: dec!(-1),
            ..Configuration::default()
        };
        assert!(matches!(
            validate_configuration(&config),
            Err(CommissionError::InvalidInput { .. })
        ));
    }
}
