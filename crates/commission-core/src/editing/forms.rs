use std::str::FromStr;

use rust_decimal::Decimal;

use super::currency::parse_currency;
use super::validation::validate_configuration;
use crate::commission::{
    CommissionTier, Configuration, LeaderDistribution, MonthlyGoal, PerformanceRecord,
    PerformanceSet,
};
use crate::error::CommissionError;
use crate::types::*;
use crate::CommissionResult;

// ---------------------------------------------------------------------------
// Text fields
// ---------------------------------------------------------------------------

/// One advisor name per line; surrounding whitespace trimmed, blank lines dropped.
pub fn parse_roster(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub fn format_roster(roster: &[String]) -> String {
    roster.join("\n")
}

/// Parse `month=goal` lines, keeping first-seen month order.
///
/// Lines without a month, without a goal, or with a non-numeric goal are
/// skipped. Goals are truncated to whole subscriptions. A repeated month
/// keeps its first position but takes the later goal.
pub fn parse_monthly_goals(text: &str) -> Vec<MonthlyGoal> {
    let mut goals: Vec<MonthlyGoal> = Vec::new();
    for line in text.lines() {
        let mut parts = line.split('=').map(str::trim);
        let (Some(month), Some(goal)) = (parts.next(), parts.next()) else {
            continue;
        };
        if month.is_empty() || goal.is_empty() {
            continue;
        }
        let Ok(goal) = Decimal::from_str(goal) else {
            continue;
        };
        let goal = goal.trunc();
        match goals.iter_mut().find(|g| g.month == month) {
            Some(entry) => entry.goal = goal,
            None => goals.push(MonthlyGoal::new(month, goal)),
        }
    }
    goals
}

pub fn format_monthly_goals(goals: &[MonthlyGoal]) -> String {
    goals
        .iter()
        .map(|g| format!("{}={}", g.month, g.goal))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse `min:rate` rows separated by commas or newlines. Incomplete or
/// non-numeric rows are dropped.
pub fn parse_tier_rows(text: &str) -> Vec<CommissionTier> {
    split_rows(text)
        .filter_map(|row| {
            let (min, rate) = row.split_once(':')?;
            let min = Decimal::from_str(min.trim()).ok()?;
            let rate = Decimal::from_str(rate.trim()).ok()?;
            Some(CommissionTier::new(min, rate))
        })
        .collect()
}

/// Parse `role:share` rows separated by commas or newlines. The share is
/// taken after the last `:` so role names may contain colons.
pub fn parse_distribution_rows(text: &str) -> Vec<LeaderDistribution> {
    split_rows(text)
        .filter_map(|row| {
            let (role, share) = row.rsplit_once(':')?;
            let role = role.trim();
            if role.is_empty() {
                return None;
            }
            let share = Decimal::from_str(share.trim()).ok()?;
            Some(LeaderDistribution::new(role, share))
        })
        .collect()
}

fn split_rows(text: &str) -> impl Iterator<Item = &str> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Configuration edits
// ---------------------------------------------------------------------------

/// Raw text for each editable configuration field. `None` leaves the field
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationForm {
    pub subscription_value: Option<String>,
    pub fixed_costs: Option<String>,
    pub senior_bonus_value: Option<String>,
    pub roster: Option<String>,
    pub monthly_goals: Option<String>,
    pub advisor_tiers: Option<String>,
    pub leader_tiers: Option<String>,
    pub leader_distribution: Option<String>,
}

/// Apply a form to `config`, returning the new configuration only if it
/// passes [`validate_configuration`].
///
/// The current month is kept when it still has a goal, otherwise it moves to
/// the first month entered (or empty when there are none).
pub fn apply_form(config: &Configuration, form: &ConfigurationForm) -> CommissionResult<Configuration> {
    let mut next = config.clone();

    if let Some(text) = &form.subscription_value {
        next.subscription_value = parse_currency(text);
    }
    if let Some(text) = &form.fixed_costs {
        next.fixed_costs = parse_currency(text);
    }
    if let Some(text) = &form.senior_bonus_value {
        next.senior_bonus_value = parse_currency(text);
    }
    if let Some(text) = &form.roster {
        next.advisor_roster = parse_roster(text);
    }
    if let Some(text) = &form.advisor_tiers {
        next.advisor_commission_tiers = parse_tier_rows(text);
    }
    if let Some(text) = &form.leader_tiers {
        next.leader_commission_tiers = parse_tier_rows(text);
    }
    if let Some(text) = &form.leader_distribution {
        next.leader_distribution = parse_distribution_rows(text);
    }
    if let Some(text) = &form.monthly_goals {
        next.monthly_goals = parse_monthly_goals(text);
        if !next.has_goal(&next.current_month) {
            next.current_month = next
                .monthly_goals
                .first()
                .map(|g| g.month.clone())
                .unwrap_or_default();
        }
    }

    validate_configuration(&next)?;
    Ok(next)
}

/// Return a configuration with `month` as the current month.
pub fn select_month(config: &Configuration, month: &str) -> CommissionResult<Configuration> {
    if !config.has_goal(month) {
        return Err(CommissionError::UnknownMonth(month.to_string()));
    }
    Ok(Configuration {
        current_month: month.to_string(),
        ..config.clone()
    })
}

/// Return a performance set with one advisor's record created or updated.
pub fn apply_performance_edit(
    performance: &PerformanceSet,
    advisor: &str,
    gross_revenue: Option<Money>,
    is_senior: Option<bool>,
) -> CommissionResult<PerformanceSet> {
    let advisor = advisor.trim();
    if advisor.is_empty() {
        return Err(CommissionError::InvalidInput {
            field: "advisor".into(),
            reason: "Advisor name cannot be empty".into(),
        });
    }

    let mut next = performance.clone();
    let record = next
        .entry(advisor.to_string())
        .or_insert_with(PerformanceRecord::default);
    if let Some(amount) = gross_revenue {
        record.gross_revenue = amount;
    }
    if let Some(flag) = is_senior {
        record.is_senior = flag;
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_roster_trims_and_skips_blanks() {
        let roster = parse_roster("  Ana \n\nLuis\n   \nCarla");
        assert_eq!(roster, vec!["Ana", "Luis", "Carla"]);
        assert_eq!(format_roster(&roster), "Ana\nLuis\nCarla");
    }

    #[test]
    fn test_parse_monthly_goals() {
        let goals = parse_monthly_goals("Enero = 100\nFebrero=120.7\nMarzo=\n=50\nAbril=x\nEnero=90");
        assert_eq!(
            goals,
            vec![MonthlyGoal::new("Enero", dec!(90)), MonthlyGoal::new("Febrero", dec!(120))]
        );
    }

    #[test]
    fn test_format_monthly_goals_keeps_typed_order() {
        let text = "Marzo=100\nAbril=120\nEnero=80";
        assert_eq!(format_monthly_goals(&parse_monthly_goals(text)), text);
    }

    #[test]
    fn test_apply_form_first_typed_month_becomes_current() {
        let form = ConfigurationForm {
            monthly_goals: Some("Marzo=100\nAbril=120".into()),
            ..ConfigurationForm::default()
        };
        let next = apply_form(&Configuration::default(), &form).unwrap();
        assert_eq!(next.current_month, "Marzo");
        assert_eq!(format_monthly_goals(&next.monthly_goals), "Marzo=100\nAbril=120");
    }

    #[test]
    fn test_parse_tier_rows_drops_invalid() {
        let tiers = parse_tier_rows("0:5, 10:8, abc:3, 20, 30:");
        assert_eq!(
            tiers,
            vec![
                CommissionTier::new(dec!(0), dec!(5)),
                CommissionTier::new(dec!(10), dec!(8)),
            ]
        );
    }

    #[test]
    fn test_parse_distribution_rows() {
        let dist = parse_distribution_rows("Líder 1:60\nLíder 2: 40\n:10\nCoord: x");
        assert_eq!(
            dist,
            vec![
                LeaderDistribution::new("Líder 1", dec!(60)),
                LeaderDistribution::new("Líder 2", dec!(40)),
            ]
        );
    }

    #[test]
    fn test_apply_form_moves_current_month() {
        let mut config = Configuration::default();
        config.current_month = "Diciembre".into();
        let form = ConfigurationForm {
            monthly_goals: Some("Enero=100\nFebrero=120".into()),
            subscription_value: Some("$ 250.000".into()),
            ..ConfigurationForm::default()
        };
        let next = apply_form(&config, &form).unwrap();
        assert_eq!(next.current_month, "Enero");
        assert_eq!(next.subscription_value, dec!(250000));
        // original snapshot untouched
        assert_eq!(config.subscription_value, dec!(229000));
    }

    #[test]
    fn test_apply_form_keeps_current_month_with_goal() {
        let mut config = Configuration::default();
        config.current_month = "Febrero".into();
        let form = ConfigurationForm {
            monthly_goals: Some("Enero=100\nFebrero=120".into()),
            ..ConfigurationForm::default()
        };
        assert_eq!(apply_form(&config, &form).unwrap().current_month, "Febrero");
    }

    #[test]
    fn test_apply_form_rejects_bad_distribution() {
        let form = ConfigurationForm {
            leader_distribution: Some("Líder 1:60, Líder 2:30".into()),
            ..ConfigurationForm::default()
        };
        let err = apply_form(&Configuration::default(), &form).unwrap_err();
        assert!(matches!(err, CommissionError::DistributionShareMismatch { .. }));
    }

    #[test]
    fn test_select_month() {
        let mut config = Configuration::default();
        config.set_goal("Enero", dec!(100));
        assert_eq!(select_month(&config, "Enero").unwrap().current_month, "Enero");
        assert!(matches!(
            select_month(&config, "Julio"),
            Err(CommissionError::UnknownMonth(_))
        ));
    }

    #[test]
    fn test_performance_edit_creates_and_updates() {
        let empty = PerformanceSet::new();
        let created = apply_performance_edit(&empty, " Ana ", Some(dec!(1000)), None).unwrap();
        assert_eq!(created["Ana"], PerformanceRecord::new(dec!(1000), false));
        assert!(empty.is_empty());

        let updated = apply_performance_edit(&created, "Ana", None, Some(true)).unwrap();
        assert_eq!(updated["Ana"], PerformanceRecord::new(dec!(1000), true));

        assert!(apply_performance_edit(&empty, "  ", None, None).is_err());
    }
}
