use rust_decimal::Decimal;

use super::config::CommissionTier;
use crate::types::Rate;

/// Resolve the commission rate that applies to `value`.
///
/// Tiers are evaluated in ascending `min_threshold` order on a stably sorted
/// copy; the rate of the last tier whose threshold is met wins. When several
/// tiers share a threshold the one defined last in `tiers` wins. Returns zero
/// when no tier qualifies, including for an empty table.
///
/// The returned rate is a fraction (`8` percent resolves to `0.08`).
pub fn resolve_rate(tiers: &[CommissionTier], value: Decimal) -> Rate {
    let mut sorted: Vec<&CommissionTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| a.min_threshold.cmp(&b.min_threshold));

    let mut applicable = Decimal::ZERO;
    for tier in sorted {
        if value >= tier.min_threshold {
            applicable = tier.rate_percent / Decimal::ONE_HUNDRED;
        } else {
            break;
        }
    }
    applicable
}
