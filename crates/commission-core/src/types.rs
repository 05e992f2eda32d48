use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values (COP). Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.08 = 8%). Never as percentages.
pub type Rate = Decimal;

/// Values expressed in percent units (8 = 8%), as entered by users.
pub type Percent = Decimal;

/// Fractional counts such as subscriptions sold
pub type Count = Decimal;

/// Divide, clamping to `Decimal::MAX`/`Decimal::MIN` when the quotient does
/// not fit. Division by zero yields zero.
pub fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() != denominator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// True when `value` sits on a saturation bound.
pub fn is_saturated(value: Decimal) -> bool {
    value == Decimal::MAX || value == Decimal::MIN
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_saturating_div_clamps_overflow() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(saturating_div(dec!(2290000), tiny), Decimal::MAX);
        assert_eq!(saturating_div(dec!(-2290000), tiny), Decimal::MIN);
        assert_eq!(saturating_div(dec!(2290000), -tiny), Decimal::MIN);
        assert!(is_saturated(saturating_div(dec!(1), tiny)));
    }

    #[test]
    fn test_saturating_div_regular_values() {
        assert_eq!(saturating_div(dec!(2290000), dec!(229000)), dec!(10));
        assert_eq!(saturating_div(dec!(5), Decimal::ZERO), Decimal::ZERO);
        assert!(!is_saturated(dec!(10)));
    }
}
