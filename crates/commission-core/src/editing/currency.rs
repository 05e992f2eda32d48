use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::types::Money;

/// Coerce user-entered currency text into an amount.
///
/// Everything except digits, `,` and `-` is discarded, so `.` thousands
/// separators and the `$` sign disappear; the first `,` then acts as the
/// decimal point. Text that still fails to parse is read as zero.
pub fn parse_currency(text: &str) -> Money {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '-')
        .collect();
    let normalised = kept.replacen(',', ".", 1);
    Decimal::from_str(&normalised).unwrap_or(Decimal::ZERO)
}

/// Format an amount as whole Colombian pesos, e.g. `$ 1.919.999`.
pub fn format_currency(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}
