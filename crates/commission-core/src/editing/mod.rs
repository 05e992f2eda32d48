//! Helpers for the collaborator that accepts user edits before the engine
//! runs: currency text coercion, form text parsing, and the policy checks
//! applied when a configuration is saved.

pub mod currency;
pub mod forms;
pub mod validation;

pub use currency::{format_currency, parse_currency};
pub use forms::{
    apply_form, apply_performance_edit, format_monthly_goals, format_roster, parse_distribution_rows,
    parse_monthly_goals, parse_roster, parse_tier_rows, select_month, ConfigurationForm,
};
pub use validation::{validate_configuration, DistributionCheck};
