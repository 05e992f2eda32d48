use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Commission engine
// ---------------------------------------------------------------------------

/// Takes `{ configuration, performance }` JSON and returns the report envelope.
#[napi]
pub fn calculate_commissions(input_json: String) -> NapiResult<String> {
    let input: commission_core::commission::CommissionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = commission_core::commission::calculate_commissions(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Editing
// ---------------------------------------------------------------------------

/// Rejects a configuration that may not be saved; returns the distribution
/// summary otherwise.
#[napi]
pub fn validate_configuration(config_json: String) -> NapiResult<String> {
    let config: commission_core::commission::Configuration =
        serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let check =
        commission_core::editing::validate_configuration(&config).map_err(to_napi_error)?;
    serde_json::to_string(&check).map_err(to_napi_error)
}

/// Coerce currency text typed into a form field; returns a decimal string.
#[napi]
pub fn parse_currency(text: String) -> String {
    commission_core::editing::parse_currency(&text).to_string()
}

/// Format a decimal string as whole pesos for display.
#[napi]
pub fn format_currency(amount: String) -> NapiResult<String> {
    let amount = Decimal::from_str(amount.trim()).map_err(to_napi_error)?;
    Ok(commission_core::editing::format_currency(amount))
}
