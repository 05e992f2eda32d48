use serde_json::Value;

use super::format_scalar;

/// Headline figures, in priority order, as JSON pointers.
const PRIORITY_POINTERS: [&str; 5] = [
    "/result/goal_profit/estimated_profit",
    "/result/totals/total_payment",
    "/valid",
    "/current_month",
    "/written",
];

/// Print just the key answer value from the output.
///
/// Looks for well-known headline fields first, then falls back to the first
/// field of the result object.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    for pointer in PRIORITY_POINTERS {
        if let Some(val) = value.pointer(pointer) {
            if !val.is_null() {
                return format_scalar(val);
            }
        }
    }

    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result_obj)
}
