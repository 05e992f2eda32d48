use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten_object, format_scalar};

/// Format output as tables using the tabled crate.
///
/// Scalar fields (with nested sections flattened to `section.field`) go into
/// one Field/Value table; every array of objects, such as the per-advisor rows
/// or the pool breakdown, gets its own titled table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_sections(result);
                print_envelope_notes(map);
            } else {
                print_sections(value);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_sections(value: &Value) {
    let mut fields = Vec::new();
    flatten_object("", value, &mut fields);

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut arrays = Vec::new();
    for (key, val) in fields {
        match val {
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                arrays.push((key, items));
            }
            other => {
                builder.push_record([key, format_value(&other)]);
            }
        }
    }
    println!("{}", Table::from(builder));

    for (title, items) in arrays {
        println!("\n{}:", title);
        print_array_table(&items);
    }
}

fn print_envelope_notes(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Array(arr) => arr.iter().map(format_value).collect::<Vec<_>>().join(", "),
        Value::Null => "null".to_string(),
        other => format_scalar(other),
    }
}
