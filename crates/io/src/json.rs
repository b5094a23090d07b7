// JSON source loading: array-of-objects → row maps

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crosstally_recon::model::RawRow;
use serde_json::Value;

/// Load a JSON file into row maps. The file must be a top-level array of
/// objects; anything else is a structural error, fatal for the source.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|e| e.to_string())?;
    rows_from_value(value)
}

pub fn load_rows_from_str(content: &str) -> Result<Vec<RawRow>, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    rows_from_value(value)
}

fn rows_from_value(value: Value) -> Result<Vec<RawRow>, String> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(format!(
                "expected a top-level array of objects, found {}",
                type_name(&other)
            ));
        }
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let object = match item {
            Value::Object(map) => map,
            other => {
                return Err(format!(
                    "element {index}: expected an object, found {}",
                    type_name(&other)
                ));
            }
        };

        let mut row: RawRow = BTreeMap::new();
        for (field, value) in object {
            // Scalars are stringified into the shared row shape; null means
            // the field is absent. Nested structures have no field semantics
            // here and are dropped.
            match value {
                Value::String(s) => {
                    row.insert(field, s);
                }
                Value::Number(n) => {
                    row.insert(field, n.to_string());
                }
                Value::Bool(b) => {
                    row.insert(field, b.to_string());
                }
                Value::Null | Value::Array(_) | Value::Object(_) => {}
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
