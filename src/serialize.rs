//! Row serialization: one fetched row to a JSON object keyed by column name.

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Serialize a row as `{column: value, ...}` with keys exactly the entity's
/// column names, in column order.
pub fn row_to_json(row: &SqliteRow) -> Value {
    let mut map = Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

/// Decode one cell by its runtime storage class. SQLite is dynamically typed,
/// so the value's own type decides the JSON representation; BOOLEAN columns
/// surface as 0/1 integers.
fn cell_to_value(row: &SqliteRow, name: &str) -> Value {
    let Ok(raw) = row.try_get_raw(name) else {
        return Value::Null;
    };
    if raw.is_null() {
        return Value::Null;
    }
    match raw.type_info().name() {
        "INTEGER" => row
            .try_get::<i64, _>(name)
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::Null),
        "REAL" => row
            .try_get::<f64, _>(name)
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "TEXT" => row
            .try_get::<String, _>(name)
            .map(Value::String)
            .unwrap_or(Value::Null),
        "BOOLEAN" => row
            .try_get::<bool, _>(name)
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
