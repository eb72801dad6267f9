//! DEX overview parser. Expected shape: `{"protocols": [...]}`.

use crate::domain::{Dataset, DexRecord};
use serde_json::Value;

/// Candidate user-count fields, tried in priority order. The first one
/// present anywhere in the payload wins for the whole dataset; if none is
/// present the column is omitted entirely.
const USER_FIELDS: [&str; 3] = ["dailyUsers", "users", "activeUsers"];

pub fn parse(payload: &Value) -> Dataset<DexRecord> {
    let protocols = match payload.get("protocols").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list,
        _ => return Dataset::Unavailable,
    };

    let user_field = USER_FIELDS
        .iter()
        .copied()
        .find(|field| protocols.iter().any(|entry| entry.get(field).is_some()));

    let mut rows = Vec::with_capacity(protocols.len());
    for entry in protocols {
        match parse_row(entry, user_field) {
            Some(row) => rows.push(row),
            None => return Dataset::Unavailable,
        }
    }
    Dataset::Loaded(rows)
}

fn parse_row(entry: &Value, user_field: Option<&str>) -> Option<DexRecord> {
    Some(DexRecord {
        name: entry.get("name")?.as_str()?.to_string(),
        category: entry.get("category")?.as_str()?.to_string(),
        users: user_field
            .and_then(|field| entry.get(field))
            .and_then(Value::as_f64),
    })
}
