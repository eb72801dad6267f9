//! Fees overview parser. Expected shape: `{"protocols": [...]}`.

use crate::domain::{Dataset, FeeRecord};
use serde_json::Value;
use std::cmp::Ordering;

pub fn parse(payload: &Value) -> Dataset<FeeRecord> {
    let protocols = match payload.get("protocols").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list,
        _ => return Dataset::Unavailable,
    };

    let mut rows = Vec::with_capacity(protocols.len());
    for entry in protocols {
        match parse_row(entry) {
            Some(row) => rows.push(row),
            None => return Dataset::Unavailable,
        }
    }

    rows.sort_by(|a, b| {
        b.change_7d
            .partial_cmp(&a.change_7d)
            .unwrap_or(Ordering::Equal)
    });
    Dataset::Loaded(rows)
}

fn parse_row(entry: &Value) -> Option<FeeRecord> {
    Some(FeeRecord {
        name: entry.get("name")?.as_str()?.to_string(),
        category: entry.get("category")?.as_str()?.to_string(),
        total_24h: entry.get("total24h")?.as_f64()?,
        change_7d: entry.get("change_7d")?.as_f64()?,
    })
}
