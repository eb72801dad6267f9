//! Yield pools parser. Expected shape: `{"data": [...]}`.

use crate::domain::{Dataset, YieldRecord};
use serde_json::Value;

/// Pools below this APY are noise for the dashboard and are dropped.
const MIN_APY: f64 = 8.0;

const DEFAULT_CATEGORY: &str = "Yield";

pub fn parse(payload: &Value) -> Dataset<YieldRecord> {
    let pools = match payload.get("data").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list,
        _ => return Dataset::Unavailable,
    };

    let mut rows = Vec::new();
    for entry in pools {
        match parse_row(entry) {
            Some(row) => {
                if row.apy > MIN_APY {
                    rows.push(row);
                }
            }
            None => return Dataset::Unavailable,
        }
    }
    Dataset::Loaded(rows)
}

fn parse_row(entry: &Value) -> Option<YieldRecord> {
    Some(YieldRecord {
        project: entry.get("project")?.as_str()?.to_string(),
        chain: entry.get("chain")?.as_str()?.to_string(),
        category: entry
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string(),
        apy: entry.get("apy")?.as_f64()?,
        tvl_usd: entry.get("tvlUsd")?.as_f64()?,
    })
}
