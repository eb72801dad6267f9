use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

use crate::api::AppState;
use crate::domain::WhaleSignal;
use crate::engine::whale_signal;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldRow {
    pub project: String,
    pub chain: String,
    pub category: String,
    pub apy: f64,
    pub tvl_usd: f64,
    pub whale_signal: WhaleSignal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldsResponse {
    pub available: bool,
    pub rows: Vec<YieldRow>,
    pub generated_at: DateTime<Utc>,
}

pub async fn get_yields(State(state): State<AppState>) -> Json<YieldsResponse> {
    let yields = state.source.yields().await;

    let mut rows: Vec<YieldRow> = yields
        .rows()
        .iter()
        .map(|row| YieldRow {
            project: row.project.clone(),
            chain: row.chain.clone(),
            category: row.category.clone(),
            apy: row.apy,
            tvl_usd: row.tvl_usd,
            whale_signal: whale_signal(row.tvl_usd, row.apy, &state.config.whale),
        })
        .collect();

    rows.sort_by(|a, b| b.apy.partial_cmp(&a.apy).unwrap_or(Ordering::Equal));

    Json(YieldsResponse {
        available: yields.is_available(),
        rows,
        generated_at: Utc::now(),
    })
}
