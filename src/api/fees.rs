use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::AppState;
use crate::engine::trend_score;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRow {
    pub name: String,
    pub category: String,
    pub total24h: f64,
    pub change7d: f64,
    pub trend_score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeesResponse {
    pub available: bool,
    pub rows: Vec<FeeRow>,
    pub generated_at: DateTime<Utc>,
}

pub async fn get_fees(State(state): State<AppState>) -> Json<FeesResponse> {
    let fees = state.source.fees().await;

    let rows = fees
        .rows()
        .iter()
        .map(|row| FeeRow {
            name: row.name.clone(),
            category: row.category.clone(),
            total24h: row.total_24h,
            change7d: row.change_7d,
            trend_score: trend_score(row.change_7d, row.total_24h, &state.config.trend),
        })
        .collect();

    Json(FeesResponse {
        available: fees.is_available(),
        rows,
        generated_at: Utc::now(),
    })
}
