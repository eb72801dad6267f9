use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::AppState;
use crate::domain::DexRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DexsResponse {
    pub available: bool,
    pub rows: Vec<DexRecord>,
    pub generated_at: DateTime<Utc>,
}

pub async fn get_dexs(State(state): State<AppState>) -> Json<DexsResponse> {
    let dexs = state.source.dexs().await;

    Json(DexsResponse {
        available: dexs.is_available(),
        rows: dexs.rows().to_vec(),
        generated_at: Utc::now(),
    })
}
