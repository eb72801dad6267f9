use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::NarrativeRow;
use crate::engine::detect_narratives;

/// Cross-source narrative table. Empty array when no categories were
/// observed anywhere; the dashboard suppresses the panel in that case.
pub async fn get_narratives(State(state): State<AppState>) -> Json<Vec<NarrativeRow>> {
    // Sequential fetches, matching the request-per-render model.
    let fees = state.source.fees().await;
    let dexs = state.source.dexs().await;
    let yields = state.source.yields().await;

    Json(detect_narratives(&fees, &dexs, &yields))
}
