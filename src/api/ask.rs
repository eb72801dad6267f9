use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::assistant;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest("question is required".to_string()));
    }

    let fees = state.source.fees().await;

    match state.assistant.ask(question, fees.rows()).await {
        Ok(answer) => Ok(Json(AskResponse { answer })),
        Err(e) => {
            tracing::warn!(error = %e, "assistant call failed");
            Err(AppError::Unavailable(
                assistant::UNAVAILABLE_MESSAGE.to_string(),
            ))
        }
    }
}
