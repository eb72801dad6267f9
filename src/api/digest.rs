use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::error::AppError;
use crate::notify;

#[derive(Debug, Serialize)]
pub struct DigestResponse {
    pub sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Build and send the fee-leader digest. Missing mail configuration is a
/// quiet `sent=false`; a transport failure during an actual send is a 500.
pub async fn send_digest(
    State(state): State<AppState>,
) -> Result<Json<DigestResponse>, AppError> {
    let fees = state.source.fees().await;
    if fees.is_empty() {
        return Ok(Json(DigestResponse {
            sent: false,
            reason: Some("fee data unavailable".to_string()),
        }));
    }

    let body = notify::digest_body(fees.rows());
    let sent = state.mailer.send(notify::DIGEST_SUBJECT, &body).await?;

    Ok(Json(DigestResponse {
        sent,
        reason: (!sent).then(|| "mail not configured".to_string()),
    }))
}
