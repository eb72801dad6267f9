use axum::http::StatusCode;
use llamascope::api::{self, AppState};
use llamascope::config::Config;
use llamascope::datasource::MockSource;
use llamascope::engine::{TrendWeights, WhaleThresholds};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_config(hosted: bool) -> Config {
    Config {
        port: 0,
        fees_api_url: "http://example.invalid/fees".to_string(),
        dexs_api_url: "http://example.invalid/dexs".to_string(),
        yields_api_url: "http://example.invalid/yields".to_string(),
        fetch_timeout_secs: 1,
        cache_ttl_secs: 0,
        mail: None,
        hosted,
        // Closed local port: connection is refused immediately.
        ollama_url: "http://127.0.0.1:1".to_string(),
        ollama_model: "llama3".to_string(),
        trend: TrendWeights::default(),
        whale: WhaleThresholds::default(),
    }
}

fn setup_app(hosted: bool) -> axum::Router {
    let state = AppState::new(Arc::new(MockSource::new()), test_config(hosted));
    api::create_router(state)
}

async fn post_json(app: axum::Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let v = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, v)
}

#[tokio::test]
async fn test_ask_route_hidden_when_hosted() {
    let app = setup_app(true);
    let (status, _) = post_json(app, "/v1/ask", r#"{"question": "anything"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ask_rejects_empty_question() {
    let app = setup_app(false);
    let (status, v) = post_json(app, "/v1/ask", r#"{"question": "   "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"], "question is required");
}

#[tokio::test]
async fn test_ask_with_unreachable_model_is_a_fixed_503() {
    let app = setup_app(false);
    let (status, v) = post_json(app, "/v1/ask", r#"{"question": "who leads fees?"}"#).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        v["error"],
        "Local model not available. Ensure Ollama is running."
    );
}
