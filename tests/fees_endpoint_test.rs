use axum::http::StatusCode;
use llamascope::api::{self, AppState};
use llamascope::config::Config;
use llamascope::datasource::MockSource;
use llamascope::domain::FeeRecord;
use llamascope::engine::{TrendWeights, WhaleThresholds};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_config() -> Config {
    Config {
        port: 0,
        fees_api_url: "http://example.invalid/fees".to_string(),
        dexs_api_url: "http://example.invalid/dexs".to_string(),
        yields_api_url: "http://example.invalid/yields".to_string(),
        fetch_timeout_secs: 1,
        cache_ttl_secs: 0,
        mail: None,
        hosted: false,
        ollama_url: "http://127.0.0.1:1".to_string(),
        ollama_model: "llama3".to_string(),
        trend: TrendWeights::default(),
        whale: WhaleThresholds::default(),
    }
}

fn setup_app(source: MockSource) -> axum::Router {
    let state = AppState::new(Arc::new(source), test_config());
    api::create_router(state)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn fee(name: &str, category: &str, total_24h: f64, change_7d: f64) -> FeeRecord {
    FeeRecord {
        name: name.to_string(),
        category: category.to_string(),
        total_24h,
        change_7d,
    }
}

#[tokio::test]
async fn test_fees_rows_carry_trend_score() {
    let app = setup_app(
        MockSource::new().with_fees(vec![fee("Uniswap", "Dexes", 5e7, 12.0)]),
    );

    let (status, v) = get(app, "/v1/fees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["available"], true);
    assert_eq!(v["rows"][0]["name"], "Uniswap");
    assert_eq!(v["rows"][0]["category"], "Dexes");
    assert_eq!(v["rows"][0]["change7d"], 12.0);
    // min(12, 50) * 0.6 + min(5e7 / 1e7, 20) = 12.2
    assert_eq!(v["rows"][0]["trendScore"].as_f64().unwrap(), 12.2);
}

#[tokio::test]
async fn test_fees_unavailable_upstream_renders_empty_state() {
    let app = setup_app(MockSource::new());

    let (status, v) = get(app, "/v1/fees").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["available"], false);
    assert_eq!(v["rows"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = setup_app(MockSource::new());
    let (status, v) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "ok");

    let (status, v) = get(app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "ready");
}
