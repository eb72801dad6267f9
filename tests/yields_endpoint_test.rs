use axum::http::StatusCode;
use llamascope::api::{self, AppState};
use llamascope::config::Config;
use llamascope::datasource::MockSource;
use llamascope::domain::YieldRecord;
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

fn pool(project: &str, apy: f64, tvl_usd: f64) -> YieldRecord {
    YieldRecord {
        project: project.to_string(),
        chain: "Ethereum".to_string(),
        category: "Lending".to_string(),
        apy,
        tvl_usd,
    }
}

#[tokio::test]
async fn test_yields_carry_whale_signals_and_sort_by_apy() {
    let app = setup_app(MockSource::new().with_yields(vec![
        pool("sleepy", 3.0, 6e8),
        pool("frenzy", 40.0, 1e7),
        pool("exit", 30.0, 6e8),
        pool("plain", 15.0, 1e8),
    ]));

    let (status, v) = get(app, "/v1/yields").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["available"], true);

    let rows = v["rows"].as_array().unwrap();
    let order: Vec<&str> = rows
        .iter()
        .map(|r| r["project"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["frenzy", "exit", "plain", "sleepy"]);

    assert_eq!(rows[0]["whaleSignal"], "Retail Farming");
    assert_eq!(rows[1]["whaleSignal"], "Distribution");
    assert_eq!(rows[2]["whaleSignal"], "Neutral");
    assert_eq!(rows[3]["whaleSignal"], "Accumulation");
}

#[tokio::test]
async fn test_yields_unavailable_upstream_renders_empty_state() {
    let app = setup_app(MockSource::new());

    let (status, v) = get(app, "/v1/yields").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["available"], false);
    assert_eq!(v["rows"].as_array().unwrap().len(), 0);
}
