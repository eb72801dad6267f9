//! DeFiLlama API client implementation.

use super::{FetchCache, MetricsSource};
use crate::config::Config;
use crate::domain::{Dataset, DexRecord, FeeRecord, YieldRecord};
use crate::loader;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Metrics source backed by the public DeFiLlama overview and yields APIs.
#[derive(Debug)]
pub struct LlamaSource {
    client: Client,
    cache: FetchCache,
    fees_url: String,
    dexs_url: String,
    yields_url: String,
}

impl LlamaSource {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            cache: FetchCache::new(Duration::from_secs(config.cache_ttl_secs)),
            fees_url: config.fees_api_url.clone(),
            dexs_url: config.dexs_api_url.clone(),
            yields_url: config.yields_api_url.clone(),
        })
    }

    /// Fetch a JSON payload, collapsing every failure mode to `None`.
    ///
    /// Callers never learn why an upstream was unavailable; the cause is
    /// only logged. Successful payloads are memoized per URL.
    async fn fetch_json(&self, url: &str) -> Option<Arc<Value>> {
        if let Some(hit) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Some(hit);
        }

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, "upstream request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = %status, "upstream returned error status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(payload) => {
                let payload = Arc::new(payload);
                self.cache.insert(url, payload.clone());
                Some(payload)
            }
            Err(e) => {
                warn!(url, error = %e, "upstream body was not valid JSON");
                None
            }
        }
    }
}

#[async_trait]
impl MetricsSource for LlamaSource {
    async fn fees(&self) -> Dataset<FeeRecord> {
        match self.fetch_json(&self.fees_url).await {
            Some(payload) => loader::fees::parse(&payload),
            None => Dataset::Unavailable,
        }
    }

    async fn dexs(&self) -> Dataset<DexRecord> {
        match self.fetch_json(&self.dexs_url).await {
            Some(payload) => loader::dexs::parse(&payload),
            None => Dataset::Unavailable,
        }
    }

    async fn yields(&self) -> Dataset<YieldRecord> {
        match self.fetch_json(&self.yields_url).await {
            Some(payload) => loader::yields::parse(&payload),
            None => Dataset::Unavailable,
        }
    }
}
