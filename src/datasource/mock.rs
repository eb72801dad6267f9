//! Mock metrics source for testing without network calls.

use super::MetricsSource;
use crate::domain::{Dataset, DexRecord, FeeRecord, YieldRecord};
use async_trait::async_trait;

/// Mock source returning predefined datasets. All three default to
/// `Unavailable`, matching an unreachable upstream.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    fees: Dataset<FeeRecord>,
    dexs: Dataset<DexRecord>,
    yields: Dataset<YieldRecord>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fees(mut self, rows: Vec<FeeRecord>) -> Self {
        self.fees = Dataset::Loaded(rows);
        self
    }

    pub fn with_dexs(mut self, rows: Vec<DexRecord>) -> Self {
        self.dexs = Dataset::Loaded(rows);
        self
    }

    pub fn with_yields(mut self, rows: Vec<YieldRecord>) -> Self {
        self.yields = Dataset::Loaded(rows);
        self
    }
}

#[async_trait]
impl MetricsSource for MockSource {
    async fn fees(&self) -> Dataset<FeeRecord> {
        self.fees.clone()
    }

    async fn dexs(&self) -> Dataset<DexRecord> {
        self.dexs.clone()
    }

    async fn yields(&self) -> Dataset<YieldRecord> {
        self.yields.clone()
    }
}
