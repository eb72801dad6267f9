//! Data source abstraction for fetching the three upstream metric families.

use crate::domain::{Dataset, DexRecord, FeeRecord, YieldRecord};
use async_trait::async_trait;
use std::fmt;

pub mod cache;
pub mod llama;
pub mod mock;

pub use cache::FetchCache;
pub use llama::LlamaSource;
pub use mock::MockSource;

/// Source of the three normalized datasets.
///
/// Implementations never fail: upstream trouble of any kind surfaces as
/// `Dataset::Unavailable`, and callers render an empty state.
#[async_trait]
pub trait MetricsSource: Send + Sync + fmt::Debug {
    /// Fee overview rows, sorted by 7d change descending.
    async fn fees(&self) -> Dataset<FeeRecord>;

    /// DEX overview rows with best-effort user counts.
    async fn dexs(&self) -> Dataset<DexRecord>;

    /// Yield pool rows, filtered to APY above the noise floor.
    async fn yields(&self) -> Dataset<YieldRecord>;
}
