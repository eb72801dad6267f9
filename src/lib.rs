pub mod api;
pub mod assistant;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod loader;
pub mod notify;

pub use config::Config;
pub use datasource::{FetchCache, LlamaSource, MetricsSource, MockSource};
pub use domain::{
    Dataset, DexRecord, FeeRecord, NarrativeRow, NarrativeStatus, WhaleSignal, YieldRecord,
};
pub use error::AppError;
