//! Pure scoring and aggregation engines. No I/O, no failure paths.

pub mod narrative;
pub mod trend;
pub mod whale;

pub use narrative::detect_narratives;
pub use trend::{trend_score, TrendWeights};
pub use whale::{whale_signal, WhaleThresholds};
