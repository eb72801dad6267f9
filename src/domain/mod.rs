//! Domain types for the DeFi metrics service.
//!
//! This module provides:
//! - Normalized record types for the three upstream metric families
//! - `Dataset`, which makes the soft-fail loading contract a visible type
//! - Narrative and whale-signal types emitted by the engines

pub mod dataset;
pub mod narrative;
pub mod records;

pub use dataset::Dataset;
pub use narrative::{NarrativeRow, NarrativeStatus, WhaleSignal};
pub use records::{DexRecord, FeeRecord, YieldRecord};
