//! Whale-flow signal over the yields dataset.

use crate::domain::WhaleSignal;

/// Tuning constants for the whale-flow signal.
///
/// Inherited as-is with no stated derivation; kept configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhaleThresholds {
    /// TVL above which a pool counts as whale-depth.
    pub deep_tvl: f64,
    /// TVL below which a pool counts as retail-depth.
    pub shallow_tvl: f64,
    /// APY below which deep pools read as accumulation.
    pub quiet_apy: f64,
    /// APY above which deep pools read as distribution.
    pub hot_apy: f64,
    /// APY above which shallow pools read as retail farming.
    pub frenzy_apy: f64,
}

impl Default for WhaleThresholds {
    fn default() -> Self {
        Self {
            deep_tvl: 500_000_000.0,
            shallow_tvl: 50_000_000.0,
            quiet_apy: 8.0,
            hot_apy: 20.0,
            frenzy_apy: 25.0,
        }
    }
}

/// Classify a pool. Branch order is a strict priority chain.
pub fn whale_signal(tvl_usd: f64, apy: f64, thresholds: &WhaleThresholds) -> WhaleSignal {
    if tvl_usd > thresholds.deep_tvl && apy < thresholds.quiet_apy {
        return WhaleSignal::Accumulation;
    }
    if tvl_usd > thresholds.deep_tvl && apy > thresholds.hot_apy {
        return WhaleSignal::Distribution;
    }
    if tvl_usd < thresholds.shallow_tvl && apy > thresholds.frenzy_apy {
        return WhaleSignal::RetailFarming;
    }
    WhaleSignal::Neutral
}
