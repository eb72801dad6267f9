//! Row-wise trend score over the fees dataset.

/// Tuning constants for the trend score.
///
/// The values are inherited as-is; they have no stated derivation and are
/// kept configurable rather than "corrected".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendWeights {
    /// Cap applied to the 7d change before weighting.
    pub change_cap: f64,
    /// Weight applied to the capped 7d change.
    pub change_weight: f64,
    /// Divisor normalizing 24h fee volume into score points.
    pub fee_scale: f64,
    /// Cap applied to the normalized fee component.
    pub fee_cap: f64,
}

impl Default for TrendWeights {
    fn default() -> Self {
        Self {
            change_cap: 50.0,
            change_weight: 0.6,
            fee_scale: 1e7,
            fee_cap: 20.0,
        }
    }
}

/// Score a fee row into [0, 100], rounded to 2 decimals.
pub fn trend_score(change_7d: f64, total_24h: f64, weights: &TrendWeights) -> f64 {
    let score = change_7d.min(weights.change_cap) * weights.change_weight
        + (total_24h / weights.fee_scale).min(weights.fee_cap);
    (score.clamp(0.0, 100.0) * 100.0).round() / 100.0
}
