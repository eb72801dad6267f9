//! Derived signal and narrative types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whale-flow reading for a single yield pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhaleSignal {
    Accumulation,
    Distribution,
    #[serde(rename = "Retail Farming")]
    RetailFarming,
    Neutral,
}

impl fmt::Display for WhaleSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WhaleSignal::Accumulation => "Accumulation",
            WhaleSignal::Distribution => "Distribution",
            WhaleSignal::RetailFarming => "Retail Farming",
            WhaleSignal::Neutral => "Neutral",
        };
        write!(f, "{}", label)
    }
}

/// Momentum bucket for a narrative, derived from its signal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeStatus {
    Accelerating,
    Emerging,
    Mature,
}

impl NarrativeStatus {
    pub fn from_strength(strength: usize) -> Self {
        match strength {
            s if s >= 3 => NarrativeStatus::Accelerating,
            2 => NarrativeStatus::Emerging,
            _ => NarrativeStatus::Mature,
        }
    }
}

impl fmt::Display for NarrativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NarrativeStatus::Accelerating => "Accelerating",
            NarrativeStatus::Emerging => "Emerging",
            NarrativeStatus::Mature => "Mature",
        };
        write!(f, "{}", label)
    }
}

/// One row of aggregator output: a market category and the evidence for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRow {
    pub category: String,
    /// Contributing signal sources, sorted and comma-joined, e.g. "fees, users".
    pub signals: String,
    /// Count of distinct contributing sources, in [1, 3].
    pub strength: usize,
    pub status: NarrativeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_strength_buckets() {
        assert_eq!(NarrativeStatus::from_strength(1), NarrativeStatus::Mature);
        assert_eq!(NarrativeStatus::from_strength(2), NarrativeStatus::Emerging);
        assert_eq!(
            NarrativeStatus::from_strength(3),
            NarrativeStatus::Accelerating
        );
        assert_eq!(
            NarrativeStatus::from_strength(4),
            NarrativeStatus::Accelerating
        );
    }

    #[test]
    fn test_whale_signal_display() {
        assert_eq!(WhaleSignal::RetailFarming.to_string(), "Retail Farming");
        assert_eq!(WhaleSignal::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_whale_signal_serializes_with_space() {
        let json = serde_json::to_string(&WhaleSignal::RetailFarming).unwrap();
        assert_eq!(json, "\"Retail Farming\"");
    }
}
