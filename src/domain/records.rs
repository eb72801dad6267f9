//! Normalized record types for the three upstream metric families.

use serde::{Deserialize, Serialize};

/// One protocol row from the fees overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRecord {
    pub name: String,
    pub category: String,
    /// 24h fees in USD.
    #[serde(rename = "total24h")]
    pub total_24h: f64,
    /// 7-day fee change in percent.
    pub change_7d: f64,
}

/// One protocol row from the DEX overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexRecord {
    pub name: String,
    pub category: String,
    /// Daily user count, best-effort. Omitted when the upstream payload
    /// carried none of the known user-count fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<f64>,
}

/// One pool row from the yields listing, already filtered to APY > 8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldRecord {
    pub project: String,
    pub chain: String,
    pub category: String,
    /// Annual percentage yield.
    pub apy: f64,
    /// Total value locked in USD.
    #[serde(rename = "tvlUsd")]
    pub tvl_usd: f64,
}
