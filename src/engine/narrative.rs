//! Cross-source narrative aggregation.
//!
//! Groups category labels across the three metric families and buckets each
//! category by how many independent families mention it.

use crate::domain::{Dataset, DexRecord, FeeRecord, NarrativeRow, NarrativeStatus, YieldRecord};
use std::collections::{BTreeMap, BTreeSet};

pub const FEES_SIGNAL: &str = "fees";
pub const USERS_SIGNAL: &str = "users";
pub const LIQUIDITY_SIGNAL: &str = "liquidity";

/// Aggregate the three datasets into strength-ranked narrative rows.
///
/// Unavailable or empty inputs are skipped entirely. Each distinct non-empty
/// category in a dataset contributes that dataset's signal name; strength is
/// the size of the resulting signal set. Output is ordered by descending
/// strength, alphabetical by category within a strength band. Pure and
/// idempotent.
pub fn detect_narratives(
    fees: &Dataset<FeeRecord>,
    dexs: &Dataset<DexRecord>,
    yields: &Dataset<YieldRecord>,
) -> Vec<NarrativeRow> {
    let mut by_category: BTreeMap<String, BTreeSet<&'static str>> = BTreeMap::new();

    let mut tally = |category: &str, signal: &'static str| {
        if !category.is_empty() {
            by_category
                .entry(category.to_string())
                .or_default()
                .insert(signal);
        }
    };

    for row in fees.rows() {
        tally(&row.category, FEES_SIGNAL);
    }
    for row in dexs.rows() {
        tally(&row.category, USERS_SIGNAL);
    }
    for row in yields.rows() {
        tally(&row.category, LIQUIDITY_SIGNAL);
    }

    let mut rows: Vec<NarrativeRow> = by_category
        .into_iter()
        .map(|(category, signals)| {
            let strength = signals.len();
            NarrativeRow {
                category,
                signals: signals.into_iter().collect::<Vec<_>>().join(", "),
                strength,
                status: NarrativeStatus::from_strength(strength),
            }
        })
        .collect();

    // Stable sort keeps the BTreeMap's alphabetical order within ties.
    rows.sort_by(|a, b| b.strength.cmp(&a.strength));
    rows
}
