use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeRange;

/// Confidence-weighted summary of one `(partner, category)` group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationSignal {
    pub partner_id: String,
    pub category: String,
    /// Σ(value·confidence) / Σ(confidence), or 0 when the confidences sum to 0.
    pub aggregated_value: f64,
    pub sample_count: usize,
    pub time_range: TimeRange,
    /// Unweighted mean of the group's confidences.
    pub confidence: f64,
}

/// Denormalized group summary intended for an external index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub partner_id: String,
    pub category: String,
    /// Wall-clock time of computation, not derived from signal timestamps.
    pub last_updated: DateTime<Utc>,
    pub signal_count: usize,
    pub avg_confidence: f64,
}

/// Aggregator output: one signal and one index entry per group, in group order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub signals: Vec<AggregationSignal>,
    pub index_entries: Vec<IndexEntry>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
