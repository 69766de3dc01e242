//! Cross-system correlation queries and the strategic signals they produce.

use serde::{Deserialize, Serialize};

use super::TimeRange;

/// Which systems and metrics to correlate, over which window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossSystemQuery {
    pub source_systems: Vec<String>,
    pub metrics: Vec<String>,
    pub time_range: TimeRange,
    /// Minimum |r| for a pair to be reported, in [0, 1].
    pub correlation_threshold: f64,
}

/// Two `(system, metric)` series whose Pearson coefficient met the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationPair {
    pub system_a: String,
    pub system_b: String,
    pub metric_a: String,
    pub metric_b: String,
    /// In [-1, 1], rounded to the configured precision.
    pub correlation_coefficient: f64,
}

/// All qualifying pairs of one query. Never emitted empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicSignal {
    pub correlation_pairs: Vec<CorrelationPair>,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicResult {
    pub signals: Vec<StrategicSignal>,
    /// Total pairs across `signals`.
    pub correlation_count: usize,
}
