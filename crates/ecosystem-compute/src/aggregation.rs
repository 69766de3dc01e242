//! Confidence-weighted aggregation of signal groups.
//!
//! The aggregated value weights each reading by its confidence, while the
//! reported confidence is the plain mean of the group's confidences. The two
//! use different weightings on purpose and must stay that way.

use chrono::{DateTime, Utc};

use ecosystem_core::models::{
    AggregationResult, AggregationSignal, IndexEntry, Signal, SignalGroup, TimeRange,
};
use tracing::debug;

/// Aggregate every group, stamping index entries with the current time.
pub fn aggregate(groups: &[SignalGroup], time_range: &TimeRange) -> AggregationResult {
    aggregate_at(groups, time_range, Utc::now())
}

/// Aggregate every group with an explicit wall clock for `IndexEntry::last_updated`.
///
/// Output order matches `groups`. Never fails: out-of-range confidences are
/// taken as given.
pub fn aggregate_at(
    groups: &[SignalGroup],
    time_range: &TimeRange,
    now: DateTime<Utc>,
) -> AggregationResult {
    let mut result = AggregationResult {
        signals: Vec::with_capacity(groups.len()),
        index_entries: Vec::with_capacity(groups.len()),
    };

    for group in groups {
        let aggregated_value = weighted_mean(&group.signals);
        let confidence = mean_confidence(&group.signals);
        let sample_count = group.signals.len();

        result.signals.push(AggregationSignal {
            partner_id: group.partner_id.clone(),
            category: group.category.clone(),
            aggregated_value,
            sample_count,
            time_range: *time_range,
            confidence,
        });
        result.index_entries.push(IndexEntry {
            partner_id: group.partner_id.clone(),
            category: group.category.clone(),
            last_updated: now,
            signal_count: sample_count,
            avg_confidence: confidence,
        });
    }

    debug!(groups = groups.len(), "aggregated signal groups");
    result
}

/// Σ(value·confidence) / Σ(confidence); 0 when the confidences sum to 0.
pub fn weighted_mean(signals: &[Signal]) -> f64 {
    let total_confidence: f64 = signals.iter().map(|s| s.confidence).sum();
    if total_confidence == 0.0 {
        return 0.0;
    }
    let weighted_sum: f64 = signals.iter().map(|s| s.value * s.confidence).sum();
    weighted_sum / total_confidence
}

/// Unweighted mean confidence; 0 for an empty slice.
pub fn mean_confidence(signals: &[Signal]) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }
    signals.iter().map(|s| s.confidence).sum::<f64>() / signals.len() as f64
}
