//! Partition signals by `(partner_id, category)`.

use std::collections::BTreeMap;

use ecosystem_core::models::{Signal, SignalGroup};
use tracing::debug;

/// One group per distinct `(partner_id, category)`, ordered by key.
///
/// Every input signal lands in exactly one group. Empty input yields no groups.
pub fn group_signals(signals: &[Signal]) -> Vec<SignalGroup> {
    let mut buckets: BTreeMap<(&str, &str), Vec<Signal>> = BTreeMap::new();
    for signal in signals {
        buckets
            .entry((signal.partner_id.as_str(), signal.category.as_str()))
            .or_default()
            .push(signal.clone());
    }

    debug!(signals = signals.len(), groups = buckets.len(), "grouped signals");

    buckets
        .into_iter()
        .map(|((partner_id, category), signals)| SignalGroup {
            partner_id: partner_id.to_string(),
            category: category.to_string(),
            signals,
        })
        .collect()
}
