//! Cross-system consensus: how closely systems agree on each category.
//!
//! Per category, each system contributes the mean of its own readings, so a
//! system reporting ten times weighs no more than one reporting once.

use std::collections::{BTreeMap, BTreeSet};

use ecosystem_core::config::defaults::DEFAULT_DIVERGENCE_TOLERANCE;
use ecosystem_core::models::{ConsensusResult, ConsensusSignal, DivergenceFactor, Signal};
use tracing::debug;

/// Score consensus over `systems` with the default divergence tolerance.
pub fn score_consensus(signals: &[Signal], systems: &BTreeSet<String>) -> ConsensusResult {
    score_consensus_with(signals, systems, DEFAULT_DIVERGENCE_TOLERANCE)
}

/// Score consensus over `systems`, listing systems whose deviation from the
/// overall average exceeds `divergence_tolerance`.
///
/// Categories reported by fewer than two of the given systems are skipped.
pub fn score_consensus_with(
    signals: &[Signal],
    systems: &BTreeSet<String>,
    divergence_tolerance: f64,
) -> ConsensusResult {
    // category -> system -> readings
    let mut readings: BTreeMap<&str, BTreeMap<&str, RunningMean>> = BTreeMap::new();
    for signal in signals
        .iter()
        .filter(|s| systems.contains(s.source_system.as_str()))
    {
        readings
            .entry(signal.category.as_str())
            .or_default()
            .entry(signal.source_system.as_str())
            .or_default()
            .push(signal.value);
    }

    let mut consensus = Vec::new();
    for (category, per_system) in &readings {
        if per_system.len() < 2 {
            debug!(category, "single reporting system, consensus skipped");
            continue;
        }
        consensus.push(category_consensus(category, per_system, divergence_tolerance));
    }

    let overall_alignment = if consensus.is_empty() {
        0.0
    } else {
        consensus.iter().map(|c| c.alignment_score).sum::<f64>() / consensus.len() as f64
    };

    debug!(
        categories = readings.len(),
        scored = consensus.len(),
        overall_alignment,
        "scored cross-system consensus"
    );

    ConsensusResult {
        signals: consensus,
        overall_alignment,
    }
}

fn category_consensus(
    category: &str,
    per_system: &BTreeMap<&str, RunningMean>,
    divergence_tolerance: f64,
) -> ConsensusSignal {
    let averages: Vec<(&str, f64)> = per_system
        .iter()
        .map(|(system, readings)| (*system, readings.mean()))
        .collect();

    let overall_avg = averages.iter().map(|(_, avg)| avg).sum::<f64>() / averages.len() as f64;
    let max_deviation = averages
        .iter()
        .map(|(_, avg)| (avg - overall_avg).abs())
        .fold(0.0, f64::max);

    let divergence: Vec<DivergenceFactor> = averages
        .iter()
        .filter_map(|(system, avg)| {
            let deviation = avg - overall_avg;
            (deviation.abs() > divergence_tolerance).then(|| DivergenceFactor {
                system: system.to_string(),
                deviation,
            })
        })
        .collect();

    ConsensusSignal {
        metric: category.to_string(),
        systems: averages.iter().map(|(system, _)| system.to_string()).collect(),
        alignment_score: alignment_score(max_deviation, overall_avg),
        divergence_factors: (!divergence.is_empty()).then_some(divergence),
    }
}

/// `max(0, 1 - max_deviation / |overall_avg|)`, or exactly 1 when the overall
/// average is zero.
pub fn alignment_score(max_deviation: f64, overall_avg: f64) -> f64 {
    if overall_avg == 0.0 {
        return 1.0;
    }
    (1.0 - max_deviation / overall_avg.abs()).max(0.0)
}

#[derive(Debug, Default, Clone, Copy)]
struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }
}
