//! End-to-end tests for one computation invocation.
//!
//! Covers the externally observable guarantees:
//! - weighted aggregation and zero-confidence safety
//! - consensus alignment and divergence detection
//! - correlation bounds and threshold filtering
//! - purity: idempotence and non-mutation
//! - scope filtering
//! - the camelCase JSON contract shared with the request and persistence layers

use ecosystem_compute::engine::EcosystemEngine;
use ecosystem_compute::{compute, compute_at};
use ecosystem_core::models::{ComputationInput, ComputationOutput, ComputeOptions};
use ecosystem_core::traits::ISignalEngine;
use test_fixtures::{at, hour, query, series, signal, workload};

fn scoped(categories: &[&str]) -> ComputeOptions {
    ComputeOptions {
        scope_filter: Some(categories.iter().map(|c| c.to_string()).collect()),
        ..ComputeOptions::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Aggregation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn weighted_mean_of_ten_and_twenty() {
    let input = ComputationInput::new(vec![
        signal("p1", "sys-a", "performance", 10.0, 1.0, 0),
        signal("p1", "sys-a", "performance", 20.0, 0.5, 60),
    ])
    .with_time_range(hour());

    let output = compute(&input).unwrap();
    let aggregation = &output.aggregation.signals[0];

    assert!((aggregation.aggregated_value - 40.0 / 3.0).abs() < 1e-12);
    assert_eq!(aggregation.sample_count, 2);
    assert_eq!(aggregation.confidence, 0.75);
    assert_eq!(aggregation.time_range, hour());
}

#[test]
fn zero_confidence_group_aggregates_to_zero() {
    let input = ComputationInput::new(vec![
        signal("p1", "sys-a", "cost", 10.0, 0.0, 0),
        signal("p1", "sys-a", "cost", 30.0, 0.0, 60),
    ]);
    let output = compute(&input).unwrap();

    assert_eq!(output.aggregation.signals[0].aggregated_value, 0.0);
    assert!(output.confidence.is_finite());
}

#[test]
fn index_entries_mirror_aggregations() {
    let input = ComputationInput::new(workload(2, 2, 3, 4));
    let now = at(5_000);
    let output = compute_at(&input, now).unwrap();

    assert_eq!(
        output.aggregation.signals.len(),
        output.aggregation.index_entries.len()
    );
    for (signal, entry) in output
        .aggregation
        .signals
        .iter()
        .zip(output.aggregation.index_entries.iter())
    {
        assert_eq!(signal.partner_id, entry.partner_id);
        assert_eq!(signal.category, entry.category);
        assert_eq!(signal.sample_count, entry.signal_count);
        assert_eq!(signal.confidence, entry.avg_confidence);
        assert_eq!(entry.last_updated, now);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Consensus
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn identical_system_averages_align_exactly() {
    let input = ComputationInput::new(vec![
        signal("p1", "sys-a", "latency", 40.0, 1.0, 0),
        signal("p1", "sys-a", "latency", 60.0, 1.0, 60),
        signal("p2", "sys-b", "latency", 50.0, 0.3, 0),
    ]);
    let output = compute(&input).unwrap();

    assert_eq!(output.consensus.signals.len(), 1);
    assert_eq!(output.consensus.signals[0].alignment_score, 1.0);
    assert_eq!(output.consensus.overall_alignment, 1.0);
}

#[test]
fn hundred_versus_eighty_diverges() {
    let input = ComputationInput::new(vec![
        signal("p1", "sys-a", "latency", 100.0, 1.0, 0),
        signal("p1", "sys-b", "latency", 80.0, 1.0, 0),
    ]);
    let output = compute(&input).unwrap();
    let consensus = &output.consensus.signals[0];

    assert_eq!(consensus.metric, "latency");
    assert_eq!(consensus.systems, vec!["sys-a", "sys-b"]);
    assert!((consensus.alignment_score - (1.0 - 10.0 / 90.0)).abs() < 1e-12);

    let factors = consensus.divergence_factors.as_ref().unwrap();
    let systems: Vec<&str> = factors.iter().map(|f| f.system.as_str()).collect();
    assert_eq!(systems, vec!["sys-a", "sys-b"]);
    assert_eq!(factors[0].deviation, 10.0);
    assert_eq!(factors[1].deviation, -10.0);
}

#[test]
fn consensus_considers_every_system_in_scope() {
    let input = ComputationInput::new(vec![
        signal("p1", "sys-a", "latency", 90.0, 1.0, 0),
        signal("p1", "sys-b", "latency", 100.0, 1.0, 0),
        signal("p1", "sys-c", "latency", 110.0, 1.0, 0),
        signal("p1", "sys-c", "cost", 5.0, 1.0, 0),
    ]);
    let output = compute(&input).unwrap();

    // cost has a single reporting system and is skipped.
    assert_eq!(output.consensus.signals.len(), 1);
    assert_eq!(output.consensus.signals[0].systems.len(), 3);
    let factors = output.consensus.signals[0].divergence_factors.as_ref().unwrap();
    assert_eq!(factors.len(), 2, "sys-b sits on the mean");
}

// ═══════════════════════════════════════════════════════════════════════════
// Strategic correlation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn identical_and_mirrored_series_hit_unit_bounds() {
    let mut signals = series("sys-a", "throughput", &[5.0, 9.0, 2.0, 7.0]);
    signals.extend(series("sys-b", "throughput", &[5.0, 9.0, 2.0, 7.0]));
    signals.extend(series("sys-c", "throughput", &[-5.0, -9.0, -2.0, -7.0]));
    let input = ComputationInput::new(signals).with_queries(vec![query(
        &["sys-a", "sys-b", "sys-c"],
        &["throughput"],
        0.9,
    )]);

    let output = compute(&input).unwrap();
    let pairs = &output.strategic.signals[0].correlation_pairs;
    assert_eq!(output.strategic.correlation_count, 3);

    let coefficient = |a: &str, b: &str| {
        pairs
            .iter()
            .find(|p| p.system_a == a && p.system_b == b)
            .map(|p| p.correlation_coefficient)
            .unwrap()
    };
    assert_eq!(coefficient("sys-a", "sys-b"), 1.0);
    assert_eq!(coefficient("sys-a", "sys-c"), -1.0);
    assert_eq!(coefficient("sys-b", "sys-c"), -1.0);
}

#[test]
fn high_threshold_rejects_weak_correlation() {
    let mut signals = series("sys-a", "latency", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    signals.extend(series("sys-b", "latency", &[5.0, 1.0, 6.0, 2.0, 2.0, 5.0]));
    let input = ComputationInput::new(signals).with_queries(vec![query(
        &["sys-a", "sys-b"],
        &["latency"],
        0.99,
    )]);

    let output = compute(&input).unwrap();
    assert_eq!(output.strategic.correlation_count, 0);
    assert!(output.strategic.signals.is_empty());
}

#[test]
fn correlation_contributes_to_confidence() {
    let mut signals = series("sys-a", "latency", &[1.0, 2.0, 3.0]);
    signals.extend(series("sys-b", "latency", &[2.0, 4.0, 6.0]));
    let with_query = ComputationInput::new(signals.clone())
        .with_queries(vec![query(&["sys-a", "sys-b"], &["latency"], 0.5)]);
    let without_query = ComputationInput::new(signals);

    let correlated = compute(&with_query).unwrap();
    let uncorrelated = compute(&without_query).unwrap();

    assert!((correlated.confidence - uncorrelated.confidence - 0.3).abs() < 1e-9);
}

// ═══════════════════════════════════════════════════════════════════════════
// Purity
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn identical_input_identical_output() {
    let mut signals = workload(3, 3, 2, 6);
    signals.extend(series("sys-x", "category-0", &[3.0, 1.0, 4.0, 1.0, 5.0]));
    let input = ComputationInput::new(signals)
        .with_queries(vec![query(&["system-0", "system-1", "sys-x"], &["category-0"], 0.1)])
        .with_time_range(hour());

    let first = compute(&input).unwrap();
    let second = compute(&input).unwrap();

    let strip = |mut output: ComputationOutput| {
        for entry in &mut output.aggregation.index_entries {
            entry.last_updated = at(0);
        }
        serde_json::to_string(&output).unwrap()
    };
    assert_eq!(strip(first), strip(second));
}

#[test]
fn fixed_clock_is_fully_reproducible() {
    let input = ComputationInput::new(workload(2, 3, 2, 5)).with_time_range(hour());
    let a = compute_at(&input, at(10)).unwrap();
    let b = compute_at(&input, at(10)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn input_is_not_mutated() {
    let input = ComputationInput::new(workload(2, 2, 2, 4))
        .with_queries(vec![query(&["system-0", "system-1"], &["category-1"], 0.0)])
        .with_options(scoped(&["category-1"]));
    let snapshot = input.clone();

    let _ = compute(&input).unwrap();
    assert_eq!(input, snapshot);
}

// ═══════════════════════════════════════════════════════════════════════════
// Scope filter
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn scope_filter_restricts_aggregation_categories() {
    let input = ComputationInput::new(vec![
        signal("p1", "sys-a", "performance", 10.0, 1.0, 0),
        signal("p1", "sys-b", "performance", 12.0, 1.0, 0),
        signal("p1", "sys-a", "cost", 3.0, 1.0, 0),
        signal("p2", "sys-b", "reliability", 0.99, 1.0, 0),
    ])
    .with_options(scoped(&["performance"]));

    let output = compute(&input).unwrap();
    assert!(!output.aggregation.signals.is_empty());
    assert!(output
        .aggregation
        .signals
        .iter()
        .all(|s| s.category == "performance"));
    assert!(output
        .consensus
        .signals
        .iter()
        .all(|s| s.metric == "performance"));
}

#[test]
fn scope_filter_applies_before_correlation() {
    let mut signals = series("sys-a", "latency", &[1.0, 2.0, 3.0]);
    signals.extend(series("sys-b", "latency", &[1.0, 2.0, 3.0]));
    let input = ComputationInput::new(signals)
        .with_queries(vec![query(&["sys-a", "sys-b"], &["latency"], 0.5)])
        .with_options(scoped(&["cost"]));

    let output = compute(&input).unwrap();
    assert!(output.aggregation.signals.is_empty());
    assert_eq!(output.strategic.correlation_count, 0);
    assert_eq!(output.confidence, 0.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// JSON contract
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn request_json_round_trips_through_engine() {
    let request = serde_json::json!({
        "signals": [
            {
                "partnerId": "acme",
                "sourceSystem": "observatory",
                "category": "performance",
                "value": 120.0,
                "unit": "ms",
                "confidence": 0.9,
                "timestamp": "2024-01-01T00:00:00Z"
            },
            {
                "partnerId": "acme",
                "sourceSystem": "costops",
                "category": "performance",
                "value": 100.0,
                "unit": "ms",
                "confidence": 0.6,
                "timestamp": "2024-01-01T00:05:00Z"
            }
        ],
        "options": { "crossSystemAnalytics": false, "updateIndex": true }
    });
    let input: ComputationInput = serde_json::from_value(request).unwrap();

    let engine = EcosystemEngine::default();
    let output = engine.compute(&input).unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert!(json["aggregation"]["indexEntries"].is_array());
    assert!(json["consensus"]["overallAlignment"].is_number());
    assert_eq!(json["strategic"]["correlationCount"], 0);
    assert_eq!(json["tokenEstimate"], output.token_estimate);
    assert_eq!(
        json["consensus"]["signals"][0]["divergenceFactors"][0]["system"],
        "costops"
    );
}

#[test]
fn divergence_factors_omitted_when_aligned() {
    let input = ComputationInput::new(vec![
        signal("p1", "sys-a", "latency", 50.0, 1.0, 0),
        signal("p1", "sys-b", "latency", 50.0, 1.0, 0),
    ]);
    let output = compute(&input).unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert!(json["consensus"]["signals"][0]
        .get("divergenceFactors")
        .is_none());
}
