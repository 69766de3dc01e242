//! Signal builders shared by the ecosystem test suites and benchmarks.
//!
//! All timestamps are offsets from a fixed epoch so outputs are reproducible.

use chrono::{DateTime, Duration, TimeZone, Utc};

use ecosystem_core::models::{CrossSystemQuery, Signal, TimeRange};

/// 2024-01-01T00:00:00Z.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn at(offset_secs: i64) -> DateTime<Utc> {
    epoch() + Duration::seconds(offset_secs)
}

/// `[epoch + start, epoch + end]`.
pub fn window(start_secs: i64, end_secs: i64) -> TimeRange {
    TimeRange::new(at(start_secs), at(end_secs))
}

/// A one-hour window starting at the epoch.
pub fn hour() -> TimeRange {
    window(0, 3600)
}

pub fn signal(
    partner_id: &str,
    source_system: &str,
    category: &str,
    value: f64,
    confidence: f64,
    offset_secs: i64,
) -> Signal {
    Signal {
        partner_id: partner_id.to_string(),
        source_system: source_system.to_string(),
        category: category.to_string(),
        value,
        unit: "unit".to_string(),
        confidence,
        timestamp: at(offset_secs),
    }
}

/// One signal per value, one minute apart, all from the same partner.
pub fn series(source_system: &str, category: &str, values: &[f64]) -> Vec<Signal> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| signal("partner-1", source_system, category, *v, 1.0, i as i64 * 60))
        .collect()
}

pub fn query(systems: &[&str], metrics: &[&str], threshold: f64) -> CrossSystemQuery {
    CrossSystemQuery {
        source_systems: systems.iter().map(|s| s.to_string()).collect(),
        metrics: metrics.iter().map(|m| m.to_string()).collect(),
        time_range: hour(),
        correlation_threshold: threshold,
    }
}

/// Deterministic mixed workload: `partners × systems × categories × per_key` signals.
pub fn workload(partners: usize, systems: usize, categories: usize, per_key: usize) -> Vec<Signal> {
    let mut signals = Vec::with_capacity(partners * systems * categories * per_key);
    for p in 0..partners {
        for s in 0..systems {
            for c in 0..categories {
                for i in 0..per_key {
                    let value = 100.0 + (p * 7 + s * 3 + c) as f64 + (i as f64 * 0.37).sin() * 10.0;
                    let confidence = 0.5 + ((p + s + c + i) % 5) as f64 * 0.1;
                    signals.push(signal(
                        &format!("partner-{p}"),
                        &format!("system-{s}"),
                        &format!("category-{c}"),
                        value,
                        confidence,
                        (i as i64) * 30,
                    ));
                }
            }
        }
    }
    signals
}
