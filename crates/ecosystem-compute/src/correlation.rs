//! Strategic correlation: Pearson coefficients between `(system, metric)` series.
//!
//! Series are paired by position after truncating to the shorter one, not by
//! timestamp. Downstream consumers rely on this alignment.

use std::collections::BTreeMap;

use ecosystem_core::config::ComputeConfig;
use ecosystem_core::models::{
    CorrelationPair, CrossSystemQuery, Signal, StrategicResult, StrategicSignal,
};
use tracing::debug;

/// Run every query with the default precision and minimum point count.
pub fn correlate(signals: &[Signal], queries: &[CrossSystemQuery]) -> StrategicResult {
    correlate_with(signals, queries, &ComputeConfig::default())
}

/// Run every query. Queries without a qualifying pair emit no signal.
pub fn correlate_with(
    signals: &[Signal],
    queries: &[CrossSystemQuery],
    config: &ComputeConfig,
) -> StrategicResult {
    let mut result = StrategicResult::default();

    for query in queries {
        let pairs = correlate_query(signals, query, config);
        if pairs.is_empty() {
            continue;
        }
        result.correlation_count += pairs.len();
        result.signals.push(StrategicSignal {
            correlation_pairs: pairs,
            time_range: query.time_range,
        });
    }

    debug!(
        queries = queries.len(),
        emitted = result.signals.len(),
        correlation_count = result.correlation_count,
        "strategic correlation complete"
    );
    result
}

fn correlate_query(
    signals: &[Signal],
    query: &CrossSystemQuery,
    config: &ComputeConfig,
) -> Vec<CorrelationPair> {
    // (system, metric) -> values in arrival order
    let mut series: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for signal in signals.iter().filter(|s| matches_query(s, query)) {
        series
            .entry((signal.source_system.as_str(), signal.category.as_str()))
            .or_default()
            .push(signal.value);
    }

    let keyed: Vec<(&(&str, &str), &Vec<f64>)> = series.iter().collect();
    let mut pairs = Vec::new();
    let mut evaluated = 0usize;

    for (i, (key_a, values_a)) in keyed.iter().enumerate() {
        for (key_b, values_b) in &keyed[i + 1..] {
            let len = values_a.len().min(values_b.len());
            if len < config.min_correlation_points {
                continue;
            }
            evaluated += 1;

            let r = pearson(&values_a[..len], &values_b[..len]);
            if r.abs() >= query.correlation_threshold {
                pairs.push(CorrelationPair {
                    system_a: key_a.0.to_string(),
                    system_b: key_b.0.to_string(),
                    metric_a: key_a.1.to_string(),
                    metric_b: key_b.1.to_string(),
                    correlation_coefficient: round_to(r, config.correlation_precision),
                });
            }
        }
    }

    debug!(
        series = series.len(),
        evaluated,
        retained = pairs.len(),
        threshold = query.correlation_threshold,
        "correlated query"
    );
    pairs
}

fn matches_query(signal: &Signal, query: &CrossSystemQuery) -> bool {
    query.source_systems.iter().any(|s| *s == signal.source_system)
        && query.metrics.iter().any(|m| *m == signal.category)
        && query.time_range.contains(signal.timestamp)
}

/// Pearson correlation coefficient of the first `min(x.len(), y.len())` points.
///
/// `r = (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))`. Returns 0 when
/// either series has no spread or the input is empty; never NaN. The result
/// is clamped to [-1, 1].
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }

    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_yy, mut sum_xy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y.iter()).take(n) {
        sum_x += a;
        sum_y += b;
        sum_xx += a * a;
        sum_yy += b * b;
        sum_xy += a * b;
    }

    // Cancellation can leave rounding noise in the spread of a constant series.
    if is_constant(&x[..n]) || is_constant(&y[..n]) {
        return 0.0;
    }

    let nf = n as f64;
    let numerator = nf * sum_xy - sum_x * sum_y;
    let spread_x = nf * sum_xx - sum_x * sum_x;
    let spread_y = nf * sum_yy - sum_y * sum_y;

    let denominator = (spread_x * spread_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    let r = numerator / denominator;
    if r.is_nan() {
        return 0.0;
    }
    r.clamp(-1.0, 1.0)
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Round half away from zero to `places` decimals. Precisions beyond what an
/// f64 can scale leave the value unrounded.
pub fn round_to(value: f64, places: u32) -> f64 {
    let Ok(exponent) = i32::try_from(places) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    if !factor.is_finite() {
        return value;
    }
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
