//! One full invocation: scope filter, aggregation, consensus, strategic
//! correlation, confidence blend and token estimate.
//!
//! Pure apart from the wall clock used for `IndexEntry::last_updated`; the
//! `*_at` variant takes that clock explicitly.

use std::borrow::Cow;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use ecosystem_core::config::ComputeConfig;
use ecosystem_core::errors::EcosystemResult;
use ecosystem_core::models::{
    ComputationInput, ComputationOutput, ComputeOptions, Signal, StrategicResult, TimeRange,
};
use tracing::info;

use crate::{aggregation, budget, consensus, correlation, grouping};

/// Compute with default settings, stamping index entries with `Utc::now()`.
pub fn compute(input: &ComputationInput) -> EcosystemResult<ComputationOutput> {
    compute_at(input, Utc::now())
}

/// Compute with default settings and an explicit clock.
pub fn compute_at(
    input: &ComputationInput,
    now: DateTime<Utc>,
) -> EcosystemResult<ComputationOutput> {
    compute_with(input, &ComputeConfig::default(), now)
}

/// Compute one invocation.
///
/// Fails only if the output cannot be serialized for the token estimate.
pub fn compute_with(
    input: &ComputationInput,
    config: &ComputeConfig,
    now: DateTime<Utc>,
) -> EcosystemResult<ComputationOutput> {
    let default_options = ComputeOptions::default();
    let options = input.options.as_ref().unwrap_or(&default_options);

    let signals = apply_scope_filter(&input.signals, options.scope_filter.as_deref());
    let time_range = input
        .time_range
        .or_else(|| TimeRange::spanning(&signals))
        .unwrap_or_else(|| TimeRange::new(now, now));

    let groups = grouping::group_signals(&signals);
    let aggregation = aggregation::aggregate_at(&groups, &time_range, now);

    let systems: BTreeSet<String> = signals.iter().map(|s| s.source_system.clone()).collect();
    let consensus =
        consensus::score_consensus_with(&signals, &systems, config.divergence_tolerance);

    let strategic = match input.cross_system_queries.as_deref() {
        Some(queries) if options.cross_system_analytics && !queries.is_empty() => {
            correlation::correlate_with(&signals, queries, config)
        }
        _ => StrategicResult::default(),
    };

    let confidence = blend_confidence(
        !aggregation.is_empty(),
        consensus.overall_alignment,
        strategic.correlation_count > 0,
        config,
    );

    let mut output = ComputationOutput {
        aggregation,
        consensus,
        strategic,
        confidence,
        token_estimate: 0,
    };
    budget::measure_token_estimate(&mut output, config.chars_per_token)?;

    info!(
        signals = input.signals.len(),
        in_scope = signals.len(),
        aggregations = output.aggregation.signals.len(),
        consensus = output.consensus.signals.len(),
        correlations = output.strategic.correlation_count,
        confidence = output.confidence,
        token_estimate = output.token_estimate,
        "ecosystem signals computed"
    );
    Ok(output)
}

/// Keep only signals whose category is listed. No filter keeps everything
/// without copying; an empty filter keeps nothing.
pub fn apply_scope_filter<'a>(
    signals: &'a [Signal],
    scope: Option<&[String]>,
) -> Cow<'a, [Signal]> {
    match scope {
        None => Cow::Borrowed(signals),
        Some(categories) => Cow::Owned(
            signals
                .iter()
                .filter(|s| categories.iter().any(|c| *c == s.category))
                .cloned()
                .collect(),
        ),
    }
}

/// `min(1, w_agg·[aggregated] + w_align·alignment + w_corr·[correlated])`.
pub fn blend_confidence(
    aggregated: bool,
    overall_alignment: f64,
    correlated: bool,
    config: &ComputeConfig,
) -> f64 {
    let presence = |flag: bool| if flag { 1.0 } else { 0.0 };
    let blended = config.aggregation_weight * presence(aggregated)
        + config.alignment_weight * overall_alignment
        + config.correlation_weight * presence(correlated);
    blended.min(1.0)
}
