//! Numeric settings for the signal computation pipeline.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{EcosystemError, EcosystemResult};

/// Configuration for aggregation, consensus, correlation and the confidence blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    // Consensus
    pub divergence_tolerance: f64,

    // Correlation
    pub correlation_precision: u32,
    pub min_correlation_points: usize,

    // Token estimate
    pub chars_per_token: usize,

    // Confidence blend
    pub aggregation_weight: f64,
    pub alignment_weight: f64,
    pub correlation_weight: f64,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            divergence_tolerance: defaults::DEFAULT_DIVERGENCE_TOLERANCE,
            correlation_precision: defaults::DEFAULT_CORRELATION_PRECISION,
            min_correlation_points: defaults::DEFAULT_MIN_CORRELATION_POINTS,
            chars_per_token: defaults::DEFAULT_CHARS_PER_TOKEN,
            aggregation_weight: defaults::DEFAULT_AGGREGATION_WEIGHT,
            alignment_weight: defaults::DEFAULT_ALIGNMENT_WEIGHT,
            correlation_weight: defaults::DEFAULT_CORRELATION_WEIGHT,
        }
    }
}

impl ComputeConfig {
    pub fn validate(&self) -> EcosystemResult<()> {
        if !self.divergence_tolerance.is_finite() || self.divergence_tolerance < 0.0 {
            return Err(EcosystemError::ConfigValidation(format!(
                "divergence_tolerance must be a non-negative number, got {}",
                self.divergence_tolerance
            )));
        }
        if self.correlation_precision > defaults::MAX_CORRELATION_PRECISION {
            return Err(EcosystemError::ConfigValidation(format!(
                "correlation_precision must be at most {}, got {}",
                defaults::MAX_CORRELATION_PRECISION,
                self.correlation_precision
            )));
        }
        if self.chars_per_token == 0 {
            return Err(EcosystemError::ConfigValidation(
                "chars_per_token must be at least 1".to_string(),
            ));
        }
        if self.min_correlation_points < 2 {
            return Err(EcosystemError::ConfigValidation(format!(
                "min_correlation_points must be at least 2, got {}",
                self.min_correlation_points
            )));
        }
        for (name, weight) in [
            ("aggregation_weight", self.aggregation_weight),
            ("alignment_weight", self.alignment_weight),
            ("correlation_weight", self.correlation_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EcosystemError::ConfigValidation(format!(
                    "{name} must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }
}
