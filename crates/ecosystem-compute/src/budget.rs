//! Token estimate and post-hoc budget evaluation.

use std::time::Duration;

use ecosystem_core::config::BudgetConfig;
use ecosystem_core::errors::{EcosystemError, EcosystemResult};
use ecosystem_core::models::ComputationOutput;
use serde::Serialize;
use tracing::warn;

/// Set `output.token_estimate` from the output's own serialized size.
///
/// The field is zeroed before measuring and assigned afterwards, so the
/// estimate counts a placeholder `0` for itself. Keep this order: changing it
/// changes every estimate.
///
/// Length is counted in Unicode scalar values of compact `serde_json` output,
/// which writes whole floats as `1.0` and timestamps as RFC 3339. Estimates
/// from a serializer that prints `1` or counts UTF-16 code units will differ.
pub fn measure_token_estimate(
    output: &mut ComputationOutput,
    chars_per_token: usize,
) -> EcosystemResult<usize> {
    output.token_estimate = 0;
    let serialized = serde_json::to_string(output)?;
    let estimate = serialized.chars().count().div_ceil(chars_per_token.max(1));
    output.token_estimate = estimate;
    Ok(estimate)
}

/// Measured usage of one invocation against its budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub token_estimate: usize,
    pub max_tokens: usize,
    pub latency_ms: u64,
    pub max_latency_ms: u64,
}

impl BudgetReport {
    pub fn evaluate(token_estimate: usize, elapsed: Duration, config: &BudgetConfig) -> Self {
        Self {
            token_estimate,
            max_tokens: config.max_tokens,
            latency_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            max_latency_ms: config.max_latency_ms,
        }
    }

    pub fn tokens_exceeded(&self) -> bool {
        self.token_estimate > self.max_tokens
    }

    pub fn latency_exceeded(&self) -> bool {
        self.latency_ms > self.max_latency_ms
    }

    pub fn within_budget(&self) -> bool {
        !self.tokens_exceeded() && !self.latency_exceeded()
    }

    /// Warn about every exceeded budget.
    pub fn log(&self) {
        if self.tokens_exceeded() {
            warn!(
                token_estimate = self.token_estimate,
                max_tokens = self.max_tokens,
                "token budget exceeded"
            );
        }
        if self.latency_exceeded() {
            warn!(
                latency_ms = self.latency_ms,
                max_latency_ms = self.max_latency_ms,
                "latency budget exceeded"
            );
        }
    }

    /// First exceeded budget as an error. Tokens are checked before latency.
    pub fn enforce(&self) -> EcosystemResult<()> {
        if self.tokens_exceeded() {
            return Err(EcosystemError::TokenBudgetExceeded {
                needed: self.token_estimate,
                available: self.max_tokens,
            });
        }
        if self.latency_exceeded() {
            return Err(EcosystemError::LatencyBudgetExceeded {
                elapsed_ms: self.latency_ms,
                available_ms: self.max_latency_ms,
            });
        }
        Ok(())
    }
}
