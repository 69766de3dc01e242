//! Post-hoc resource budgets checked by the caller after a computation.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Token and latency budgets for one invocation.
///
/// The computation itself never short-circuits on these; they are compared
/// against the measured values once the output exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub max_tokens: usize,
    pub max_latency_ms: u64,
    /// Turn an overrun into an error instead of a warning.
    pub enforce: bool,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            max_latency_ms: defaults::DEFAULT_MAX_LATENCY_MS,
            enforce: false,
        }
    }
}
