//! Request and response shapes of one computation invocation.

use serde::{Deserialize, Serialize};

use super::{
    AggregationResult, ConsensusResult, CrossSystemQuery, Signal, StrategicResult, TimeRange,
};

/// Caller options for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputeOptions {
    /// Reporting granularity requested upstream; carried, not interpreted.
    pub granularity: Option<String>,
    /// Whether the persistence collaborator should write `IndexEntry` values.
    pub update_index: bool,
    pub cross_system_analytics: bool,
    /// Restrict every stage to these categories.
    pub scope_filter: Option<Vec<String>>,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self {
            granularity: None,
            update_index: true,
            cross_system_analytics: true,
            scope_filter: None,
        }
    }
}

/// Schema-valid input handed over by the request layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputationInput {
    pub signals: Vec<Signal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_system_queries: Option<Vec<CrossSystemQuery>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ComputeOptions>,
    /// Aggregation window. Derived from the signal timestamps when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

impl ComputationInput {
    pub fn new(signals: Vec<Signal>) -> Self {
        Self {
            signals,
            cross_system_queries: None,
            options: None,
            time_range: None,
        }
    }

    pub fn with_queries(mut self, queries: Vec<CrossSystemQuery>) -> Self {
        self.cross_system_queries = Some(queries);
        self
    }

    pub fn with_options(mut self, options: ComputeOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }
}

/// The sole return value of one invocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputationOutput {
    pub aggregation: AggregationResult,
    pub consensus: ConsensusResult,
    pub strategic: StrategicResult,
    /// In [0, 1].
    pub confidence: f64,
    /// ceil(serialized length / chars_per_token), measured with this field at 0.
    pub token_estimate: usize,
}
