use serde::{Deserialize, Serialize};

/// A system whose average strays from the overall average beyond tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceFactor {
    pub system: String,
    /// Signed: `system_avg - overall_avg`.
    pub deviation: f64,
}

/// Agreement between systems reporting the same category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusSignal {
    /// The category the systems agree (or not) on.
    pub metric: String,
    pub systems: Vec<String>,
    /// In [0, 1]; 1 when the overall average is zero.
    pub alignment_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divergence_factors: Option<Vec<DivergenceFactor>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusResult {
    pub signals: Vec<ConsensusSignal>,
    /// Mean alignment over `signals`, 0 when there are none.
    pub overall_alignment: f64,
}
