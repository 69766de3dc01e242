pub mod budget_config;
pub mod compute_config;
pub mod defaults;
pub mod observability_config;

use serde::{Deserialize, Serialize};

pub use budget_config::BudgetConfig;
pub use compute_config::ComputeConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::EcosystemResult;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EcosystemConfig {
    pub compute: ComputeConfig,
    pub budget: BudgetConfig,
    pub observability: ObservabilityConfig,
}

impl EcosystemConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> EcosystemResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EcosystemResult<()> {
        self.compute.validate()?;
        self.observability.validate()
    }
}
