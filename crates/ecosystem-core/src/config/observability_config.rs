use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{EcosystemError, EcosystemResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging settings. `RUST_LOG` takes precedence over `log_level` when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl ObservabilityConfig {
    pub fn validate(&self) -> EcosystemResult<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(EcosystemError::ConfigValidation(format!(
                "unknown log_level '{}', expected one of {:?}",
                self.log_level, LOG_LEVELS
            )));
        }
        Ok(())
    }
}
