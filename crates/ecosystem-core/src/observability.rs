//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::{EcosystemError, EcosystemResult};

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. Returns `Ok(false)` when a global
/// subscriber was already installed (tests, embedding hosts).
pub fn init_tracing(config: &ObservabilityConfig) -> EcosystemResult<bool> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| EcosystemError::Tracing(e.to_string()))?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(level = %config.log_level, json = config.json, "tracing initialized");
    }
    Ok(installed)
}
