/// Top-level error type for ecosystem signal computation.
///
/// The numeric core resolves every edge case to a defined value, so these
/// variants only cover the ambient concerns around it.
#[derive(Debug, thiserror::Error)]
pub enum EcosystemError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    ConfigValidation(String),

    #[error("token budget exceeded: needed {needed}, available {available}")]
    TokenBudgetExceeded { needed: usize, available: usize },

    #[error("latency budget exceeded: took {elapsed_ms}ms, available {available_ms}ms")]
    LatencyBudgetExceeded { elapsed_ms: u64, available_ms: u64 },

    #[error("tracing init failed: {0}")]
    Tracing(String),
}

/// Convenience type alias.
pub type EcosystemResult<T> = Result<T, EcosystemError>;
