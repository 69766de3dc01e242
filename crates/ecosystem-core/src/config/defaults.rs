//! Default values shared by the config sections.

/// Absolute deviation above which a system is reported as divergent.
pub const DEFAULT_DIVERGENCE_TOLERANCE: f64 = 0.01;

/// Decimal places kept on emitted correlation coefficients.
pub const DEFAULT_CORRELATION_PRECISION: u32 = 4;

/// Most decimal places an f64 coefficient can meaningfully carry.
pub const MAX_CORRELATION_PRECISION: u32 = 15;

/// Serialized characters per estimated token.
pub const DEFAULT_CHARS_PER_TOKEN: usize = 4;

/// Minimum aligned points before a pair is correlated.
pub const DEFAULT_MIN_CORRELATION_POINTS: usize = 2;

// Confidence blend: aggregation presence, alignment, correlation presence.
pub const DEFAULT_AGGREGATION_WEIGHT: f64 = 0.4;
pub const DEFAULT_ALIGNMENT_WEIGHT: f64 = 0.3;
pub const DEFAULT_CORRELATION_WEIGHT: f64 = 0.3;

pub const DEFAULT_MAX_TOKENS: usize = 2000;
pub const DEFAULT_MAX_LATENCY_MS: u64 = 3000;

pub const DEFAULT_LOG_LEVEL: &str = "info";
