//! Raw signals reported by partner systems, and the time windows they fall in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single numeric observation reported by a source system for a category.
///
/// Created by the caller and never mutated by the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub partner_id: String,
    pub source_system: String,
    pub category: String,
    pub value: f64,
    pub unit: String,
    /// Expected in [0, 1]; not enforced here.
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// Closed time interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// Smallest range covering every signal timestamp. `None` for an empty slice.
    pub fn spanning(signals: &[Signal]) -> Option<Self> {
        let start = signals.iter().map(|s| s.timestamp).min()?;
        let end = signals.iter().map(|s| s.timestamp).max()?;
        Some(Self { start, end })
    }
}

/// Signals sharing a partner and category. Lives only for the duration of aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalGroup {
    pub partner_id: String,
    pub category: String,
    pub signals: Vec<Signal>,
}
