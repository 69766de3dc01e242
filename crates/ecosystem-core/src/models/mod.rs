mod aggregation;
mod computation;
mod consensus;
mod signal;
mod strategic;

pub use aggregation::{AggregationResult, AggregationSignal, IndexEntry};
pub use computation::{ComputationInput, ComputationOutput, ComputeOptions};
pub use consensus::{ConsensusResult, ConsensusSignal, DivergenceFactor};
pub use signal::{Signal, SignalGroup, TimeRange};
pub use strategic::{CorrelationPair, CrossSystemQuery, StrategicResult, StrategicSignal};
