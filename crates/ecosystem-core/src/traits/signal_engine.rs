//! ISignalEngine: the computation boundary seen by request handlers.

use crate::errors::EcosystemResult;
use crate::models::{ComputationInput, ComputationOutput};

/// Signal computation engine trait.
///
/// Implementations hold no state across calls; any number of invocations may
/// run concurrently without coordination.
pub trait ISignalEngine: Send + Sync {
    /// Run one full invocation: aggregation, consensus, optional strategic
    /// correlation, confidence and token estimate.
    fn compute(&self, input: &ComputationInput) -> EcosystemResult<ComputationOutput>;

    /// Run independent invocations, results in input order.
    fn compute_batch(
        &self,
        inputs: &[ComputationInput],
    ) -> Vec<EcosystemResult<ComputationOutput>> {
        inputs.iter().map(|input| self.compute(input)).collect()
    }
}
