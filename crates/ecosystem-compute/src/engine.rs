//! EcosystemEngine: configured entry point implementing ISignalEngine.

use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;

use ecosystem_core::config::EcosystemConfig;
use ecosystem_core::errors::EcosystemResult;
use ecosystem_core::models::{ComputationInput, ComputationOutput};
use ecosystem_core::traits::ISignalEngine;
use tracing::debug;

use crate::budget::BudgetReport;
use crate::orchestrator;

/// Output of one invocation plus its measured budget usage.
#[derive(Debug, Clone)]
pub struct EngineRun {
    pub output: ComputationOutput,
    pub budget: BudgetReport,
}

/// Stateless signal engine. Holds configuration only; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct EcosystemEngine {
    config: EcosystemConfig,
}

impl EcosystemEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: EcosystemConfig) -> EcosystemResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    /// Compute, then measure latency and compare against the budgets.
    ///
    /// Overruns are logged. With `budget.enforce` set, the first overrun is
    /// returned as an error instead of the output.
    pub fn run(&self, input: &ComputationInput) -> EcosystemResult<EngineRun> {
        let started = Instant::now();
        let output = self.compute(input)?;
        let budget = BudgetReport::evaluate(
            output.token_estimate,
            started.elapsed(),
            &self.config.budget,
        );

        budget.log();
        if self.config.budget.enforce {
            budget.enforce()?;
        }
        Ok(EngineRun { output, budget })
    }
}

impl ISignalEngine for EcosystemEngine {
    fn compute(&self, input: &ComputationInput) -> EcosystemResult<ComputationOutput> {
        orchestrator::compute_with(input, &self.config.compute, Utc::now())
    }

    /// Invocations share nothing, so they fan out on the rayon pool.
    fn compute_batch(
        &self,
        inputs: &[ComputationInput],
    ) -> Vec<EcosystemResult<ComputationOutput>> {
        debug!(batch = inputs.len(), "computing batch");
        inputs.par_iter().map(|input| self.compute(input)).collect()
    }
}
