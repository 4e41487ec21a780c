//! Repeated executions.
//!
//! Every execution gets its own seed drawn from a master `ChaCha8Rng`, using a
//! separate stream per traffic pattern. Fixing the master seed therefore pins
//! down every run of every pattern in the batch.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::SimulationConfig,
    error::HarnessError,
    traffic::{Driver, RunOutcome, TrafficPattern},
};

/// Runs batches of independent protocol instances.
#[derive(Debug, Clone)]
pub struct Runner {
    config: SimulationConfig,
    master_seed: u64,
}

impl Runner {
    /// Validate `config` and fix the master seed.
    pub fn new(config: SimulationConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        let master_seed = config.seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().next_u64());

        Ok(Self { config, master_seed })
    }

    /// Seed every run in this batch derives from.
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Configuration the runner was built with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run `executions` independent instances under `pattern`.
    pub fn run(&self, pattern: TrafficPattern) -> Result<Vec<RunOutcome>, HarnessError> {
        let mut master = ChaCha8Rng::seed_from_u64(self.master_seed);
        master.set_stream(pattern.stream());

        tracing::info!(
            pattern = pattern.label(),
            executions = self.config.executions,
            master_seed = self.master_seed,
            "running executions"
        );

        (0..self.config.executions)
            .map(|execution| {
                let seed = master.next_u64();
                tracing::debug!(pattern = pattern.label(), execution, seed, "starting run");

                Driver::new(seed, self.config.n, self.config.d, self.config.message_lengths())?
                    .run(pattern)
            })
            .collect()
    }
}

/// Count how often each role was active across `outcomes`, in
/// [`padzone_core::Role::ALL`] order.
pub fn activity_counts(outcomes: &[RunOutcome]) -> [usize; 4] {
    let mut counts = [0; 4];
    for role in outcomes.iter().flat_map(|outcome| &outcome.active) {
        counts[role.index()] += 1;
    }
    counts
}
