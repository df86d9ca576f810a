// src/simulation/mod.rs

//! Drives qubit registers through the initialize → evolve → collapse pipeline.
//! This module contains the `Sampler` entry point and the internal engine
//! functions that produce individual samples and ordered collections.

mod config;
mod progress;
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use config::SamplerConfig;
pub use engine::{generate_collection, generate_collection_parallel, generate_sample};
pub use progress::{LogProgress, ProgressObserver};
pub use results::SampleCollection;

use crate::core::constants::collapse_constants::DEFAULT_PROGRESS_INTERVAL;
use crate::core::Bitstring;
use tracing::{debug, info};

/// How a [`Sampler`] schedules independent samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One sample after another on the calling thread.
    #[default]
    Sequential,
    /// Samples sharded over the rayon thread pool. Output order is unchanged.
    Parallel,
}

/// Generates sample collections for a fixed [`SamplerConfig`].
#[derive(Debug, Clone)]
pub struct Sampler {
    config: SamplerConfig,
    mode: ExecutionMode,
    progress_interval: usize,
}

impl Sampler {
    /// Creates a sequential sampler reporting progress every 500 samples.
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            mode: ExecutionMode::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Selects sequential or parallel generation.
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets how many samples pass between progress reports. `0` disables reporting.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// The configuration this sampler runs.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// The scheduling mode.
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Produces a single sample for this configuration.
    pub fn generate_sample(&self) -> Bitstring {
        generate_sample(self.config.qubit_count(), self.config.depth())
    }

    /// Generates the full collection without progress reports.
    pub fn run(&self) -> SampleCollection {
        self.run_inner(None)
    }

    /// Generates the full collection, notifying `observer` every `progress_interval` samples.
    ///
    /// The observer sees the same values in both modes, though in parallel mode
    /// the reports may arrive out of order.
    pub fn run_with_progress(&self, observer: &dyn ProgressObserver) -> SampleCollection {
        self.run_inner(Some(observer))
    }

    fn run_inner(&self, observer: Option<&dyn ProgressObserver>) -> SampleCollection {
        let (qubit_count, depth, sample_count) =
            (self.config.qubit_count(), self.config.depth(), self.config.sample_count());
        info!(qubit_count, depth, sample_count, mode = ?self.mode, "starting collapse sampling");

        let collection = match self.mode {
            ExecutionMode::Sequential => {
                engine::collect_sequential(qubit_count, depth, sample_count, observer, self.progress_interval)
            }
            ExecutionMode::Parallel => {
                engine::collect_parallel(qubit_count, depth, sample_count, observer, self.progress_interval)
            }
        };

        debug!(samples = collection.len(), distinct = collection.distinct_count(), "collapse sampling finished");
        collection
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CollapseError, Qubit, QubitRegister, gate_angle};

    fn small_config() -> Result<SamplerConfig, CollapseError> {
        SamplerConfig::new(4, 0, 5)
    }

    #[test]
    fn test_zero_depth_golden() {
        // After normalizing by √2 every |alpha|^2 lands a hair under 0.5.
        assert_eq!(generate_sample(4, 0).as_str(), "1111");
    }

    #[test]
    fn test_shallow_evolution_golden() {
        assert_eq!(generate_sample(4, 3).as_str(), "0001");
        assert_eq!(generate_sample(6, 4).as_str(), "000110");
    }

    #[test]
    fn test_deep_evolution_golden() {
        assert_eq!(generate_sample(16, 50).as_str(), "0011000000000100");
    }

    #[test]
    fn test_sampler_uses_config() -> Result<(), CollapseError> {
        let sampler = Sampler::new(small_config()?).with_progress_interval(0);
        let collection = sampler.run();
        assert_eq!(collection.len(), 5);
        assert!(collection.iter().all(|s| s.len() == 4));
        assert_eq!(sampler.generate_sample(), generate_sample(4, 0));
        Ok(())
    }

    #[test]
    fn test_register_evolution_matches_per_qubit_evolution() {
        let (qubit_count, depth) = (7, 6);
        let mut register = QubitRegister::initialized(qubit_count);
        register.evolve(depth);

        for index in 0..qubit_count {
            let mut qubit = Qubit::initialized(index, qubit_count);
            for round in 0..depth {
                qubit.apply_deterministic_gate(gate_angle(round, index, depth, qubit_count));
            }
            assert_eq!(qubit, register.qubits()[index], "qubit {} diverged", index);
        }
    }

    #[test]
    fn test_modes_agree() -> Result<(), CollapseError> {
        let config = SamplerConfig::new(12, 5, 40)?;
        let sequential = Sampler::new(config).run();
        let parallel = Sampler::new(config).with_mode(ExecutionMode::Parallel).run();
        assert_eq!(sequential, parallel);
        Ok(())
    }
}
