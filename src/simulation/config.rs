// src/simulation/config.rs
use crate::core::constants::collapse_constants::{DEFAULT_DEPTH, DEFAULT_QUBIT_COUNT, DEFAULT_SAMPLE_COUNT};
use crate::core::CollapseError;
use std::fmt;

/// Shape of a sampling run.
///
/// Passed explicitly to the [`Sampler`](super::Sampler) so tests can run at
/// small scales. `Default` gives the full-size run: 100 qubits, depth 50,
/// 10 000 samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerConfig {
    qubit_count: usize,
    depth: usize,
    sample_count: usize,
}

impl SamplerConfig {
    /// Validates and builds a configuration.
    ///
    /// # Returns
    /// * `Err(CollapseError::InvalidConfig)` if `qubit_count` is zero.
    ///   `depth` and `sample_count` may be zero.
    pub fn new(qubit_count: usize, depth: usize, sample_count: usize) -> Result<Self, CollapseError> {
        if qubit_count == 0 {
            return Err(CollapseError::InvalidConfig {
                message: "qubit count must be greater than zero".to_string(),
            });
        }
        Ok(Self { qubit_count, depth, sample_count })
    }

    /// Number of qubits per sample (bitstring length).
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Number of evolution rounds per sample.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of samples in a run.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            qubit_count: DEFAULT_QUBIT_COUNT,
            depth: DEFAULT_DEPTH,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl fmt::Display for SamplerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qubits: {}, Depth: {}, Samples: {}", self.qubit_count, self.depth, self.sample_count)
    }
}
