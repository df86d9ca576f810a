//! Constants used by the evolution kernel and the default run configuration.

/// Kernel and run constants
pub mod collapse_constants {
    /// Used for phase angles (`e^(iθ)`)
    pub const PI: f64 = std::f64::consts::PI;
    /// `|alpha|^2` at or above this value collapses to `'0'`.
    pub const COLLAPSE_THRESHOLD: f64 = 0.5;
    /// Default register width.
    pub const DEFAULT_QUBIT_COUNT: usize = 100;
    /// Default number of evolution rounds per sample.
    pub const DEFAULT_DEPTH: usize = 50;
    /// Default number of samples per run.
    pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
    /// Default progress reporting period, in samples.
    pub const DEFAULT_PROGRESS_INTERVAL: usize = 500;
}
