// src/simulation/progress.rs

//! Progress side channel for long runs.

use tracing::info;

/// Receives `(current, total)` notifications while samples are generated.
///
/// `current` is the zero-based count of samples completed before the one that
/// triggered the report, so the first report of a run carries `0`. In
/// sequential runs this equals the index of the sample just generated. In
/// parallel runs it is a completion counter bumped by whichever worker
/// finished, so reports may arrive out of order and `current` does not name a
/// particular sample index. Observers cannot influence the generated values or
/// their order. `Sync` is required because parallel runs notify from worker
/// threads.
pub trait ProgressObserver: Sync {
    /// Called every `progress_interval` completed samples.
    fn on_progress(&self, current: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize) + Sync,
{
    fn on_progress(&self, current: usize, total: usize) {
        self(current, total)
    }
}

/// Observer that emits an `info` event per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&self, current: usize, total: usize) {
        info!(current, total, "Progress: {}/{} samples", current, total);
    }
}

/// Whether completed-sample number `current` triggers a report.
pub(crate) fn should_report(current: usize, interval: usize) -> bool {
    interval > 0 && current % interval == 0
}
