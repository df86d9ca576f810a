// src/simulation/engine.rs
use crate::core::{Bitstring, QubitRegister};
use crate::validation::validate_register;
use crate::simulation::SampleCollection;
use crate::simulation::progress::{should_report, ProgressObserver};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

/// Runs one sample: initialize, evolve through `depth` rounds, collapse.
///
/// The register is private to this call and dropped once its bitstring is
/// extracted, so repeated calls with the same arguments return identical
/// bitstrings and calls can run concurrently.
pub fn generate_sample(qubit_count: usize, depth: usize) -> Bitstring {
    let mut register = QubitRegister::initialized(qubit_count);
    register.evolve(depth);
    debug_assert!(validate_register(&register, None).is_ok(), "register left unit norm after {} rounds", depth);
    register.collapse()
}

/// Runs `sample_count` independent samples in order on the calling thread.
pub fn generate_collection(qubit_count: usize, depth: usize, sample_count: usize) -> SampleCollection {
    collect_sequential(qubit_count, depth, sample_count, None, 0)
}

/// Runs `sample_count` independent samples on the rayon pool.
///
/// Each worker writes into the slot of its sample index, so the result is
/// identical to [`generate_collection`].
///
/// Progress in parallel runs counts completions, not sample indices: the
/// worker that finishes the `k`-th sample (in completion order) reports `k`,
/// so reports may arrive out of order and need not refer to sample `k`.
pub fn generate_collection_parallel(qubit_count: usize, depth: usize, sample_count: usize) -> SampleCollection {
    collect_parallel(qubit_count, depth, sample_count, None, 0)
}

pub(crate) fn collect_sequential(
    qubit_count: usize,
    depth: usize,
    sample_count: usize,
    observer: Option<&dyn ProgressObserver>,
    progress_interval: usize,
) -> SampleCollection {
    let mut samples = Vec::with_capacity(sample_count);
    for index in 0..sample_count {
        samples.push(generate_sample(qubit_count, depth));
        if should_report(index, progress_interval) {
            debug!(current = index, total = sample_count, "sample milestone");
            if let Some(observer) = observer {
                observer.on_progress(index, sample_count);
            }
        }
    }
    trace!(sample_count, "sequential collection complete");
    SampleCollection::from_ordered(samples)
}

pub(crate) fn collect_parallel(
    qubit_count: usize,
    depth: usize,
    sample_count: usize,
    observer: Option<&dyn ProgressObserver>,
    progress_interval: usize,
) -> SampleCollection {
    let completed = AtomicUsize::new(0);
    let mut samples = Vec::with_capacity(sample_count);
    (0..sample_count)
        .into_par_iter()
        .map(|_| {
            let sample = generate_sample(qubit_count, depth);
            let current = completed.fetch_add(1, Ordering::Relaxed);
            if should_report(current, progress_interval) {
                debug!(current, total = sample_count, "sample milestone");
                if let Some(observer) = observer {
                    observer.on_progress(current, sample_count);
                }
            }
            sample
        })
        .collect_into_vec(&mut samples);
    trace!(sample_count, threads = rayon::current_num_threads(), "parallel collection complete");
    SampleCollection::from_ordered(samples)
}
