// src/lib.rs

//! `qcollapse` - Deterministic collapse sampling over independent qubits
//!
//! Each sample seeds a register of independent two-amplitude states with
//! position-dependent phases, rotates every state through a fixed number of
//! deterministic rounds, and collapses each one to a classical bit by a
//! threshold on `|alpha|^2`. Nothing here is random and no qubit ever reads
//! another, so samples are reproducible and can be generated in parallel.

pub mod core;
pub mod simulation;
pub mod validation;
pub mod output;

// Re-export the most common types for easier top-level use
pub use crate::core::{Bit, Bitstring, CollapseError, Qubit, QubitRegister};
pub use simulation::{
    generate_collection,
    generate_collection_parallel,
    generate_sample,
    ExecutionMode,
    LogProgress,
    ProgressObserver,
    SampleCollection,
    Sampler,
    SamplerConfig,
};
pub use validation::{check_normalization, validate_register};
pub use output::{write_collection, write_csv_file, CsvSink, RecordSink, BITSTRING_HEADER};

// Example 1: Evolving and collapsing a single qubit
/// ```
/// use qcollapse::{Bit, Qubit, check_normalization};
///
/// // Second qubit of a four-qubit register: alpha = e^(iπ/2), beta = i, normalized.
/// let mut qubit = Qubit::initialized(1, 4);
/// assert!(check_normalization(&qubit, None).is_ok());
///
/// // Rotations change phases but keep the amplitude pair at unit norm.
/// for step in 0..10 {
///     qubit.apply_deterministic_gate(0.25 * step as f64);
/// }
/// assert!(check_normalization(&qubit, None).is_ok());
///
/// // Collapse is a threshold, so asking twice gives the same answer.
/// let bit = qubit.collapse_bit();
/// assert_eq!(bit, qubit.collapse_bit());
/// assert!(bit == Bit::Zero || bit == Bit::One);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Generating a collection and writing it as CSV
/// ```
/// use qcollapse::{CsvSink, CollapseError, Sampler, SamplerConfig, write_collection};
///
/// fn main() -> Result<(), CollapseError> {
///     let config = SamplerConfig::new(4, 0, 3)?;
///     let collection = Sampler::new(config).run();
///     assert_eq!(collection.len(), 3);
///
///     let mut sink = CsvSink::new(Vec::new());
///     write_collection(&mut sink, &collection)?;
///     let table = String::from_utf8(sink.into_inner()).expect("CSV output is UTF-8");
///     assert_eq!(table, "Bitstring\n1111\n1111\n1111\n");
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
