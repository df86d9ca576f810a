// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod qubit;
pub mod state;

// Re-export public types for convenient access via `qcollapse::core::TypeName`
pub use error::CollapseError;
pub use qubit::{Bit, Qubit};
pub use state::{gate_angle, Bitstring, QubitRegister};

pub mod constants;
pub use constants::collapse_constants::{COLLAPSE_THRESHOLD, PI}; // Re-export
